//! Hover-driven text paging
//!
//! This crate pages through a plain-text document one small slice at a
//! time, advancing when the host reports a pointer hover. It contains no
//! host integration of its own: the host feeds hover and command events
//! into a [`PagerSession`] and draws whatever comes back.
//!
//! # Architecture
//!
//! - **Pagination** ([`pagination`]): pure page arithmetic over a line corpus
//! - **Hover gate** ([`hover_gate`]): debounces hover bursts into single page turns
//! - **Classifier** ([`classifier`]): keeps version-control content from turning pages
//! - **Adapters** ([`corpus`], [`settings`], [`persistence`]): file loading,
//!   settings and durable position
//! - **Session** ([`session`]): owns all mutable state and routes events
//!
//! # Example
//!
//! ```rust
//! use hover_reader_core::{
//!     CancellationToken, Command, MemorySettings, MemoryStateStore, PagerSession,
//!     Position, TextDocument,
//! };
//! use std::time::Instant;
//!
//! let (mut session, _notices) =
//!     PagerSession::activate(MemorySettings::default(), MemoryStateStore::default(), None);
//! session.on_command(Command::Toggle);
//!
//! let doc = TextDocument::new("notes.txt", "an ordinary line of prose");
//! let decision = session.on_hover(&doc, Position::new(0, 3), &CancellationToken::new(), Instant::now());
//! assert_eq!(decision.page().unwrap().page_index, 1);
//! ```

#![warn(missing_docs)]

pub mod classifier;
pub mod corpus;
pub mod error;
pub mod hover_gate;
pub mod input;
pub mod pagination;
pub mod persistence;
pub mod session;
pub mod settings;
pub mod status;

// Re-export key types
pub use classifier::is_noise;
pub use corpus::{Corpus, CorpusSource, LoadReport};
pub use error::{InputError, ReaderError, Result};
pub use hover_gate::{GateDecision, HoverGate, HOVER_COOLDOWN};
pub use input::{parse_lines_per_page, parse_page_number};
pub use pagination::{Direction, PagerState, RenderedPage};
pub use persistence::{JsonStateStore, MemoryStateStore, StateStore};
pub use session::{
    CancellationToken, Command, HoverDocument, Notice, PagerSession, Position, RenderDecision,
    SettingsSync, StateDelta, TextDocument,
};
pub use settings::{MemorySettings, ReaderSettings, SettingsSource, TomlSettings};
pub use status::{MenuEntry, StatusView};
