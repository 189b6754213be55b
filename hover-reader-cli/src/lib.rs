//! Hover reader CLI library
//!
//! This library provides the command-line host for the hover reader:
//! one-shot commands over the settings and state files, and a `run` loop
//! that drives a live session from host events.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod prompt;

pub use error::{CliError, CliResult};
