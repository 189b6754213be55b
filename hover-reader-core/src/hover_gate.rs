//! Time gate deciding when a hover turns the page
//!
//! A single pointer hover makes the host re-query many times in quick
//! succession. Only a hover arriving after a quiet period longer than the
//! cooldown advances; the rest reuse the page already on screen.

use std::time::{Duration, Instant};

/// Quiet period required between hovers before the page turns again
pub const HOVER_COOLDOWN: Duration = Duration::from_millis(500);

/// What the session should do with a hover
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Reader is disabled or the location is noise: show nothing, change nothing
    Ignore,
    /// Turn the page, then render
    Advance,
    /// Show the last rendered page unchanged
    Reuse,
}

/// Enabled flag plus the instant of the last accepted hover
#[derive(Debug, Clone)]
pub struct HoverGate {
    enabled: bool,
    last_hover: Option<Instant>,
    cooldown: Duration,
}

impl Default for HoverGate {
    fn default() -> Self {
        Self::new()
    }
}

impl HoverGate {
    /// A disabled gate with the standard cooldown
    pub fn new() -> Self {
        Self::with_cooldown(HOVER_COOLDOWN)
    }

    /// A disabled gate with a custom cooldown
    pub fn with_cooldown(cooldown: Duration) -> Self {
        Self {
            enabled: false,
            last_hover: None,
            cooldown,
        }
    }

    /// Whether hovers are being processed
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Configured cooldown
    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    /// Flip between enabled and disabled, returning the new flag
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }

    /// Evaluate a hover arriving at `now`
    ///
    /// `is_noise` comes from the classifier. Noise never touches the
    /// timestamp; every other accepted hover records `now`, whether or not
    /// it advances.
    pub fn evaluate(&mut self, is_noise: bool, now: Instant) -> GateDecision {
        if !self.enabled || is_noise {
            return GateDecision::Ignore;
        }

        let quiet_long_enough = match self.last_hover {
            None => true,
            Some(previous) => now.saturating_duration_since(previous) > self.cooldown,
        };
        self.last_hover = Some(now);

        if quiet_long_enough {
            GateDecision::Advance
        } else {
            GateDecision::Reuse
        }
    }
}
