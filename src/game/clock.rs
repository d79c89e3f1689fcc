//! One-second session clock
//!
//! The clock never spawns a timer. The app's tick loop calls
//! [`SessionClock::advance`] with the current instant and whether play
//! counts right now; the clock hands back how many whole seconds to
//! credit. Closing the gate drops the anchor, so a partially elapsed
//! second is discarded rather than carried across a pause.

use std::time::{Duration, Instant};

/// Gated whole-second counter for active play time
#[derive(Debug, Default)]
pub struct SessionClock {
    /// Start of the second currently being measured
    anchor: Option<Instant>,
    /// Explicit pause flag, independent of which screen is showing
    paused: bool,
}

impl SessionClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the explicit pause flag and discard the running second
    pub fn pause(&mut self) {
        self.paused = true;
        self.anchor = None;
    }

    /// Clear the explicit pause flag
    pub fn unpause(&mut self) {
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Advance the clock and return the number of whole seconds that
    /// elapsed while play counted
    ///
    /// `counting` reflects the screen-side gate (quiz visible, no
    /// overlay). When either gate is closed the anchor is dropped and
    /// zero is returned.
    pub fn advance(&mut self, now: Instant, counting: bool) -> u64 {
        if self.paused || !counting {
            self.anchor = None;
            return 0;
        }
        let anchor = *self.anchor.get_or_insert(now);
        let elapsed = now.duration_since(anchor).as_secs();
        if elapsed > 0 {
            // Keep the fractional remainder for the next call
            self.anchor = Some(anchor + Duration::from_secs(elapsed));
        }
        elapsed
    }

    /// Back to the initial state: unpaused, no running second
    pub fn reset(&mut self) {
        self.anchor = None;
        self.paused = false;
    }
}
