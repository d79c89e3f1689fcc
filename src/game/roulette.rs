//! Word-selection roulette
//!
//! Between questions the game spins a marker over the palette stripes,
//! re-rolling the highlighted word on a fixed cadence, then freezes the
//! pick for a short pause before the quiz starts. The whole animation
//! is deadline-driven: [`Roulette::update`] is called from the tick
//! loop with the current instant and nothing fires between calls, so
//! suspending the roulette is just not calling it.

use std::time::{Duration, Instant};

use rand::Rng;

use crate::game::palette::PALETTE_SIZE;

/// How often the spinning marker re-rolls its word
pub const CHANGE_INTERVAL: Duration = Duration::from_millis(200);
/// How long the marker spins before the pick freezes
pub const SPIN_DURATION: Duration = Duration::from_millis(3000);
/// Pause between the freeze and the quiz screen
pub const FIX_PAUSE: Duration = Duration::from_millis(1000);
/// Stripe the frozen marker is displayed over, regardless of the pick
pub const FIXED_SLOT: usize = 4;

/// Observable roulette milestones
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouletteEvent {
    /// The pick froze on this palette index; the pause begins
    Fixed(usize),
    /// The pause ended; start the quiz with this palette index
    Finished(usize),
}

#[derive(Debug, Clone, Copy)]
enum Phase {
    Spinning { started: Instant, last_change: Instant },
    Fixed { since: Instant },
    Done,
}

/// Deadline-driven selection animation
#[derive(Debug)]
pub struct Roulette {
    index: usize,
    phase: Phase,
}

impl Roulette {
    /// Begin a fresh spin at `now`
    pub fn start(now: Instant) -> Self {
        Self {
            index: 0,
            phase: Phase::Spinning { started: now, last_change: now },
        }
    }

    /// Drive the animation forward to `now`
    ///
    /// Returns at most one milestone per call; the caller keeps
    /// calling every tick until [`RouletteEvent::Finished`] arrives.
    pub fn update(&mut self, now: Instant, rng: &mut impl Rng) -> Option<RouletteEvent> {
        match self.phase {
            Phase::Spinning { started, last_change } => {
                if now.duration_since(started) >= SPIN_DURATION {
                    self.phase = Phase::Fixed { since: now };
                    return Some(RouletteEvent::Fixed(self.index));
                }
                if now.duration_since(last_change) >= CHANGE_INTERVAL {
                    self.index = rng.gen_range(0..PALETTE_SIZE);
                    self.phase = Phase::Spinning { started, last_change: now };
                }
                None
            }
            Phase::Fixed { since } => {
                if now.duration_since(since) >= FIX_PAUSE {
                    self.phase = Phase::Done;
                    return Some(RouletteEvent::Finished(self.index));
                }
                None
            }
            Phase::Done => None,
        }
    }

    /// Restart the current phase's window at `now`
    ///
    /// Called when an overlay that suspended the roulette closes. The
    /// pick survives; only the in-flight deadline starts over.
    pub fn resume(&mut self, now: Instant) {
        match self.phase {
            Phase::Spinning { .. } => {
                self.phase = Phase::Spinning { started: now, last_change: now };
            }
            Phase::Fixed { .. } => {
                self.phase = Phase::Fixed { since: now };
            }
            Phase::Done => {}
        }
    }

    /// Palette index currently under the marker
    pub fn index(&self) -> usize {
        self.index
    }

    /// True once the pick froze (pause running or already done)
    pub fn is_fixed(&self) -> bool {
        matches!(self.phase, Phase::Fixed { .. } | Phase::Done)
    }

    /// Terminal row of the marker given the stripe geometry
    ///
    /// While spinning the marker rides the stripe of its current pick;
    /// once fixed it relocates to the center slot.
    pub fn marker_row(&self, base: u16, stripe_height: u16) -> u16 {
        let slot = if self.is_fixed() { FIXED_SLOT } else { self.index };
        base + slot as u16 * stripe_height
    }
}
