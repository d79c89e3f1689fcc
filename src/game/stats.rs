//! Running session statistics
//!
//! Counters grow only through [`GameStats::settle`] and
//! [`GameStats::tick_second`], so the average stays derived from the
//! two base figures instead of drifting on its own.

use serde::{Deserialize, Serialize};

/// Statistics for the current quiz session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    /// Questions answered (correct and wrong)
    pub questions_all: u32,
    /// Correct answers
    pub answers_correct: u32,
    /// Wrong answers
    pub answers_wrong: u32,
    /// Whole seconds spent with the clock running
    pub time_spent: u64,
    /// Average seconds per answered question, rounded to nearest
    pub time_per_answer: u64,
}

impl GameStats {
    /// Fresh all-zero statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one elapsed second of active play
    pub fn tick_second(&mut self) {
        self.time_spent += 1;
        self.recompute_average();
    }

    /// Record an answered question
    pub fn settle(&mut self, correct: bool) {
        self.questions_all += 1;
        if correct {
            self.answers_correct += 1;
        } else {
            self.answers_wrong += 1;
        }
        self.recompute_average();
    }

    /// Zero every counter
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True once at least one question has been settled
    pub fn has_answers(&self) -> bool {
        self.questions_all > 0
    }

    fn recompute_average(&mut self) {
        self.time_per_answer = if self.questions_all > 0 {
            (self.time_spent as f64 / self.questions_all as f64).round() as u64
        } else {
            0
        };
    }
}
