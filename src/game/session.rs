//! Session state: current question, pending answer, clock and stats
//!
//! The answer flow is split in two so the overlay can sit between the
//! steps: [`Session::answer`] grades the choice and parks it as
//! pending, and [`Session::acknowledge`] folds it into the statistics
//! when the overlay is dismissed. Every dismissal path goes through
//! `acknowledge`, so an answered question is never lost.

use std::time::Instant;

use rand::Rng;

use crate::game::clock::SessionClock;
use crate::game::question::{Attribute, Question};
use crate::game::stats::GameStats;

/// A graded answer waiting for the player to dismiss the verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingAnswer {
    /// Palette index the player chose
    pub choice: usize,
    /// Whether the choice matched the question's target
    pub correct: bool,
}

/// One play session from intro to reset
#[derive(Debug, Default)]
pub struct Session {
    stats: GameStats,
    clock: SessionClock,
    question: Option<Question>,
    pending: Option<PendingAnswer>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a quiz round for the word the roulette picked
    pub fn begin_round(&mut self, word_index: usize, target: Attribute, rng: &mut impl Rng) {
        self.question = Some(Question::generate(word_index, target, rng));
        self.pending = None;
    }

    pub fn question(&self) -> Option<&Question> {
        self.question.as_ref()
    }

    pub fn pending(&self) -> Option<&PendingAnswer> {
        self.pending.as_ref()
    }

    /// Grade `choice` against the current question
    ///
    /// Returns the verdict, or `None` when there is no question or an
    /// earlier answer is still waiting to be acknowledged. Answering
    /// also clears the explicit clock pause left behind by a previous
    /// restart, matching the player visibly being back in the game.
    pub fn answer(&mut self, choice: usize) -> Option<bool> {
        if self.pending.is_some() {
            return None;
        }
        let question = self.question?;
        let correct = question.grade(choice);
        self.pending = Some(PendingAnswer { choice, correct });
        self.clock.unpause();
        Some(correct)
    }

    /// Fold the pending answer into the statistics
    ///
    /// Idempotent: the second call for the same answer returns `None`.
    pub fn acknowledge(&mut self) -> Option<bool> {
        let pending = self.pending.take()?;
        self.stats.settle(pending.correct);
        Some(pending.correct)
    }

    /// Advance the session clock; `counting` is the screen-side gate
    pub fn tick(&mut self, now: Instant, counting: bool) -> u64 {
        let seconds = self.clock.advance(now, counting);
        for _ in 0..seconds {
            self.stats.tick_second();
        }
        seconds
    }

    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    pub fn clock(&self) -> &SessionClock {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut SessionClock {
        &mut self.clock
    }

    /// Wipe the session back to its initial state
    pub fn reset(&mut self) {
        self.stats.reset();
        self.clock.reset();
        self.question = None;
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::time::Duration;

    fn session_with_question(rng: &mut SmallRng) -> Session {
        let mut session = Session::new();
        session.begin_round(3, Attribute::Ink, rng);
        session
    }

    #[test]
    fn test_answer_requires_a_question() {
        let mut session = Session::new();
        assert_eq!(session.answer(0), None);
    }

    #[test]
    fn test_answer_then_acknowledge_settles_once() {
        let mut rng = SmallRng::seed_from_u64(9);
        let mut session = session_with_question(&mut rng);
        let target = session.question().unwrap().target_index();

        assert_eq!(session.answer(target), Some(true));
        // Stats unchanged until the verdict is dismissed
        assert_eq!(session.stats().questions_all, 0);

        assert_eq!(session.acknowledge(), Some(true));
        assert_eq!(session.stats().questions_all, 1);
        assert_eq!(session.stats().answers_correct, 1);

        // A second acknowledge must not double-count
        assert_eq!(session.acknowledge(), None);
        assert_eq!(session.stats().questions_all, 1);
    }

    #[test]
    fn test_second_answer_blocked_while_pending() {
        let mut rng = SmallRng::seed_from_u64(10);
        let mut session = session_with_question(&mut rng);
        let target = session.question().unwrap().target_index();
        let wrong = (target + 1) % crate::game::palette::PALETTE_SIZE;

        assert_eq!(session.answer(wrong), Some(false));
        assert_eq!(session.answer(target), None);
        assert_eq!(session.acknowledge(), Some(false));
        assert_eq!(session.stats().answers_wrong, 1);
    }

    #[test]
    fn test_answer_clears_explicit_pause() {
        let mut rng = SmallRng::seed_from_u64(11);
        let mut session = session_with_question(&mut rng);
        session.clock_mut().pause();
        session.answer(0);
        assert!(!session.clock().is_paused());
    }

    #[test]
    fn test_tick_feeds_stats() {
        let mut rng = SmallRng::seed_from_u64(12);
        let mut session = session_with_question(&mut rng);
        let t0 = Instant::now();
        session.tick(t0, true);
        assert_eq!(session.tick(t0 + Duration::from_millis(2200), true), 2);
        assert_eq!(session.stats().time_spent, 2);
    }

    #[test]
    fn test_reset_drops_question_and_pending() {
        let mut rng = SmallRng::seed_from_u64(13);
        let mut session = session_with_question(&mut rng);
        session.answer(0);
        session.reset();
        assert!(session.question().is_none());
        assert!(session.pending().is_none());
        assert_eq!(session.stats().questions_all, 0);
        assert_eq!(session.acknowledge(), None);
    }
}
