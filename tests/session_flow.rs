//! Integration tests for a full play session driven on a fake timeline

use std::time::{Duration, Instant};

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crazycolors::config::{QuizMode, Settings};
use crazycolors::game::{
    palette::PALETTE_SIZE,
    roulette::{Roulette, RouletteEvent, FIX_PAUSE, SPIN_DURATION},
    Question, Session,
};

/// Drive a roulette to completion on a 50ms grid, returning the word
fn spin_out(roulette: &mut Roulette, t0: Instant, rng: &mut SmallRng) -> usize {
    let mut at = 0;
    loop {
        let now = t0 + Duration::from_millis(at);
        if let Some(RouletteEvent::Finished(word)) = roulette.update(now, rng) {
            return word;
        }
        at += 50;
        assert!(at < 10_000, "roulette never finished");
    }
}

#[test]
fn test_full_round_settles_into_stats() {
    let mut rng = SmallRng::seed_from_u64(100);
    let settings = Settings::default();
    let mut session = Session::new();
    let t0 = Instant::now();

    // Roulette picks the word
    let mut roulette = Roulette::start(t0);
    let word = spin_out(&mut roulette, t0, &mut rng);
    assert!(word < PALETTE_SIZE);

    // The quiz round starts with the picked word
    let target = settings.resolve_attribute(&mut rng);
    session.begin_round(word, target, &mut rng);
    let question = session.question().expect("round should have a question");
    assert_eq!(question.word_index, word);
    assert_ne!(question.ink_index, question.background_index);

    // Clock runs while the player thinks
    let quiz_start = t0 + SPIN_DURATION + FIX_PAUSE;
    session.tick(quiz_start, true);
    session.tick(quiz_start + Duration::from_secs(4), true);
    assert_eq!(session.stats().time_spent, 4);

    // Correct answer, verdict shown, then dismissed
    let correct_index = session.question().unwrap().target_index();
    assert_eq!(session.answer(correct_index), Some(true));
    assert_eq!(session.stats().questions_all, 0);
    assert_eq!(session.acknowledge(), Some(true));

    let stats = session.stats();
    assert_eq!(stats.questions_all, 1);
    assert_eq!(stats.answers_correct, 1);
    assert_eq!(stats.answers_wrong, 0);
    assert_eq!(stats.time_per_answer, 4);
}

#[test]
fn test_clock_gated_while_verdict_is_up() {
    let mut rng = SmallRng::seed_from_u64(101);
    let mut session = Session::new();
    let settings = Settings::default();
    let t0 = Instant::now();

    session.begin_round(2, settings.resolve_attribute(&mut rng), &mut rng);
    session.tick(t0, true);
    session.tick(t0 + Duration::from_secs(2), true);

    // Answer goes up; the verdict overlay closes the clock gate
    session.answer(0);
    session.tick(t0 + Duration::from_secs(30), false);
    assert_eq!(session.stats().time_spent, 2);

    // Dismissal settles and play resumes counting
    session.acknowledge();
    session.tick(t0 + Duration::from_secs(31), true);
    session.tick(t0 + Duration::from_secs(33), true);
    assert_eq!(session.stats().time_spent, 4);
}

#[test]
fn test_average_tracks_multiple_answers() {
    let mut rng = SmallRng::seed_from_u64(102);
    let mut session = Session::new();
    let settings = Settings {
        mode: QuizMode::RandomPerAnswer,
        ..Settings::default()
    };
    let t0 = Instant::now();
    let mut now = t0;
    session.tick(now, true);

    // Three rounds with 3, 4 and 5 thinking seconds
    for (round, think) in [3u64, 4, 5].iter().enumerate() {
        let target = settings.resolve_attribute(&mut rng);
        session.begin_round(round % PALETTE_SIZE, target, &mut rng);

        now += Duration::from_secs(*think);
        session.tick(now, true);

        let target_index = session.question().unwrap().target_index();
        // Answer wrong on the last round
        let choice = if round == 2 {
            (target_index + 1) % PALETTE_SIZE
        } else {
            target_index
        };
        session.answer(choice);
        session.acknowledge();
    }

    let stats = session.stats();
    assert_eq!(stats.questions_all, 3);
    assert_eq!(stats.answers_correct, 2);
    assert_eq!(stats.answers_wrong, 1);
    assert_eq!(stats.time_spent, 12);
    assert_eq!(stats.time_per_answer, 4);
    assert_eq!(stats.questions_all, stats.answers_correct + stats.answers_wrong);
}

#[test]
fn test_fixed_mode_asks_the_same_attribute_every_round() {
    let mut rng = SmallRng::seed_from_u64(103);
    let settings = Settings::default();

    for word in 0..PALETTE_SIZE {
        let target = settings.resolve_attribute(&mut rng);
        let question = Question::generate(word, target, &mut rng);
        assert_eq!(question.target, settings.attribute);
    }
}

#[test]
fn test_reset_wipes_the_session() {
    let mut rng = SmallRng::seed_from_u64(104);
    let mut session = Session::new();
    let settings = Settings::default();
    let t0 = Instant::now();

    session.begin_round(5, settings.resolve_attribute(&mut rng), &mut rng);
    session.tick(t0, true);
    session.tick(t0 + Duration::from_secs(7), true);
    session.answer(1);
    session.acknowledge();

    session.reset();
    assert!(session.question().is_none());
    assert!(session.pending().is_none());
    assert_eq!(session.stats().questions_all, 0);
    assert_eq!(session.stats().time_spent, 0);

    // A fresh session counts from zero again
    let t1 = t0 + Duration::from_secs(100);
    session.begin_round(1, settings.resolve_attribute(&mut rng), &mut rng);
    session.tick(t1, true);
    session.tick(t1 + Duration::from_secs(1), true);
    assert_eq!(session.stats().time_spent, 1);
}

#[test]
fn test_interrupted_roulette_resumes_with_fresh_window() {
    let mut rng = SmallRng::seed_from_u64(105);
    let t0 = Instant::now();
    let mut roulette = Roulette::start(t0);

    // 2.5s into the spin an overlay suspends updates
    let mut at = 0;
    while at <= 2500 {
        roulette.update(t0 + Duration::from_millis(at), &mut rng);
        at += 50;
    }
    assert!(!roulette.is_fixed());

    // Overlay closes much later; the spin window restarts rather than
    // firing instantly off the stale deadline
    let t1 = t0 + Duration::from_secs(40);
    roulette.resume(t1);
    assert!(roulette.update(t1, &mut rng).is_none());
    assert!(roulette
        .update(t1 + Duration::from_millis(2950), &mut rng)
        .is_none());

    let word = spin_out(&mut roulette, t1 + Duration::from_millis(3000), &mut rng);
    assert!(word < PALETTE_SIZE);
}
