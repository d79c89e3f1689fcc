//! TUI screen components
//!
//! Contains individual screen implementations for the three base
//! screens of the game.

pub mod intro;
pub mod quiz;
pub mod selection;

pub use intro::{IntroAction, IntroScreen};
pub use quiz::QuizScreen;
pub use selection::SelectionScreen;
