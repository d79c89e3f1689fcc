//! TUI application module
//!
//! Contains the terminal user interface components, screen management,
//! and application state handling.

pub mod app;
pub mod overlays;
pub mod screens;
pub mod state;
pub mod tui;

pub use app::App;
pub use overlays::{AnswerOverlay, InfoAction, InfoOverlay, SettingsOverlay};
pub use screens::{IntroAction, IntroScreen, QuizScreen, SelectionScreen};
pub use state::{NavigationAction, Screen, StateManager};
pub use tui::Tui;
