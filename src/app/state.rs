//! Application state management
//!
//! Tracks the base screen, the overlay flags stacked on top of it,
//! and keyboard-to-navigation mapping for the TUI application.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Base screens the game cycles through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Title screen with the main menu
    Intro,
    /// Word roulette spinning over the palette stripes
    Selection,
    /// The quiz itself: colored word plus answer grid
    Main,
}

impl Default for Screen {
    fn default() -> Self {
        Self::Intro
    }
}

/// Navigation actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    /// Move selection up (arrow up, k)
    Up,
    /// Move selection down (arrow down, j)
    Down,
    /// Move selection left (arrow left, h)
    Left,
    /// Move selection right (arrow right, l)
    Right,
    /// Confirm selection (Enter, Space)
    Select,
    /// Interrupt/back (Esc)
    Back,
    /// Direct answer pick (number keys, zero-based index)
    Digit(usize),
    /// Quit application (Ctrl+C)
    Quit,
    /// No action
    None,
}

/// Application state manager
///
/// The base screen and the overlays are deliberately separate: an
/// overlay never replaces the screen under it, it only suspends it.
#[derive(Debug, Default)]
pub struct StateManager {
    screen: Screen,
    /// Screen to land on when the settings overlay closes
    previous_screen: Option<Screen>,
    show_settings: bool,
    show_info: bool,
    show_answer: bool,
    should_quit: bool,
}

impl StateManager {
    /// Create a new state manager starting at the intro screen
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current base screen
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Get the screen the settings overlay will return to
    pub fn previous_screen(&self) -> Option<Screen> {
        self.previous_screen
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Set the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Transition to a new base screen
    ///
    /// Returns whether the screen actually changed, so per-entry work
    /// (fresh roulette, fresh question) runs exactly once.
    pub fn transition_to(&mut self, screen: Screen) -> bool {
        if screen == self.screen {
            return false;
        }
        self.screen = screen;
        true
    }

    /// True while any overlay is covering the base screen
    pub fn overlay_open(&self) -> bool {
        self.show_settings || self.show_info || self.show_answer
    }

    pub fn settings_open(&self) -> bool {
        self.show_settings
    }

    pub fn info_open(&self) -> bool {
        self.show_info
    }

    pub fn answer_open(&self) -> bool {
        self.show_answer
    }

    /// Open the settings overlay, remembering where to return to
    pub fn open_settings(&mut self) {
        self.previous_screen = Some(self.screen);
        self.show_settings = true;
    }

    /// Close the settings overlay and hand back the return screen
    pub fn close_settings(&mut self) -> Option<Screen> {
        self.show_settings = false;
        self.previous_screen.take()
    }

    /// Open the info overlay
    ///
    /// Refused while another overlay is up: the answer verdict must be
    /// dismissed (and settled) first, and stacking info on settings
    /// has no meaning.
    pub fn open_info(&mut self) -> bool {
        if self.overlay_open() {
            return false;
        }
        self.show_info = true;
        true
    }

    pub fn close_info(&mut self) {
        self.show_info = false;
    }

    pub fn open_answer(&mut self) {
        self.show_answer = true;
    }

    pub fn close_answer(&mut self) {
        self.show_answer = false;
    }

    /// Convert keyboard event to navigation action
    pub fn key_to_navigation(key: KeyEvent) -> NavigationAction {
        match key.code {
            // Quit is deliberately Ctrl+C only; plain letters stay
            // inert so a stray press can't kill a running session
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                NavigationAction::Quit
            }

            // Navigation keys
            KeyCode::Up | KeyCode::Char('k') => NavigationAction::Up,
            KeyCode::Down | KeyCode::Char('j') => NavigationAction::Down,
            KeyCode::Left | KeyCode::Char('h') => NavigationAction::Left,
            KeyCode::Right | KeyCode::Char('l') => NavigationAction::Right,

            // Selection and confirmation
            KeyCode::Enter | KeyCode::Char(' ') => NavigationAction::Select,

            // Interrupt
            KeyCode::Esc => NavigationAction::Back,

            // Direct answer digits
            KeyCode::Char(c @ '1'..='9') => {
                NavigationAction::Digit(c as usize - '1' as usize)
            }

            _ => NavigationAction::None,
        }
    }
}
