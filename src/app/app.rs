//! Main application controller
//!
//! Owns the TUI, the state manager, the game session and every screen
//! and overlay component, and wires keyboard input and tick-driven
//! timers together into the game flow.

use crate::{
    app::{
        overlays::{AnswerOverlay, InfoAction, InfoOverlay, SettingsOverlay},
        screens::{IntroAction, IntroScreen, QuizScreen, SelectionScreen},
        state::{NavigationAction, Screen, StateManager},
        tui::Tui,
    },
    config::{
        persistence::{SessionRecord, SessionStorage},
        Settings,
    },
    game::{roulette::RouletteEvent, session::Session},
    Result,
};
use crossterm::event::{KeyCode, KeyEvent};
use rand::{rngs::SmallRng, SeedableRng};
use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};
use std::io;
use std::time::Instant;

/// Smallest terminal the layouts are designed for
const MIN_WIDTH: u16 = 60;
const MIN_HEIGHT: u16 = 18;

/// TUI application controller
pub struct App {
    /// Terminal UI handler
    tui: Tui,
    /// Application state manager
    state_manager: StateManager,
    /// Player preferences
    settings: Settings,
    /// Current play session
    session: Session,
    /// Randomness for the roulette and question generation
    rng: SmallRng,
    /// Screen components
    intro_screen: IntroScreen,
    selection_screen: SelectionScreen,
    quiz_screen: QuizScreen,
    /// Overlay components
    settings_overlay: SettingsOverlay,
    info_overlay: InfoOverlay,
    answer_overlay: AnswerOverlay,
}

impl App {
    /// Create a new application instance
    pub fn new() -> Result<Self> {
        let settings = Settings::load()?;
        Ok(Self {
            tui: Tui::new()?,
            state_manager: StateManager::new(),
            settings,
            session: Session::new(),
            rng: SmallRng::from_entropy(),
            intro_screen: IntroScreen::new(),
            selection_screen: SelectionScreen::new(),
            quiz_screen: QuizScreen::new(),
            settings_overlay: SettingsOverlay::new(),
            info_overlay: InfoOverlay::new(),
            answer_overlay: AnswerOverlay::new(),
        })
    }

    /// Initialize the application and TUI
    pub fn init(&mut self) -> Result<()> {
        self.tui.init()?;
        Ok(())
    }

    /// Restore the terminal to its original state
    pub fn restore(&mut self) -> Result<()> {
        self.tui.restore()?;
        Ok(())
    }

    /// Run the main application loop
    pub async fn run(&mut self) -> Result<()> {
        while !self.state_manager.should_quit() {
            self.advance_timers(Instant::now());
            self.draw()?;
            if let Some(key) = self.tui.handle_events()? {
                self.handle_key(key, Instant::now());
            }
        }
        Ok(())
    }

    /// Drive the deadline-based timers from the tick loop
    ///
    /// Nothing here fires while an overlay is open: the roulette is
    /// simply not updated and the clock gate is closed, so there are
    /// no stale callbacks to cancel when state changes under them.
    fn advance_timers(&mut self, now: Instant) {
        if self.state_manager.screen() == Screen::Selection && !self.state_manager.overlay_open() {
            if let Some(event) = self.selection_screen.update(now, &mut self.rng) {
                match event {
                    RouletteEvent::Fixed(_) => {}
                    RouletteEvent::Finished(word_index) => self.enter_quiz(word_index),
                }
            }
        }

        let counting =
            self.state_manager.screen() == Screen::Main && !self.state_manager.overlay_open();
        self.session.tick(now, counting);
    }

    /// Draw the current screen and whatever overlay covers it
    fn draw(&mut self) -> io::Result<()> {
        self.tui.draw(|f| {
            let size = f.size();
            if size.width < MIN_WIDTH || size.height < MIN_HEIGHT {
                render_size_warning(f);
                return;
            }

            match self.state_manager.screen() {
                Screen::Intro => self.intro_screen.render(f),
                Screen::Selection => self.selection_screen.render(f),
                Screen::Main => self.quiz_screen.render(f, &self.session),
            }

            if self.state_manager.settings_open() {
                self.settings_overlay.render(f, &self.settings);
            } else if self.state_manager.info_open() {
                self.info_overlay.render(f, self.session.stats());
            } else if self.state_manager.answer_open() {
                if let Some(pending) = self.session.pending() {
                    self.answer_overlay.render(f, pending.correct);
                }
            }
        })
    }

    /// Handle one keyboard event and update state
    fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        let action = StateManager::key_to_navigation(key);

        // Global quit wins over everything, pending answer included
        if action == NavigationAction::Quit {
            self.state_manager.quit();
            return;
        }

        // Overlays swallow input while open
        if self.state_manager.answer_open() {
            self.dismiss_answer(action == NavigationAction::Back, now);
            return;
        }
        if self.state_manager.settings_open() {
            self.handle_settings_keys(key, now);
            return;
        }
        if self.state_manager.info_open() {
            self.handle_info_keys(key, now);
            return;
        }

        // Esc interrupts any base screen into the info overlay
        if action == NavigationAction::Back {
            self.open_info();
            return;
        }

        match self.state_manager.screen() {
            Screen::Intro => self.handle_intro_keys(action, now),
            // The roulette runs on its own; no interaction here
            Screen::Selection => {}
            Screen::Main => self.handle_quiz_keys(action),
        }
    }

    fn handle_intro_keys(&mut self, action: NavigationAction, now: Instant) {
        match action {
            NavigationAction::Up => self.intro_screen.select_previous(),
            NavigationAction::Down => self.intro_screen.select_next(),
            NavigationAction::Select => match self.intro_screen.selected_action() {
                IntroAction::StartGame => self.enter_selection(now),
                IntroAction::Settings => {
                    self.settings_overlay.reset();
                    self.state_manager.open_settings();
                }
                IntroAction::Information => self.open_info(),
                IntroAction::Quit => self.state_manager.quit(),
            },
            _ => {}
        }
    }

    fn handle_quiz_keys(&mut self, action: NavigationAction) {
        match action {
            NavigationAction::Up => self.quiz_screen.move_up(),
            NavigationAction::Down => self.quiz_screen.move_down(),
            NavigationAction::Left => self.quiz_screen.move_left(),
            NavigationAction::Right => self.quiz_screen.move_right(),
            NavigationAction::Select => self.submit_answer(self.quiz_screen.cursor()),
            NavigationAction::Digit(index) => self.submit_answer(index),
            _ => {}
        }
    }

    fn handle_settings_keys(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Up => self.settings_overlay.select_previous_field(),
            KeyCode::Down => self.settings_overlay.select_next_field(),
            KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') => {
                self.settings_overlay.toggle_selected(&mut self.settings);
                // Persist immediately; a failure shows up in the
                // overlay instead of silently losing the choice
                let status = self
                    .settings
                    .save()
                    .err()
                    .map(|e| format!("Save failed: {}", e));
                self.settings_overlay.set_save_status(status);
            }
            KeyCode::Enter | KeyCode::Esc => self.close_settings(now),
            _ => {}
        }
    }

    fn handle_info_keys(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Left | KeyCode::Right => self.info_overlay.move_horizontal(),
            KeyCode::Up | KeyCode::Down => self.info_overlay.move_vertical(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                let action = self.info_overlay.selected_action();
                self.perform_info_action(action, now);
            }
            KeyCode::Esc => self.perform_info_action(InfoAction::Continue, now),
            _ => {}
        }
    }

    fn perform_info_action(&mut self, action: InfoAction, now: Instant) {
        match action {
            InfoAction::Continue => {
                self.state_manager.close_info();
                match self.state_manager.screen() {
                    Screen::Main => self.session.clock_mut().unpause(),
                    Screen::Selection => self.selection_screen.resume(now),
                    Screen::Intro => {}
                }
            }
            InfoAction::Restart => {
                self.state_manager.close_info();
                self.enter_selection(now);
            }
            InfoAction::Settings => {
                self.state_manager.close_info();
                self.settings_overlay.reset();
                self.state_manager.open_settings();
            }
            InfoAction::Reset => self.reset_game(),
        }
    }

    /// Submit an answer for the current question
    fn submit_answer(&mut self, index: usize) {
        if self.session.answer(index).is_some() {
            self.quiz_screen.set_pressed(index);
            self.state_manager.open_answer();
        }
    }

    /// Dismiss the answer verdict, settling it into the statistics
    ///
    /// Every dismissal path settles exactly once; `to_info` decides
    /// whether play continues with a new word or the info overlay.
    fn dismiss_answer(&mut self, to_info: bool, now: Instant) {
        self.session.acknowledge();
        self.quiz_screen.clear_pressed();
        self.state_manager.close_answer();
        if to_info {
            self.open_info();
        } else {
            self.enter_selection(now);
        }
    }

    /// Open the info overlay and pause the game under it
    fn open_info(&mut self) {
        if self.state_manager.open_info() {
            self.info_overlay.reset_cursor();
            self.session.clock_mut().pause();
        }
    }

    /// Close the settings overlay and resume whatever it covered
    fn close_settings(&mut self, now: Instant) {
        match self.state_manager.close_settings() {
            Some(Screen::Main) => self.session.clock_mut().unpause(),
            Some(Screen::Selection) => self.selection_screen.resume(now),
            _ => {}
        }
    }

    /// Head to the selection screen and spin a fresh roulette
    ///
    /// Play is visibly resuming, so any lingering explicit pause is
    /// cleared here rather than waiting for the first answer.
    fn enter_selection(&mut self, now: Instant) {
        self.session.clock_mut().unpause();
        self.state_manager.transition_to(Screen::Selection);
        self.selection_screen.start(now);
    }

    /// The roulette finished: move to the quiz with its word
    fn enter_quiz(&mut self, word_index: usize) {
        if self.state_manager.transition_to(Screen::Main) {
            let target = self.settings.resolve_attribute(&mut self.rng);
            self.session.begin_round(word_index, target, &mut self.rng);
            self.quiz_screen.clear_pressed();
        }
    }

    /// End the session: archive it, wipe it, back to the intro
    fn reset_game(&mut self) {
        if self.session.stats().has_answers() {
            if let Ok(storage) = SessionStorage::new() {
                let record = SessionRecord::new(*self.session.stats(), self.settings);
                // A full disk should not block leaving the game
                let _ = storage.append_session(record);
            }
        }
        self.session.reset();
        self.quiz_screen.reset();
        self.state_manager.close_info();
        self.state_manager.transition_to(Screen::Intro);
    }
}

/// Fallback notice when the terminal is below the minimum layout size
fn render_size_warning(f: &mut Frame) {
    let message = Paragraph::new(vec![
        Line::raw("Terminal too small"),
        Line::raw(format!("Need at least {} x {}", MIN_WIDTH, MIN_HEIGHT)),
    ])
    .style(Style::default().fg(Color::Yellow))
    .alignment(Alignment::Center);
    f.render_widget(message, f.size());
}
