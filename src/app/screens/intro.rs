//! Intro screen implementation
//!
//! Title screen with the Start Game, Settings, Information and Quit
//! menu. Includes navigation highlighting and the palette-colored
//! banner.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::game::palette::{PALETTE, PALETTE_SIZE};

/// Menu entries on the intro screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroAction {
    StartGame,
    Settings,
    Information,
    Quit,
}

impl IntroAction {
    fn all() -> Vec<Self> {
        vec![Self::StartGame, Self::Settings, Self::Information, Self::Quit]
    }

    fn display_text(&self) -> &'static str {
        match self {
            Self::StartGame => "Start Game",
            Self::Settings => "Settings",
            Self::Information => "Information",
            Self::Quit => "Quit",
        }
    }
}

/// Intro screen component with the main menu
#[derive(Debug)]
pub struct IntroScreen {
    actions: Vec<IntroAction>,
    selected_index: usize,
    list_state: ListState,
}

impl IntroScreen {
    /// Create a new intro screen
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));

        Self {
            actions: IntroAction::all(),
            selected_index: 0,
            list_state,
        }
    }

    /// Get the currently selected menu entry
    pub fn selected_action(&self) -> IntroAction {
        self.actions[self.selected_index]
    }

    /// Move selection up
    pub fn select_previous(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        } else {
            self.selected_index = self.actions.len() - 1;
        }
        self.list_state.select(Some(self.selected_index));
    }

    /// Move selection down
    pub fn select_next(&mut self) {
        if self.selected_index < self.actions.len() - 1 {
            self.selected_index += 1;
        } else {
            self.selected_index = 0;
        }
        self.list_state.select(Some(self.selected_index));
    }

    /// Render the intro screen
    pub fn render(&mut self, f: &mut Frame) {
        let size = f.size();

        // Create main layout
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Title and subtitle
                Constraint::Min(8),    // Menu area
                Constraint::Length(3), // Help text
            ])
            .split(size);

        self.render_title(f, chunks[0]);
        self.render_menu(f, chunks[1]);
        self.render_help(f, chunks[2]);
    }

    /// Render the title section
    fn render_title(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let title_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Main title
                Constraint::Length(2), // Subtitle
            ])
            .split(area);

        // Main title, one palette color per letter (black skipped, it
        // would vanish on the terminal background)
        let letters: Vec<Span> = "CRAZY COLORS"
            .chars()
            .enumerate()
            .map(|(i, c)| {
                Span::styled(
                    c.to_string(),
                    Style::default()
                        .fg(PALETTE[1 + i % (PALETTE_SIZE - 1)].color())
                        .add_modifier(Modifier::BOLD),
                )
            })
            .collect();
        let title = Paragraph::new(Line::from(letters))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            );
        f.render_widget(title, title_chunks[0]);

        // Subtitle
        let subtitle = Paragraph::new("Name the paint, not the word")
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(subtitle, title_chunks[1]);
    }

    /// Render the main menu
    fn render_menu(&mut self, f: &mut Frame, area: ratatui::layout::Rect) {
        let items: Vec<ListItem> = self
            .actions
            .iter()
            .map(|action| ListItem::new(action.display_text()))
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Main Menu"))
            .highlight_style(Style::default().bg(Color::Cyan).fg(Color::Black))
            .highlight_symbol(">> ");

        f.render_stateful_widget(list, area, &mut self.list_state);
    }

    /// Render the help text
    fn render_help(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let help_text = vec![Line::from(vec![
            Span::styled(
                "↑↓",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Navigate  "),
            Span::styled(
                "Enter",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Select  "),
            Span::styled(
                "Ctrl+C",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Quit"),
        ])];

        let help = Paragraph::new(help_text)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            );

        f.render_widget(help, area);
    }
}

impl Default for IntroScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intro_screen_creation() {
        let screen = IntroScreen::new();
        assert_eq!(screen.selected_index, 0);
        assert_eq!(screen.selected_action(), IntroAction::StartGame);
    }

    #[test]
    fn test_menu_navigation() {
        let mut screen = IntroScreen::new();

        // Test moving down through every entry
        screen.select_next();
        assert_eq!(screen.selected_action(), IntroAction::Settings);
        screen.select_next();
        assert_eq!(screen.selected_action(), IntroAction::Information);
        screen.select_next();
        assert_eq!(screen.selected_action(), IntroAction::Quit);

        // Test wrapping to beginning
        screen.select_next();
        assert_eq!(screen.selected_action(), IntroAction::StartGame);
    }

    #[test]
    fn test_menu_navigation_up() {
        let mut screen = IntroScreen::new();

        // Test moving up from first item (should wrap to last)
        screen.select_previous();
        assert_eq!(screen.selected_action(), IntroAction::Quit);

        // Test moving up normally
        screen.select_previous();
        assert_eq!(screen.selected_action(), IntroAction::Information);
    }
}
