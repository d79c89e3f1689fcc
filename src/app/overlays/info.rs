//! Info overlay implementation
//!
//! The pause/exit panel: shows the session statistics so far and a
//! 2x2 action grid (Continue, Restart, Settings, Reset). Opening it
//! pauses the game; the chosen action decides where play goes next.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::overlays::centered_rect;
use crate::game::stats::GameStats;
use crate::util::units::{format_average, format_clock};

/// Actions offered by the info overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoAction {
    /// Close the overlay and resume where play left off
    Continue,
    /// Abandon the current question and spin a new word
    Restart,
    /// Open the settings overlay
    Settings,
    /// End the session: archive it, wipe stats, back to the intro
    Reset,
}

impl InfoAction {
    fn all() -> [Self; 4] {
        [Self::Continue, Self::Restart, Self::Settings, Self::Reset]
    }

    fn display_text(&self) -> &'static str {
        match self {
            Self::Continue => "Continue",
            Self::Restart => "Restart",
            Self::Settings => "Settings",
            Self::Reset => "Reset",
        }
    }
}

/// Info overlay component with the 2x2 action grid
#[derive(Debug)]
pub struct InfoOverlay {
    selected_index: usize,
}

impl InfoOverlay {
    /// Create a new info overlay
    pub fn new() -> Self {
        Self { selected_index: 0 }
    }

    /// Back to the default action for a fresh opening
    pub fn reset_cursor(&mut self) {
        self.selected_index = 0;
    }

    /// Get the currently selected action
    pub fn selected_action(&self) -> InfoAction {
        InfoAction::all()[self.selected_index]
    }

    /// Move within the current row; rows are two wide, so left and
    /// right both land on the other button
    pub fn move_horizontal(&mut self) {
        self.selected_index ^= 1;
    }

    /// Move to the other row, keeping the column
    pub fn move_vertical(&mut self) {
        self.selected_index ^= 2;
    }

    /// Render the info overlay over the current screen
    pub fn render(&mut self, f: &mut Frame, stats: &GameStats) {
        let area = centered_rect(60, 14, f.size());
        f.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" INFORMATION ")
            .title_alignment(Alignment::Center)
            .border_style(Style::default().fg(Color::Red));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6), // Statistics
                Constraint::Length(1), // Prompt
                Constraint::Length(1), // Action row 1
                Constraint::Length(1), // Spacer
                Constraint::Length(1), // Action row 2
                Constraint::Min(1),    // Help text
            ])
            .split(inner);

        self.render_stats(f, chunks[0], stats);

        let prompt = Paragraph::new("Choose an action:")
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(prompt, chunks[1]);

        self.render_action_row(f, chunks[2], 0);
        self.render_action_row(f, chunks[4], 2);

        let help = Paragraph::new("←→↑↓ Move  Enter Select  Esc Continue")
            .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC))
            .alignment(Alignment::Center);
        f.render_widget(help, chunks[5]);
    }

    fn render_stats(&self, f: &mut Frame, area: Rect, stats: &GameStats) {
        let block = Block::default().borders(Borders::ALL).title("Session so far");
        let inner = block.inner(area);
        f.render_widget(block, area);

        let lines = vec![
            Line::from(format!("Questions: {}", stats.questions_all)),
            Line::from(vec![
                Span::raw("Correct: "),
                Span::styled(
                    stats.answers_correct.to_string(),
                    Style::default().fg(Color::Green),
                ),
                Span::raw("  Wrong: "),
                Span::styled(
                    stats.answers_wrong.to_string(),
                    Style::default().fg(Color::Red),
                ),
            ]),
            Line::from(format!(
                "Time: {}  Avg: {}",
                format_clock(stats.time_spent),
                format_average(stats.time_per_answer)
            )),
        ];
        let panel = Paragraph::new(lines).alignment(Alignment::Center);
        f.render_widget(panel, inner);
    }

    fn render_action_row(&self, f: &mut Frame, area: Rect, first_index: usize) {
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        for (slot, action) in InfoAction::all()
            .iter()
            .enumerate()
            .skip(first_index)
            .take(2)
        {
            let style = if slot == self.selected_index {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let button = Paragraph::new(action.display_text())
                .style(style)
                .alignment(Alignment::Center);
            f.render_widget(button, halves[slot - first_index]);
        }
    }
}

impl Default for InfoOverlay {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_action_is_continue() {
        let overlay = InfoOverlay::new();
        assert_eq!(overlay.selected_action(), InfoAction::Continue);
    }

    #[test]
    fn test_horizontal_movement_toggles_within_row() {
        let mut overlay = InfoOverlay::new();

        overlay.move_horizontal();
        assert_eq!(overlay.selected_action(), InfoAction::Restart);
        overlay.move_horizontal();
        assert_eq!(overlay.selected_action(), InfoAction::Continue);
    }

    #[test]
    fn test_vertical_movement_keeps_column() {
        let mut overlay = InfoOverlay::new();

        overlay.move_vertical();
        assert_eq!(overlay.selected_action(), InfoAction::Settings);
        overlay.move_horizontal();
        assert_eq!(overlay.selected_action(), InfoAction::Reset);
        overlay.move_vertical();
        assert_eq!(overlay.selected_action(), InfoAction::Restart);
    }

    #[test]
    fn test_reset_cursor() {
        let mut overlay = InfoOverlay::new();
        overlay.move_vertical();
        overlay.move_horizontal();
        overlay.reset_cursor();
        assert_eq!(overlay.selected_action(), InfoAction::Continue);
    }
}
