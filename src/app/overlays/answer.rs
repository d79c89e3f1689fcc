//! Answer overlay implementation
//!
//! The verdict splash shown right after an answer. Any key dismisses
//! it; dismissal is what settles the answer into the statistics, so
//! the overlay itself stays stateless.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::overlays::centered_rect;
use crate::game::palette::{CORRECT_COLOR, WRONG_COLOR};

/// Answer verdict overlay component
#[derive(Debug, Default)]
pub struct AnswerOverlay;

impl AnswerOverlay {
    /// Create a new answer overlay
    pub fn new() -> Self {
        Self
    }

    /// Render the verdict over the quiz screen
    pub fn render(&self, f: &mut Frame, correct: bool) {
        let area = centered_rect(40, 7, f.size());
        f.render_widget(Clear, area);

        let (backdrop, verdict) = if correct {
            (CORRECT_COLOR, "Correct!")
        } else {
            (WRONG_COLOR, "Wrong!")
        };

        let lines = vec![
            Line::raw(""),
            Line::styled(
                verdict,
                Style::default().fg(Color::Black).add_modifier(Modifier::BOLD),
            ),
            Line::raw(""),
            Line::styled(
                "Press any key to continue (Esc for info)",
                Style::default().fg(Color::Black),
            ),
        ];

        let splash = Paragraph::new(lines)
            .style(Style::default().bg(backdrop))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Black)),
            );
        f.render_widget(splash, area);
    }
}
