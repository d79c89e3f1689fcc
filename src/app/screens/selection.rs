//! Selection screen implementation
//!
//! Renders the nine palette stripes with the roulette marker riding
//! over them, and drives the roulette state machine from the app's
//! tick loop.

use std::time::Instant;

use rand::Rng;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::game::palette::{self, MARKER_COLOR, PALETTE, PALETTE_SIZE};
use crate::game::roulette::{Roulette, RouletteEvent};

/// Selection screen component hosting the word roulette
#[derive(Debug, Default)]
pub struct SelectionScreen {
    roulette: Option<Roulette>,
}

impl SelectionScreen {
    /// Create a new selection screen with no roulette running
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fresh roulette spin at `now`
    pub fn start(&mut self, now: Instant) {
        self.roulette = Some(Roulette::start(now));
    }

    /// Restart the current roulette window after an overlay closes
    pub fn resume(&mut self, now: Instant) {
        if let Some(roulette) = self.roulette.as_mut() {
            roulette.resume(now);
        }
    }

    /// Drive the roulette forward; milestones bubble up to the app
    pub fn update(&mut self, now: Instant, rng: &mut impl Rng) -> Option<RouletteEvent> {
        self.roulette.as_mut()?.update(now, rng)
    }

    /// True once the roulette pick froze
    pub fn is_fixed(&self) -> bool {
        self.roulette.as_ref().map_or(false, Roulette::is_fixed)
    }

    /// Render the selection screen
    pub fn render(&mut self, f: &mut Frame) {
        let size = f.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                 // Title
                Constraint::Length(1),                 // Status line
                Constraint::Min(PALETTE_SIZE as u16),  // Palette stripes
                Constraint::Length(3),                 // Help text
            ])
            .split(size);

        self.render_title(f, chunks[0]);
        self.render_status(f, chunks[1]);
        self.render_stripes(f, chunks[2]);
        self.render_help(f, chunks[3]);
    }

    fn render_title(&self, f: &mut Frame, area: Rect) {
        let title = Paragraph::new("WORD ROULETTE")
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            );
        f.render_widget(title, area);
    }

    fn render_status(&self, f: &mut Frame, area: Rect) {
        let status = if self.is_fixed() {
            Span::styled(
                "Locked in! Get ready...",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(
                "Spinning for the next word...",
                Style::default().fg(Color::White),
            )
        };
        let status = Paragraph::new(Line::from(status)).alignment(Alignment::Center);
        f.render_widget(status, area);
    }

    /// Render the palette stripes with the marker over them
    fn render_stripes(&self, f: &mut Frame, area: Rect) {
        let stripe_height = (area.height / PALETTE_SIZE as u16).max(1);
        let base = area.y;

        for (i, entry) in PALETTE.iter().enumerate() {
            let stripe = Rect::new(
                area.x,
                base + i as u16 * stripe_height,
                area.width,
                stripe_height,
            );
            if stripe.bottom() > area.bottom() {
                break;
            }
            let fill = Block::default().style(Style::default().bg(entry.color()));
            f.render_widget(fill, stripe);
        }

        let Some(roulette) = self.roulette.as_ref() else {
            return;
        };

        // The marker rides the pick's stripe while spinning, then
        // relocates to the center stripe once fixed
        let entry = palette::entry(roulette.index());
        let label = if roulette.is_fixed() {
            format!("► {} ◄", entry.name)
        } else {
            format!("  {}  ", entry.name)
        };
        let mut row = roulette.marker_row(base, stripe_height);
        if roulette.is_fixed() {
            row += stripe_height / 2;
        }
        let width = (label.chars().count() as u16 + 2).min(area.width);
        let marker = Rect::new(
            area.x + (area.width.saturating_sub(width)) / 2,
            row.min(area.bottom().saturating_sub(1)),
            width,
            1,
        );

        let style = Style::default()
            .fg(Color::White)
            .bg(MARKER_COLOR)
            .add_modifier(Modifier::BOLD);
        let word = Paragraph::new(label).style(style).alignment(Alignment::Center);
        f.render_widget(Clear, marker);
        f.render_widget(word, marker);
    }

    fn render_help(&self, f: &mut Frame, area: Rect) {
        let help_text = vec![Line::from(vec![
            Span::styled(
                "Esc",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Info  "),
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

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::time::Duration;

    #[test]
    fn test_update_without_start_is_silent() {
        let mut screen = SelectionScreen::new();
        let mut rng = SmallRng::seed_from_u64(30);
        assert!(screen.update(Instant::now(), &mut rng).is_none());
        assert!(!screen.is_fixed());
    }

    #[test]
    fn test_full_spin_reaches_finished() {
        let mut screen = SelectionScreen::new();
        let mut rng = SmallRng::seed_from_u64(31);
        let t0 = Instant::now();
        screen.start(t0);

        let mut finished = None;
        for at in (0..=4200).step_by(50) {
            if let Some(RouletteEvent::Finished(index)) =
                screen.update(t0 + Duration::from_millis(at), &mut rng)
            {
                finished = Some(index);
            }
        }
        let index = finished.expect("roulette never finished");
        assert!(index < PALETTE_SIZE);
        assert!(screen.is_fixed());
    }

    #[test]
    fn test_start_resets_previous_spin() {
        let mut screen = SelectionScreen::new();
        let mut rng = SmallRng::seed_from_u64(32);
        let t0 = Instant::now();
        screen.start(t0);
        for at in (0..=4200).step_by(50) {
            screen.update(t0 + Duration::from_millis(at), &mut rng);
        }
        assert!(screen.is_fixed());

        // A fresh start spins again from scratch
        screen.start(t0 + Duration::from_secs(10));
        assert!(!screen.is_fixed());
    }
}
