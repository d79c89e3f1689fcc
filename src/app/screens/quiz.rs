//! Quiz screen implementation
//!
//! Shows the colored word, the running session statistics and the
//! nine answer buttons. The button grid collapses from three columns
//! to two on narrow terminals, and cursor movement follows whatever
//! grid was last rendered.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::game::palette::{self, BUTTON_COLOR, BUTTON_PRESSED_COLOR, PALETTE, PALETTE_SIZE};
use crate::game::session::Session;
use crate::util::units::{format_average, format_clock};

/// Terminal width below which the answer grid drops to two columns
const NARROW_WIDTH: u16 = 70;

/// Quiz screen component with the answer grid
#[derive(Debug)]
pub struct QuizScreen {
    cursor: usize,
    pressed: Option<usize>,
    /// Column count of the last rendered grid; movement math follows it
    grid_cols: usize,
}

impl QuizScreen {
    /// Create a new quiz screen
    pub fn new() -> Self {
        Self {
            cursor: 0,
            pressed: None,
            grid_cols: 3,
        }
    }

    /// Palette index currently under the cursor
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Highlight `index` as the held-down answer button
    pub fn set_pressed(&mut self, index: usize) {
        self.pressed = Some(index);
    }

    /// Release the held-down answer button
    pub fn clear_pressed(&mut self) {
        self.pressed = None;
    }

    /// Back to the initial cursor state
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.pressed = None;
    }

    /// Move the cursor left, wrapping within its row
    pub fn move_left(&mut self) {
        let (row_start, row_len) = self.row_bounds();
        self.cursor = if self.cursor > row_start {
            self.cursor - 1
        } else {
            row_start + row_len - 1
        };
    }

    /// Move the cursor right, wrapping within its row
    pub fn move_right(&mut self) {
        let (row_start, row_len) = self.row_bounds();
        self.cursor = if self.cursor < row_start + row_len - 1 {
            self.cursor + 1
        } else {
            row_start
        };
    }

    /// Move the cursor up, wrapping to the bottom of the column
    pub fn move_up(&mut self) {
        if self.cursor >= self.grid_cols {
            self.cursor -= self.grid_cols;
        } else {
            let col = self.cursor;
            self.cursor = col + ((PALETTE_SIZE - 1 - col) / self.grid_cols) * self.grid_cols;
        }
    }

    /// Move the cursor down, wrapping to the top of the column
    pub fn move_down(&mut self) {
        let candidate = self.cursor + self.grid_cols;
        self.cursor = if candidate < PALETTE_SIZE {
            candidate
        } else {
            self.cursor % self.grid_cols
        };
    }

    fn row_bounds(&self) -> (usize, usize) {
        let row_start = (self.cursor / self.grid_cols) * self.grid_cols;
        let row_len = self.grid_cols.min(PALETTE_SIZE - row_start);
        (row_start, row_len)
    }

    /// Render the quiz screen
    pub fn render(&mut self, f: &mut Frame, session: &Session) {
        let size = f.size();
        self.grid_cols = if size.width < NARROW_WIDTH { 2 } else { 3 };
        let grid_rows = (PALETTE_SIZE + self.grid_cols - 1) / self.grid_cols;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                // Prompt
                Constraint::Length(4),                // Statistics
                Constraint::Min(3),                   // The word
                Constraint::Length(grid_rows as u16), // Answer grid
                Constraint::Length(3),                // Help text
            ])
            .split(size);

        self.render_prompt(f, chunks[0], session);
        self.render_stats(f, chunks[1], session);
        self.render_word(f, chunks[2], session);
        self.render_grid(f, chunks[3]);
        self.render_help(f, chunks[4]);
    }

    fn render_prompt(&self, f: &mut Frame, area: Rect, session: &Session) {
        let prompt = session
            .question()
            .map(|q| q.target.prompt())
            .unwrap_or("Get ready...");
        let title = Paragraph::new(prompt)
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            );
        f.render_widget(title, area);
    }

    fn render_stats(&self, f: &mut Frame, area: Rect, session: &Session) {
        let stats = session.stats();
        let block = Block::default().borders(Borders::ALL).title("Session");
        let inner = block.inner(area);
        f.render_widget(block, area);

        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(inner);

        let answers = Paragraph::new(vec![
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
        ]);
        f.render_widget(answers, halves[0]);

        let timing = Paragraph::new(vec![
            Line::from(format!("Time: {}", format_clock(stats.time_spent))),
            Line::from(format!("Avg: {}", format_average(stats.time_per_answer))),
        ])
        .alignment(Alignment::Right);
        f.render_widget(timing, halves[1]);
    }

    /// Render the word in its ink on its background
    fn render_word(&self, f: &mut Frame, area: Rect, session: &Session) {
        let Some(question) = session.question() else {
            return;
        };
        let ink = palette::entry(question.ink_index);
        let background = palette::entry(question.background_index);
        let word = palette::entry(question.word_index);

        // Pad the word down to the vertical center of the box
        let mut lines: Vec<Line> = Vec::new();
        for _ in 0..area.height.saturating_sub(1) / 2 {
            lines.push(Line::raw(""));
        }
        lines.push(Line::from(Span::styled(
            word.name,
            Style::default().add_modifier(Modifier::BOLD),
        )));

        let display = Paragraph::new(lines)
            .style(Style::default().fg(ink.color()).bg(background.color()))
            .alignment(Alignment::Center);
        f.render_widget(display, area);
    }

    fn render_grid(&self, f: &mut Frame, area: Rect) {
        let rows = (PALETTE_SIZE + self.grid_cols - 1) / self.grid_cols;
        let row_constraints: Vec<Constraint> =
            (0..rows).map(|_| Constraint::Length(1)).collect();
        let row_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(row_constraints)
            .split(area);

        for row in 0..rows {
            let col_constraints: Vec<Constraint> = (0..self.grid_cols)
                .map(|_| Constraint::Percentage(100 / self.grid_cols as u16))
                .collect();
            let col_chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(col_constraints)
                .split(row_chunks[row]);

            for col in 0..self.grid_cols {
                let index = row * self.grid_cols + col;
                if index >= PALETTE_SIZE {
                    break;
                }
                let label = format!("{} {}", index + 1, PALETTE[index].name);
                let style = if self.pressed == Some(index) {
                    Style::default()
                        .fg(Color::White)
                        .bg(BUTTON_PRESSED_COLOR)
                        .add_modifier(Modifier::BOLD)
                } else if self.cursor == index {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White).bg(BUTTON_COLOR)
                };
                let button = Paragraph::new(label)
                    .style(style)
                    .alignment(Alignment::Center);
                f.render_widget(button, col_chunks[col]);
            }
        }
    }

    fn render_help(&self, f: &mut Frame, area: Rect) {
        let help_text = vec![Line::from(vec![
            Span::styled(
                "←↑↓→",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Move  "),
            Span::styled(
                "Enter",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Answer  "),
            Span::styled(
                "1-9",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Quick answer  "),
            Span::styled(
                "Esc",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Info"),
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

impl Default for QuizScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_starts_at_first_button() {
        let screen = QuizScreen::new();
        assert_eq!(screen.cursor(), 0);
        assert_eq!(screen.grid_cols, 3);
    }

    #[test]
    fn test_horizontal_movement_wraps_within_row() {
        let mut screen = QuizScreen::new();

        screen.move_left();
        assert_eq!(screen.cursor(), 2);
        screen.move_right();
        assert_eq!(screen.cursor(), 0);
        screen.move_right();
        assert_eq!(screen.cursor(), 1);
    }

    #[test]
    fn test_vertical_movement_wraps_within_column() {
        let mut screen = QuizScreen::new();

        screen.move_up();
        assert_eq!(screen.cursor(), 6);
        screen.move_down();
        assert_eq!(screen.cursor(), 0);
        screen.move_down();
        assert_eq!(screen.cursor(), 3);
    }

    #[test]
    fn test_two_column_grid_short_last_row() {
        let mut screen = QuizScreen::new();
        screen.grid_cols = 2;

        // Index 8 sits alone on the last row
        screen.cursor = 8;
        screen.move_right();
        assert_eq!(screen.cursor(), 8);
        screen.move_left();
        assert_eq!(screen.cursor(), 8);

        // Column 1 bottoms out at index 7
        screen.cursor = 1;
        screen.move_up();
        assert_eq!(screen.cursor(), 7);
        screen.move_down();
        assert_eq!(screen.cursor(), 1);

        // Column 0 bottoms out at index 8
        screen.cursor = 8;
        screen.move_down();
        assert_eq!(screen.cursor(), 0);
    }

    #[test]
    fn test_pressed_lifecycle() {
        let mut screen = QuizScreen::new();
        screen.set_pressed(4);
        assert_eq!(screen.pressed, Some(4));
        screen.clear_pressed();
        assert_eq!(screen.pressed, None);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut screen = QuizScreen::new();
        screen.cursor = 5;
        screen.set_pressed(5);
        screen.reset();
        assert_eq!(screen.cursor(), 0);
        assert_eq!(screen.pressed, None);
    }
}
