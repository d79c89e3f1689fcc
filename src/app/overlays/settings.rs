//! Settings overlay implementation
//!
//! Modal editor for the two quiz preferences: the attribute selection
//! mode and the fixed attribute. Toggles apply immediately; the app
//! persists them and reports any save failure back into the overlay's
//! status line.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::overlays::centered_rect;
use crate::config::Settings;

/// Represents a single selectable field in the settings overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SettingsField {
    Mode,
    Attribute,
}

impl SettingsField {
    fn all() -> Vec<Self> {
        vec![Self::Mode, Self::Attribute]
    }

    fn title(&self) -> &'static str {
        match self {
            Self::Mode => "Mode",
            Self::Attribute => "Attribute",
        }
    }
}

/// Settings overlay component
#[derive(Debug)]
pub struct SettingsOverlay {
    fields: Vec<SettingsField>,
    selected_field_index: usize,
    save_status: Option<String>,
}

impl SettingsOverlay {
    /// Create a new settings overlay
    pub fn new() -> Self {
        Self {
            fields: SettingsField::all(),
            selected_field_index: 0,
            save_status: None,
        }
    }

    /// Reset cursor and status for a fresh opening
    pub fn reset(&mut self) {
        self.selected_field_index = 0;
        self.save_status = None;
    }

    /// Move selection to the previous field
    pub fn select_previous_field(&mut self) {
        if self.selected_field_index > 0 {
            self.selected_field_index -= 1;
        }
    }

    /// Move selection to the next field
    pub fn select_next_field(&mut self) {
        if self.selected_field_index < self.fields.len() - 1 {
            self.selected_field_index += 1;
        }
    }

    /// Toggle the value of the selected field
    pub fn toggle_selected(&self, settings: &mut Settings) {
        match self.fields[self.selected_field_index] {
            SettingsField::Mode => settings.mode = settings.mode.toggled(),
            SettingsField::Attribute => settings.attribute = settings.attribute.toggled(),
        }
    }

    /// Show a persistence failure in the status line
    pub fn set_save_status(&mut self, status: Option<String>) {
        self.save_status = status;
    }

    /// Render the settings overlay over the current screen
    pub fn render(&mut self, f: &mut Frame, settings: &Settings) {
        let area = centered_rect(50, 11, f.size());
        f.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Settings ")
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Mode field
                Constraint::Length(3), // Attribute field
                Constraint::Length(1), // Status line
                Constraint::Min(1),    // Help text
            ])
            .split(inner);

        for (i, field) in self.fields.iter().enumerate() {
            let style = if i == self.selected_field_index {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default()
            };
            let block = Block::default().borders(Borders::ALL).border_style(style);
            let text = format!("{}: {}", field.title(), self.field_value(field, settings));
            let p = Paragraph::new(text).block(block);
            f.render_widget(p, chunks[i]);
        }

        if let Some(status) = &self.save_status {
            let status = Paragraph::new(status.as_str())
                .style(Style::default().fg(Color::Red))
                .alignment(Alignment::Center);
            f.render_widget(status, chunks[2]);
        }

        let help = Paragraph::new("↑↓ Field  ←→ Change  Esc Close")
            .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC))
            .alignment(Alignment::Center);
        f.render_widget(help, chunks[3]);
    }

    fn field_value(&self, field: &SettingsField, settings: &Settings) -> &'static str {
        match field {
            SettingsField::Mode => settings.mode.description(),
            SettingsField::Attribute => settings.attribute.description(),
        }
    }
}

impl Default for SettingsOverlay {
    fn default() -> Self {
        Self::new()
    }
}
