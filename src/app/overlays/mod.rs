//! Modal overlay components
//!
//! Overlays render on top of the base screen and swallow its input
//! while open: the settings editor, the info/exit panel and the
//! answer verdict.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub mod answer;
pub mod info;
pub mod settings;

pub use answer::AnswerOverlay;
pub use info::{InfoAction, InfoOverlay};
pub use settings::SettingsOverlay;

/// Rect centered in `r`, `percent_x` wide and `height` rows tall
pub(crate) fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_is_contained() {
        let outer = Rect::new(0, 0, 100, 40);
        let inner = centered_rect(50, 10, outer);
        assert_eq!(inner.height, 10);
        assert!(inner.x >= outer.x && inner.right() <= outer.right());
        assert!(inner.y >= outer.y && inner.bottom() <= outer.bottom());
        // Roughly centered horizontally
        assert!(inner.x > 0 && inner.right() < outer.right());
    }
}
