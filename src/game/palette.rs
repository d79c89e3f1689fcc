//! The nine-color palette shared by every part of the game
//!
//! Words, inks, backgrounds and answer buttons all index into the same
//! fixed palette, so a plain `usize` below [`PALETTE_SIZE`] is a valid
//! reference to a color everywhere in the crate.

use ratatui::style::Color;

/// Number of colors in the game palette
pub const PALETTE_SIZE: usize = 9;

/// A single palette color: display name plus 24-bit RGB value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    /// Upper-case display name shown on buttons and as the quiz word
    pub name: &'static str,
    rgb: u32,
}

impl PaletteEntry {
    /// Terminal color for rendering this entry
    pub const fn color(&self) -> Color {
        Color::Rgb((self.rgb >> 16) as u8, (self.rgb >> 8) as u8, self.rgb as u8)
    }

    /// CSS-style hex form, e.g. `#FFA500`
    pub fn hex(&self) -> String {
        format!("#{:06X}", self.rgb)
    }
}

/// The game palette, in roulette order
pub const PALETTE: [PaletteEntry; PALETTE_SIZE] = [
    PaletteEntry { name: "BLACK", rgb: 0x000000 },
    PaletteEntry { name: "WHITE", rgb: 0xFFFFFF },
    PaletteEntry { name: "RED", rgb: 0xFF0000 },
    PaletteEntry { name: "ORANGE", rgb: 0xFFA500 },
    PaletteEntry { name: "YELLOW", rgb: 0xFFFF00 },
    PaletteEntry { name: "GREEN", rgb: 0x008000 },
    PaletteEntry { name: "SKY BLUE", rgb: 0x42AAFF },
    PaletteEntry { name: "BLUE", rgb: 0x0000FF },
    PaletteEntry { name: "VIOLET", rgb: 0x8B00FF },
];

/// Answer button background
pub const BUTTON_COLOR: Color = Color::Rgb(0x00, 0x0A, 0xEA);
/// Answer button background while the chosen button is held down
pub const BUTTON_PRESSED_COLOR: Color = Color::Rgb(0x62, 0x34, 0x62);
/// Roulette word marker background
pub const MARKER_COLOR: Color = Color::Rgb(0xC0, 0xC0, 0xC0);
/// Answer overlay backdrop after a correct answer
pub const CORRECT_COLOR: Color = Color::Rgb(0x7D, 0xF9, 0xFF);
/// Answer overlay backdrop after a wrong answer
pub const WRONG_COLOR: Color = Color::Rgb(0xFA, 0xA0, 0xA0);

/// Look up a palette entry by index
pub fn entry(index: usize) -> PaletteEntry {
    PALETTE[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_has_nine_distinct_colors() {
        assert_eq!(PALETTE.len(), PALETTE_SIZE);
        for (i, a) in PALETTE.iter().enumerate() {
            for b in PALETTE.iter().skip(i + 1) {
                assert_ne!(a.name, b.name);
                assert_ne!(a.rgb, b.rgb);
            }
        }
    }

    #[test]
    fn test_entry_color_decodes_rgb_channels() {
        let orange = entry(3);
        assert_eq!(orange.name, "ORANGE");
        assert_eq!(orange.hex(), "#FFA500");
        assert_eq!(orange.color(), Color::Rgb(0xFF, 0xA5, 0x00));
    }

    #[test]
    fn test_roulette_order_is_stable() {
        let names: Vec<&str> = PALETTE.iter().map(|e| e.name).collect();
        assert_eq!(
            names,
            vec![
                "BLACK", "WHITE", "RED", "ORANGE", "YELLOW", "GREEN", "SKY BLUE", "BLUE", "VIOLET"
            ]
        );
    }
}
