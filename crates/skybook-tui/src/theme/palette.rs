//! Color palette

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black;
pub const CARD_BG: Color = Color::Black;

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;
pub const CONTRAST_FG: Color = Color::Black;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;

// --- Seat map ---
pub const SEAT_BUSINESS: Color = Color::Rgb(212, 175, 55);
pub const SEAT_ECONOMY: Color = Color::Rgb(70, 130, 180);
pub const SEAT_RECOMMENDED: Color = Color::Rgb(46, 160, 67);
pub const SEAT_SELECTED: Color = Color::Rgb(255, 140, 0);
pub const SEAT_OCCUPIED: Color = Color::Rgb(90, 90, 90);

// --- Buttons ---
pub const BUTTON_BG: Color = Color::Blue;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_colors_are_distinct() {
        let colors = [
            SEAT_BUSINESS,
            SEAT_ECONOMY,
            SEAT_RECOMMENDED,
            SEAT_SELECTED,
            SEAT_OCCUPIED,
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
