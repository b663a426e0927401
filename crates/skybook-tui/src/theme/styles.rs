//! Semantic style builders

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use skybook_core::SeatDisplay;

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

/// Style for a search or seat notice
pub fn notice(is_error: bool) -> Style {
    if is_error {
        Style::default().fg(palette::STATUS_RED)
    } else {
        Style::default().fg(palette::STATUS_YELLOW)
    }
}

/// "Black on Cyan" - highlighted result row
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Colored background for a seat cell or legend swatch
pub fn seat(display: SeatDisplay) -> Style {
    let bg = match display {
        SeatDisplay::Occupied => palette::SEAT_OCCUPIED,
        SeatDisplay::Selected => palette::SEAT_SELECTED,
        SeatDisplay::Recommended => palette::SEAT_RECOMMENDED,
        SeatDisplay::Business => palette::SEAT_BUSINESS,
        SeatDisplay::Standard => palette::SEAT_ECONOMY,
    };
    let style = Style::default().fg(palette::CONTRAST_FG).bg(bg);
    match display {
        SeatDisplay::Occupied => style.add_modifier(Modifier::CROSSED_OUT),
        SeatDisplay::Selected => style.add_modifier(Modifier::BOLD),
        _ => style,
    }
}

pub fn button() -> Style {
    Style::default()
        .fg(palette::TEXT_PRIMARY)
        .bg(palette::BUTTON_BG)
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
        .style(Style::default().bg(palette::CARD_BG))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_styles_have_correct_colors() {
        assert_eq!(text_primary().fg, Some(palette::TEXT_PRIMARY));
        assert_eq!(text_secondary().fg, Some(palette::TEXT_SECONDARY));
        assert_eq!(text_muted().fg, Some(palette::TEXT_MUTED));
    }

    #[test]
    fn test_seat_styles_follow_display() {
        assert_eq!(seat(SeatDisplay::Selected).bg, Some(palette::SEAT_SELECTED));
        assert_eq!(seat(SeatDisplay::Business).bg, Some(palette::SEAT_BUSINESS));
        assert!(seat(SeatDisplay::Occupied)
            .add_modifier
            .contains(Modifier::CROSSED_OUT));
    }

    #[test]
    fn test_notice_colors() {
        assert_eq!(notice(true).fg, Some(palette::STATUS_RED));
        assert_eq!(notice(false).fg, Some(palette::STATUS_YELLOW));
    }
}
