//! Status bar: activity on the left, key hints on the right

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use skybook_app::{AppState, Screen};

use crate::theme::styles;

const SEARCH_HINTS: &[(&str, &str)] = &[
    ("Tab", "focus"),
    ("Enter", "search/open"),
    ("←→", "price"),
    ("^R", "clear"),
    ("Esc", "quit"),
];

const SEAT_HINTS: &[(&str, &str)] = &[
    ("←↑↓→", "move"),
    ("Space", "select"),
    ("w/l/e", "filters"),
    ("Esc", "back"),
];

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn activity(&self) -> Span<'static> {
        match self.state.screen {
            Screen::Search if self.state.search.loading => {
                Span::styled("● Searching...", styles::keybinding())
            }
            Screen::SeatMap => match &self.state.seat_map {
                Some(view) if view.loading => {
                    Span::styled("● Loading seats...", styles::keybinding())
                }
                Some(view) if !view.selection.is_empty() => Span::styled(
                    format!("● {} seat(s) selected", view.selection.len()),
                    styles::accent(),
                ),
                _ => Span::styled("● Ready", styles::text_secondary()),
            },
            Screen::Search => Span::styled("● Ready", styles::text_secondary()),
        }
    }

    fn hints(&self) -> Line<'static> {
        let hints = match self.state.screen {
            Screen::Search => SEARCH_HINTS,
            Screen::SeatMap => SEAT_HINTS,
        };
        let mut spans = Vec::with_capacity(hints.len() * 3);
        for (key, action) in hints {
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::styled(format!(" {}", action), styles::text_muted()));
            spans.push(Span::raw("  "));
        }
        Line::from(spans)
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Line::from(vec![Span::raw(" "), self.activity()])).render(area, buf);
        Paragraph::new(self.hints())
            .alignment(Alignment::Right)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_search_status_and_hints() {
        let mut state = AppState::new();
        state.search.loading = true;

        let mut term = TestTerminal::with_size(100, 1);
        term.render_widget(StatusBar::new(&state), Rect::new(0, 0, 100, 1));

        assert!(term.buffer_contains("Searching..."));
        assert!(term.buffer_contains("Tab focus"));
    }

    #[test]
    fn test_seat_status_shows_hints_for_seat_screen() {
        let mut state = AppState::new();
        state.enter_seat_map(None);

        let mut term = TestTerminal::with_size(100, 1);
        term.render_widget(StatusBar::new(&state), Rect::new(0, 0, 100, 1));

        assert!(term.buffer_contains("Ready"));
        assert!(term.buffer_contains("Space select"));
    }
}
