//! Recommendation filter checkboxes

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use skybook_core::{SeatFilter, SeatFilters};

use crate::theme::styles;

/// Filters with their toggle key, in display order
const FILTERS: [(SeatFilter, char); 3] = [
    (SeatFilter::Window, 'w'),
    (SeatFilter::ExtraLegroom, 'l'),
    (SeatFilter::NearExit, 'e'),
];

pub struct SeatFilterPanel {
    filters: SeatFilters,
}

impl SeatFilterPanel {
    pub fn new(filters: SeatFilters) -> Self {
        Self { filters }
    }
}

impl Widget for SeatFilterPanel {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false)
            .title(Span::styled(" Recommend ", styles::text_secondary()));

        let lines: Vec<Line> = FILTERS
            .iter()
            .map(|(filter, key)| {
                let checked = self.filters.is_set(*filter);
                Line::from(vec![
                    Span::styled(if checked { "[x] " } else { "[ ] " }, styles::accent()),
                    Span::styled(filter.label(), styles::text_primary()),
                    Span::styled(format!("  ({})", key), styles::keybinding()),
                ])
            })
            .collect();

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_checked_filters_are_marked() {
        let filters = SeatFilters::default().toggled(SeatFilter::ExtraLegroom);
        let mut term = TestTerminal::new();
        term.render_widget(SeatFilterPanel::new(filters), Rect::new(0, 0, 34, 5));

        assert!(term.line_contains(1, "[ ] Window Seat"));
        assert!(term.line_contains(2, "[x] Extra Legroom"));
        assert!(term.line_contains(3, "[ ] Near Exit"));
    }
}
