//! Selected seats, running total and the Book Now button

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use skybook_app::seat_view::SeatMapState;
use skybook_core::format_amount;

use crate::theme::styles;

pub struct SelectionPanel<'a> {
    view: &'a SeatMapState,
}

impl<'a> SelectionPanel<'a> {
    pub fn new(view: &'a SeatMapState) -> Self {
        Self { view }
    }
}

impl Widget for SelectionPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block =
            styles::glass_block(false).title(Span::styled(" Your Seats ", styles::text_secondary()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let [list, total, button] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        let selected = self.view.selected_seats();
        let lines: Vec<Line> = if selected.is_empty() {
            vec![Line::from(Span::styled(
                "No seats selected",
                styles::text_muted(),
            ))]
        } else {
            selected
                .iter()
                .map(|seat| {
                    Line::from(Span::styled(
                        format!("Seat {} - {} €", seat.seat_number, format_amount(seat.price)),
                        styles::text_primary(),
                    ))
                })
                .collect()
        };
        Paragraph::new(lines).render(list, buf);

        Paragraph::new(Line::from(vec![
            Span::styled("Total: ", styles::text_secondary()),
            Span::styled(format!("{} €", self.view.total_label()), styles::accent_bold()),
        ]))
        .render(total, buf);

        Paragraph::new(Line::from(vec![
            Span::styled(" Book Now ", styles::button()),
            Span::styled(" (b)", styles::keybinding()),
        ]))
        .render(button, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_seat as seat, TestTerminal};
    use skybook_core::SeatId;

    #[test]
    fn test_empty_selection() {
        let view = SeatMapState::new(None);
        let mut term = TestTerminal::new();
        term.render_widget(SelectionPanel::new(&view), Rect::new(0, 0, 34, 8));

        assert!(term.buffer_contains("No seats selected"));
        assert!(term.buffer_contains("Total: 0.00 €"));
        assert!(term.buffer_contains("Book Now"));
    }

    #[test]
    fn test_lists_selected_seats_and_total() {
        let mut view = SeatMapState::new(None);
        view.load_seats(vec![seat(1, "12A", 50.0), seat(2, "14C", 75.0)]);
        view.toggle_seat(SeatId(1));
        view.toggle_seat(SeatId(2));

        let mut term = TestTerminal::new();
        term.render_widget(SelectionPanel::new(&view), Rect::new(0, 0, 34, 8));

        assert!(term.line_contains(1, "Seat 12A - 50 €"));
        assert!(term.line_contains(2, "Seat 14C - 75 €"));
        assert!(term.buffer_contains("Total: 125.00 €"));
    }
}
