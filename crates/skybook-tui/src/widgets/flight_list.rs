//! Search result table

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::Span,
    widgets::{Cell, Paragraph, Row, StatefulWidget, Table, TableState, Widget},
};

use skybook_app::search::SearchState;
use skybook_core::{format_amount, Flight};

use crate::theme::styles;

const COLUMNS: [&str; 4] = ["Location", "Date", "Time", "Price"];

pub struct FlightList<'a> {
    search: &'a SearchState,
    focused: bool,
}

impl<'a> FlightList<'a> {
    pub fn new(search: &'a SearchState) -> Self {
        Self {
            search,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

fn flight_row(flight: &Flight) -> Row<'static> {
    Row::new(vec![
        Cell::from(flight.route_label()),
        Cell::from(flight.departure_date()),
        Cell::from(flight.departure_clock()),
        Cell::from(format!("{} €", format_amount(flight.price))),
    ])
}

impl Widget for FlightList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let count = self.search.flights.len();
        let title = if count == 0 {
            " Flights ".to_string()
        } else {
            format!(" Flights ({}) ", count)
        };
        let block = styles::glass_block(self.focused).title(Span::styled(
            title,
            if self.focused {
                styles::accent_bold()
            } else {
                styles::text_secondary()
            },
        ));

        if self.search.flights.is_empty() {
            let hint = if self.search.loading {
                "Searching..."
            } else {
                "Fill in the form and press Enter to search"
            };
            Paragraph::new(Span::styled(hint, styles::text_muted()))
                .block(block)
                .render(area, buf);
            return;
        }

        let header = Row::new(COLUMNS.iter().map(|c| Cell::from(*c))).style(styles::accent_bold());
        let rows: Vec<Row> = self.search.flights.iter().map(flight_row).collect();
        let highlight = if self.focused {
            styles::focused_selected()
        } else {
            styles::text_primary()
        };

        let table = Table::new(
            rows,
            [
                Constraint::Min(20),
                Constraint::Length(12),
                Constraint::Length(7),
                Constraint::Length(10),
            ],
        )
        .header(header)
        .block(block)
        .style(styles::text_secondary())
        .row_highlight_style(highlight)
        .highlight_symbol("▶ ");

        let mut table_state = TableState::default().with_selected(Some(self.search.selected));
        StatefulWidget::render(table, area, buf, &mut table_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_flight as flight, TestTerminal};

    #[test]
    fn test_header_hidden_without_results() {
        let search = SearchState::new();
        let mut term = TestTerminal::new();
        term.render_widget(FlightList::new(&search), Rect::new(0, 0, 80, 10));

        assert!(!term.buffer_contains("Location"));
        assert!(term.buffer_contains("press Enter to search"));
    }

    #[test]
    fn test_rows_show_route_date_time_price() {
        let search = SearchState {
            flights: vec![flight(1, 100.0), flight(2, 129.5)],
            ..SearchState::new()
        };
        let mut term = TestTerminal::new();
        term.render_widget(FlightList::new(&search), Rect::new(0, 0, 80, 10));

        assert!(term.buffer_contains("Location"));
        assert!(term.buffer_contains("Tallinn - London"));
        assert!(term.buffer_contains("2024-05-01"));
        assert!(term.buffer_contains("07:05"));
        assert!(term.buffer_contains("100 €"));
        assert!(term.buffer_contains("129.5 €"));
        assert!(term.buffer_contains("Flights (2)"));
    }
}
