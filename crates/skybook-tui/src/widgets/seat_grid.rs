//! Seat grid: one line per row, column letters as cells, aisle after C

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use skybook_app::seat_view::SeatMapState;
use skybook_core::{column_label, has_aisle_after, SeatRow};

use crate::theme::styles;

/// Width of the row-number gutter, e.g. `12 `
const GUTTER: usize = 4;

pub struct SeatGrid<'a> {
    view: &'a SeatMapState,
}

impl<'a> SeatGrid<'a> {
    pub fn new(view: &'a SeatMapState) -> Self {
        Self { view }
    }

    fn row_line(&self, row_idx: usize, row: &SeatRow) -> Line<'static> {
        let mut spans = vec![Span::styled(
            format!("{:>width$} ", row.row, width = GUTTER - 1),
            styles::text_muted(),
        )];

        for (col_idx, seat) in row.seats.iter().enumerate() {
            let at_cursor = self.view.cursor.row == row_idx && self.view.cursor.col == col_idx;
            let label = column_label(&seat.seat_number);
            let mut style = styles::seat(self.view.display_for(seat));
            let cell = if at_cursor {
                style = style.add_modifier(Modifier::UNDERLINED);
                format!("[{}]", label)
            } else {
                format!(" {} ", label)
            };
            spans.push(Span::styled(cell, style));
            spans.push(Span::raw(if has_aisle_after(seat) { "   " } else { " " }));
        }

        Line::from(spans)
    }
}

impl Widget for SeatGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true).title(Span::styled(" Seats ", styles::accent_bold()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if self.view.rows.is_empty() {
            let text = if self.view.loading {
                "Loading seat plan..."
            } else {
                "No seats to show"
            };
            Paragraph::new(Span::styled(text, styles::text_muted())).render(inner, buf);
            return;
        }

        // Keep the cursor row on screen
        let visible = inner.height as usize;
        let offset = self.view.cursor.row.saturating_sub(visible.saturating_sub(1));

        let lines: Vec<Line> = self
            .view
            .rows
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .map(|(idx, row)| self.row_line(idx, row))
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}
