//! Seat color legend

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use skybook_core::SeatDisplay;

use crate::theme::styles;

pub struct Legend;

impl Widget for Legend {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).title(Span::styled(" Legend ", styles::text_secondary()));

        let lines: Vec<Line> = SeatDisplay::LEGEND
            .iter()
            .map(|display| {
                Line::from(vec![
                    Span::styled("   ", styles::seat(*display)),
                    Span::raw(" "),
                    Span::styled(display.label(), styles::text_primary()),
                ])
            })
            .collect();

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
