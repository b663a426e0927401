//! Max-price slider

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::Span,
    widgets::{Gauge, Paragraph, Widget},
};

use skybook_core::{PRICE_CEILING, PRICE_FLOOR};

use crate::theme::{palette, styles};

pub struct PriceSlider {
    value: u32,
    focused: bool,
}

impl PriceSlider {
    pub fn new(value: u32) -> Self {
        Self {
            value,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn ratio(&self) -> f64 {
        (f64::from(self.value) / f64::from(PRICE_CEILING)).clamp(0.0, 1.0)
    }
}

impl Widget for PriceSlider {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title_style = if self.focused {
            styles::accent_bold()
        } else {
            styles::text_secondary()
        };
        let block = styles::glass_block(self.focused).title(Span::styled(
            format!(" Max Price: {}€ ", self.value),
            title_style,
        ));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let floor = format!("{}€", PRICE_FLOOR);
        let ceiling = format!("{}€", PRICE_CEILING);
        let [low, bar, high] = Layout::horizontal([
            Constraint::Length(floor.chars().count() as u16 + 1),
            Constraint::Min(1),
            Constraint::Length(ceiling.chars().count() as u16 + 1),
        ])
        .areas(inner);

        Paragraph::new(Span::styled(floor, styles::text_muted())).render(low, buf);
        Gauge::default()
            .gauge_style(Style::default().fg(palette::ACCENT).bg(palette::BORDER_DIM))
            .ratio(self.ratio())
            .label("")
            .render(bar, buf);
        Paragraph::new(Span::styled(ceiling, styles::text_muted()))
            .alignment(Alignment::Right)
            .render(high, buf);
    }
}
