//! Text inputs of the flight query form

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

/// One labelled, bordered text input
pub struct TextField<'a> {
    label: &'a str,
    value: &'a str,
    placeholder: &'a str,
    focused: bool,
}

impl<'a> TextField<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            placeholder: "",
            focused: false,
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for TextField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title_style = if self.focused {
            styles::accent_bold()
        } else {
            styles::text_secondary()
        };
        let block = styles::glass_block(self.focused)
            .title(Span::styled(format!(" {} ", self.label), title_style));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut spans = if self.value.is_empty() && !self.focused {
            vec![Span::styled(self.placeholder, styles::text_muted())]
        } else {
            vec![Span::styled(self.value, styles::text_primary())]
        };
        if self.focused {
            spans.push(Span::styled("_", styles::keybinding()));
        }

        // Keep the end of long input visible
        let visible = inner.width as usize;
        let text_len = self.value.chars().count() + usize::from(self.focused);
        let scroll = text_len.saturating_sub(visible) as u16;

        Paragraph::new(Line::from(spans))
            .scroll((0, scroll))
            .render(inner, buf);
    }
}
