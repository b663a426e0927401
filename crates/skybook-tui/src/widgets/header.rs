//! Header bar showing the app name and the current screen

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use skybook_app::Screen;

use crate::theme::styles;

pub struct MainHeader {
    screen: Screen,
}

impl MainHeader {
    pub fn new(screen: Screen) -> Self {
        Self { screen }
    }

    fn screen_label(&self) -> &'static str {
        match self.screen {
            Screen::Search => "Flight Search",
            Screen::SeatMap => "Seat Selection",
        }
    }
}

impl Widget for MainHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title = Line::from(vec![
            Span::styled("✈ ", styles::accent()),
            Span::styled("SkyBook", styles::accent_bold()),
        ]);
        Paragraph::new(title).render(inner, buf);

        let label = Line::from(Span::styled(self.screen_label(), styles::text_secondary()));
        Paragraph::new(label)
            .alignment(Alignment::Right)
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_header_shows_app_and_screen() {
        let mut term = TestTerminal::new();
        term.render_widget(MainHeader::new(Screen::SeatMap), Rect::new(0, 0, 80, 3));

        assert!(term.line_contains(1, "SkyBook"));
        assert!(term.line_contains(1, "Seat Selection"));
    }
}
