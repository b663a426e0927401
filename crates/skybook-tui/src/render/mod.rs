//! Main render/view function (View in TEA pattern)


use ratatui::layout::Alignment;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use skybook_app::search::FormField;
use skybook_app::seat_view::SeatMapState;
use skybook_app::{AppState, Screen};

use crate::layout;
use crate::theme::{palette, styles};
use crate::widgets;

/// Render the complete UI (View function in TEA)
///
/// Pure: reads `state` only.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    match state.screen {
        Screen::Search => render_search(frame, state),
        Screen::SeatMap => render_seat_map(frame, state),
    }
}

fn render_search(frame: &mut Frame, state: &AppState) {
    let areas = layout::search(frame.area());
    let search = &state.search;
    let focus = search.focus;

    frame.render_widget(widgets::MainHeader::new(Screen::Search), areas.header);

    frame.render_widget(
        widgets::TextField::new("Origin", &search.origin)
            .placeholder("Any")
            .focused(focus == FormField::Origin),
        areas.origin,
    );
    frame.render_widget(
        widgets::TextField::new("Destination", &search.destination)
            .placeholder("Any")
            .focused(focus == FormField::Destination),
        areas.destination,
    );
    frame.render_widget(
        widgets::TextField::new("Date", &search.date)
            .placeholder("YYYY-MM-DD")
            .focused(focus == FormField::Date),
        areas.date,
    );
    frame.render_widget(
        widgets::PriceSlider::new(search.max_price).focused(focus == FormField::MaxPrice),
        areas.price,
    );

    if let Some(notice) = search.notice {
        frame.render_widget(
            Paragraph::new(Span::styled(notice.text(), styles::notice(notice.is_error())))
                .alignment(Alignment::Center),
            areas.notice,
        );
    }

    frame.render_widget(
        widgets::FlightList::new(search).focused(focus == FormField::Results),
        areas.results,
    );
    frame.render_widget(widgets::StatusBar::new(state), areas.status);
}

fn render_seat_map(frame: &mut Frame, state: &AppState) {
    let areas = layout::seat_map(frame.area());
    frame.render_widget(widgets::MainHeader::new(Screen::SeatMap), areas.header);
    frame.render_widget(widgets::StatusBar::new(state), areas.status);

    // Guard: no flight was handed over, show the empty view only
    let Some((view, flight)) = state
        .seat_map
        .as_ref()
        .and_then(|view| view.flight.as_ref().map(|flight| (view, flight)))
    else {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "No flight selected. Press Esc to return to search.",
                styles::text_muted(),
            ))
            .alignment(Alignment::Center)
            .block(styles::glass_block(false)),
            areas.title,
        );
        return;
    };

    let mut title_lines = vec![
        Line::from(Span::styled(
            format!("Seat Selection for Flight {}", flight.id),
            styles::accent_bold(),
        )),
        Line::from(Span::styled(
            format!("{} → {}", flight.origin, flight.destination),
            styles::text_secondary(),
        )),
    ];
    if let Some(notice) = view.notice {
        // Replace the route line while an error is showing
        title_lines[1] = Line::from(Span::styled(notice.text(), styles::notice(true)));
    }
    frame.render_widget(
        Paragraph::new(title_lines)
            .alignment(Alignment::Center)
            .block(styles::glass_block(false)),
        areas.title,
    );

    render_seat_body(frame, view, &areas);
}

fn render_seat_body(frame: &mut Frame, view: &SeatMapState, areas: &layout::SeatAreas) {
    frame.render_widget(widgets::SeatGrid::new(view), areas.grid);
    frame.render_widget(widgets::SeatFilterPanel::new(view.filters), areas.filters);
    frame.render_widget(widgets::SelectionPanel::new(view), areas.selection);
    frame.render_widget(widgets::Legend, areas.legend);
}
