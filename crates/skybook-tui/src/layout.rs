//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Width of the side panel on the seat screen
const SIDE_PANEL_WIDTH: u16 = 34;

/// Areas of the search screen
#[derive(Debug, Clone, Copy)]
pub struct SearchAreas {
    pub header: Rect,
    pub origin: Rect,
    pub destination: Rect,
    pub date: Rect,
    pub price: Rect,
    /// One line for the search notice
    pub notice: Rect,
    pub results: Rect,
    pub status: Rect,
}

/// Areas of the seat screen
#[derive(Debug, Clone, Copy)]
pub struct SeatAreas {
    pub header: Rect,
    /// Flight title and route
    pub title: Rect,
    pub grid: Rect,
    pub filters: Rect,
    pub selection: Rect,
    pub legend: Rect,
    pub status: Rect,
}

pub fn search(area: Rect) -> SearchAreas {
    let [header, form, price, notice, results, status] = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Length(3), // Origin | Destination | Date
        Constraint::Length(3), // Max price slider
        Constraint::Length(1), // Notice
        Constraint::Min(3),    // Results
        Constraint::Length(1), // Status bar
    ])
    .areas(area);

    let [origin, destination, date] = Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .areas(form);

    SearchAreas {
        header,
        origin,
        destination,
        date,
        price,
        notice,
        results,
        status,
    }
}

pub fn seat_map(area: Rect) -> SeatAreas {
    let [header, title, body, status] = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Length(4), // Title + route
        Constraint::Min(5),    // Grid and side panel
        Constraint::Length(1), // Status bar
    ])
    .areas(area);

    let [grid, side] =
        Layout::horizontal([Constraint::Min(20), Constraint::Length(SIDE_PANEL_WIDTH)])
            .areas(body);

    let [filters, selection, legend] = Layout::vertical([
        Constraint::Length(5), // Three filter rows
        Constraint::Min(6),    // Selected seats, total, button
        Constraint::Length(7), // Five legend rows
    ])
    .areas(side);

    SeatAreas {
        header,
        title,
        grid,
        filters,
        selection,
        legend,
        status,
    }
}
