//! Seat map screen state
//!
//! Built from the flight carried over from the search screen. Without a
//! flight the view stays empty and never fetches.

use skybook_core::{
    format_price, group_into_rows, Flight, FlightId, Seat, SeatDisplay, SeatFilter, SeatFilters,
    SeatId, SeatRow, SelectionSet,
};

/// Cursor movement on the seat grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Up,
    Down,
    Left,
    Right,
}

/// Position on the seat grid: row index into `rows`, seat index in that row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeatCursor {
    pub row: usize,
    pub col: usize,
}

/// Fetch failures shown on the seat screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatNotice {
    SeatPlanFailed,
    RecommendationsFailed,
}

impl SeatNotice {
    pub fn text(&self) -> &'static str {
        match self {
            SeatNotice::SeatPlanFailed => "Error fetching seat plan.",
            SeatNotice::RecommendationsFailed => "Error fetching recommended seats.",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeatMapState {
    /// Flight from the navigation transition
    pub flight: Option<Flight>,
    /// Latest seat plan, as returned by the server
    pub seats: Vec<Seat>,
    /// `seats` grouped for display
    pub rows: Vec<SeatRow>,
    /// Highlight set from the recommendation endpoint
    pub recommended: Vec<Seat>,
    pub selection: SelectionSet,
    pub filters: SeatFilters,
    pub cursor: SeatCursor,
    pub loading: bool,
    pub notice: Option<SeatNotice>,
}

impl SeatMapState {
    pub fn new(flight: Option<Flight>) -> Self {
        Self {
            loading: flight.is_some(),
            flight,
            ..Self::default()
        }
    }

    pub fn flight_id(&self) -> Option<FlightId> {
        self.flight.as_ref().map(|f| f.id)
    }

    /// Store a fresh seat plan
    ///
    /// The selection keeps only seats that still exist and are free.
    pub fn load_seats(&mut self, seats: Vec<Seat>) {
        self.rows = group_into_rows(&seats);
        self.selection = std::mem::take(&mut self.selection).retained_in(&seats);
        self.seats = seats;
        self.loading = false;
        if self.notice == Some(SeatNotice::SeatPlanFailed) {
            self.notice = None;
        }
        self.clamp_cursor();
    }

    /// Show a fetch failure
    ///
    /// A seat plan failure stays visible over a later recommendation
    /// failure, since without a plan there is nothing to recommend from.
    pub fn report(&mut self, notice: SeatNotice) {
        if notice == SeatNotice::RecommendationsFailed
            && self.notice == Some(SeatNotice::SeatPlanFailed)
        {
            return;
        }
        self.notice = Some(notice);
    }

    pub fn load_recommended(&mut self, seats: Vec<Seat>) {
        self.recommended = seats;
        if self.notice == Some(SeatNotice::RecommendationsFailed) {
            self.notice = None;
        }
    }

    pub fn is_recommended(&self, id: SeatId) -> bool {
        self.recommended.iter().any(|seat| seat.id == id)
    }

    pub fn display_for(&self, seat: &Seat) -> SeatDisplay {
        SeatDisplay::resolve(
            seat,
            self.selection.contains(seat.id),
            self.is_recommended(seat.id),
        )
    }

    /// Toggle a seat of the current plan; unknown ids are ignored
    ///
    /// Returns `true` when the selection changed.
    pub fn toggle_seat(&mut self, id: SeatId) -> bool {
        let Some(seat) = self.seats.iter().find(|seat| seat.id == id) else {
            return false;
        };
        let next = self.selection.clone().toggled(seat);
        let changed = next != self.selection;
        self.selection = next;
        changed
    }

    pub fn toggle_filter(&mut self, filter: SeatFilter) {
        self.filters = self.filters.toggled(filter);
    }

    pub fn selected_seats(&self) -> Vec<&Seat> {
        self.selection.selected_seats(&self.seats)
    }

    pub fn total(&self) -> f64 {
        self.selection.total(&self.seats)
    }

    /// Total with two decimals, e.g. `125.00`
    pub fn total_label(&self) -> String {
        format_price(self.total())
    }

    pub fn seat_at_cursor(&self) -> Option<&Seat> {
        self.rows
            .get(self.cursor.row)
            .and_then(|row| row.seats.get(self.cursor.col))
    }

    pub fn move_cursor(&mut self, movement: CursorMove) {
        if self.rows.is_empty() {
            return;
        }
        match movement {
            CursorMove::Up => self.cursor.row = self.cursor.row.saturating_sub(1),
            CursorMove::Down => {
                self.cursor.row = (self.cursor.row + 1).min(self.rows.len() - 1);
            }
            CursorMove::Left => self.cursor.col = self.cursor.col.saturating_sub(1),
            CursorMove::Right => self.cursor.col += 1,
        }
        self.clamp_cursor();
    }

    fn clamp_cursor(&mut self) {
        if self.rows.is_empty() {
            self.cursor = SeatCursor::default();
            return;
        }
        self.cursor.row = self.cursor.row.min(self.rows.len() - 1);
        let row_len = self.rows[self.cursor.row].seats.len();
        self.cursor.col = self.cursor.col.min(row_len.saturating_sub(1));
    }
}
