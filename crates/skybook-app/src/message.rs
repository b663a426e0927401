//! Message types for the application (TEA pattern)

use skybook_api::{RecommendQuery, SearchQuery};
use skybook_core::{Flight, Seat, SeatFilter, SeatId};

use crate::input_key::InputKey;
use crate::request::RequestId;
use crate::seat_view::CursorMove;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Terminal was resized; forces a redraw
    Resize,

    /// Quit (Ctrl+C, Esc on search, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Search Form Messages
    // ─────────────────────────────────────────────────────────
    /// Move focus to the next form field
    FocusNext,
    /// Move focus to the previous form field
    FocusPrevious,
    /// Type a character into the focused text field
    InputChar(char),
    /// Delete the last character of the focused text field
    InputBackspace,

    /// Submit the search with the current inputs
    SubmitSearch,

    /// Search request finished
    SearchCompleted {
        request: RequestId,
        /// Query as it was sent
        query: SearchQuery,
        /// Price bound captured at submission
        max_price: u32,
        flights: Vec<Flight>,
    },

    /// Search request failed
    SearchFailed { request: RequestId, error: String },

    /// Reset inputs, price bound, results and messages
    ClearFilters,

    // ─────────────────────────────────────────────────────────
    // Price Filter Messages
    // ─────────────────────────────────────────────────────────
    /// Move the max-price slider by `delta` euros
    AdjustMaxPrice { delta: i64 },
    /// Set the max-price slider, clamped into range
    SetMaxPrice(i64),

    // ─────────────────────────────────────────────────────────
    // Result List Messages
    // ─────────────────────────────────────────────────────────
    SelectNextFlight,
    SelectPreviousFlight,
    /// Open the seat map for the highlighted result
    OpenSelectedFlight,

    // ─────────────────────────────────────────────────────────
    // Seat Map Messages
    // ─────────────────────────────────────────────────────────
    /// Show the seat screen for `flight`; `None` renders the empty view
    OpenSeatMap { flight: Option<Flight> },
    /// Back to search, discarding seat state
    CloseSeatMap,

    SeatPlanLoaded {
        request: RequestId,
        seats: Vec<Seat>,
    },
    SeatPlanFailed {
        request: RequestId,
        error: String,
    },

    /// Request recommendations for the current flight and filters
    RefreshRecommendations,
    RecommendationsLoaded {
        request: RequestId,
        query: RecommendQuery,
        seats: Vec<Seat>,
    },
    RecommendationsFailed {
        request: RequestId,
        error: String,
    },

    MoveSeatCursor(CursorMove),
    ToggleSeatAtCursor,
    ToggleSeat(SeatId),
    ToggleFilter(SeatFilter),

    /// "Book Now" button; logs only
    BookNow,
}
