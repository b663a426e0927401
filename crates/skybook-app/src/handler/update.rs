//! Main update function - handles state transitions (TEA pattern)
//!
//! Handler implementations live in:
//! - `search`: form editing, search round trip, price slider, result list
//! - `seats`: seat map lifecycle, selection, filters, recommendations

use tracing::debug;

use crate::message::Message;
use crate::state::AppState;

use super::{keys::handle_key, search, seats, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            state.mark_changed();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Resize => {
            state.mark_changed();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Search Form Messages
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => search::handle_focus_next(state),
        Message::FocusPrevious => search::handle_focus_previous(state),
        Message::InputChar(c) => search::handle_input_char(state, c),
        Message::InputBackspace => search::handle_input_backspace(state),
        Message::SubmitSearch => search::handle_submit(state),
        Message::SearchCompleted {
            request,
            query,
            max_price,
            flights,
        } => search::handle_search_completed(state, request, &query, max_price, flights),
        Message::SearchFailed { request, error } => {
            search::handle_search_failed(state, request, &error)
        }
        Message::ClearFilters => search::handle_clear_filters(state),

        // ─────────────────────────────────────────────────────────
        // Price Filter Messages
        // ─────────────────────────────────────────────────────────
        Message::AdjustMaxPrice { delta } => search::handle_adjust_max_price(state, delta),
        Message::SetMaxPrice(value) => search::handle_set_max_price(state, value),

        // ─────────────────────────────────────────────────────────
        // Result List Messages
        // ─────────────────────────────────────────────────────────
        Message::SelectNextFlight => search::handle_select_next(state),
        Message::SelectPreviousFlight => search::handle_select_previous(state),
        Message::OpenSelectedFlight => search::handle_open_selected(state),

        // ─────────────────────────────────────────────────────────
        // Seat Map Messages
        // ─────────────────────────────────────────────────────────
        Message::OpenSeatMap { flight } => seats::handle_open(state, flight),
        Message::CloseSeatMap => seats::handle_close(state),
        Message::SeatPlanLoaded { request, seats } => {
            seats::handle_seat_plan_loaded(state, request, seats)
        }
        Message::SeatPlanFailed { request, error } => {
            seats::handle_seat_plan_failed(state, request, &error)
        }
        Message::RefreshRecommendations => seats::handle_refresh_recommendations(state),
        Message::RecommendationsLoaded {
            request,
            query,
            seats,
        } => seats::handle_recommendations_loaded(state, request, query, seats),
        Message::RecommendationsFailed { request, error } => {
            seats::handle_recommendations_failed(state, request, &error)
        }
        Message::MoveSeatCursor(movement) => seats::handle_move_cursor(state, movement),
        Message::ToggleSeatAtCursor => seats::handle_toggle_at_cursor(state),
        Message::ToggleSeat(id) => seats::handle_toggle_seat(state, id),
        Message::ToggleFilter(filter) => seats::handle_toggle_filter(state, filter),

        Message::BookNow => {
            let selected = state
                .seat_map
                .as_ref()
                .map(|view| view.selection.len())
                .unwrap_or(0);
            debug!("Book Now pressed with {} seat(s) selected", selected);
            UpdateResult::none()
        }
    }
}
