//! Seat map handlers: entering and leaving, seat plan and recommendation
//! round trips, selection and filters

use skybook_api::RecommendQuery;
use skybook_core::prelude::*;
use skybook_core::{Flight, Seat, SeatFilter, SeatId};

use crate::message::Message;
use crate::request::{RequestId, RequestKind};
use crate::seat_view::{CursorMove, SeatNotice};
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Open the seat screen
///
/// Without a flight the view renders empty and nothing is fetched.
/// Otherwise the seat plan is requested and recommendations follow.
pub fn handle_open(state: &mut AppState, flight: Option<Flight>) -> UpdateResult {
    let flight_id = flight.as_ref().map(|f| f.id);

    // Anything still in flight belongs to a previous visit
    state.requests.invalidate(RequestKind::SeatPlan);
    state.requests.invalidate(RequestKind::Recommendations);
    state.enter_seat_map(flight);
    state.mark_changed();

    let Some(flight_id) = flight_id else {
        warn!("Seat map opened without a flight, nothing to fetch");
        return UpdateResult::none();
    };

    info!("Opening seat map for flight {}", flight_id);
    let request = state.requests.issue(RequestKind::SeatPlan);
    UpdateResult::action_then(
        UpdateAction::FetchSeatPlan { request, flight_id },
        Message::RefreshRecommendations,
    )
}

pub fn handle_close(state: &mut AppState) -> UpdateResult {
    state.leave_seat_map();
    state.mark_changed();
    UpdateResult::none()
}

pub fn handle_seat_plan_loaded(
    state: &mut AppState,
    request: RequestId,
    seats: Vec<Seat>,
) -> UpdateResult {
    if !state.requests.is_latest(request) {
        debug!("Dropping stale seat plan (request {})", request.seq);
        return UpdateResult::none();
    }
    let Some(view) = state.seat_map.as_mut() else {
        return UpdateResult::none();
    };

    debug!("Seat plan loaded: {} seat(s)", seats.len());
    view.load_seats(seats);
    state.mark_changed();
    UpdateResult::none()
}

pub fn handle_seat_plan_failed(
    state: &mut AppState,
    request: RequestId,
    error: &str,
) -> UpdateResult {
    if !state.requests.is_latest(request) {
        debug!("Dropping stale seat plan failure (request {})", request.seq);
        return UpdateResult::none();
    }
    let Some(view) = state.seat_map.as_mut() else {
        return UpdateResult::none();
    };

    error!("Error fetching seat plan: {}", error);
    view.loading = false;
    view.report(SeatNotice::SeatPlanFailed);
    state.mark_changed();
    UpdateResult::none()
}

/// Ask for recommendations matching the current filters
pub fn handle_refresh_recommendations(state: &mut AppState) -> UpdateResult {
    let Some((flight_id, filters)) = state
        .seat_map
        .as_ref()
        .and_then(|view| view.flight_id().map(|id| (id, view.filters)))
    else {
        return UpdateResult::none();
    };

    let query = RecommendQuery::new(filters, state.settings.seats.recommend_count);
    let request = state.requests.issue(RequestKind::Recommendations);
    debug!(
        "Requesting recommendations for flight {} (request {}): {:?}",
        flight_id, request.seq, query
    );
    UpdateResult::action(UpdateAction::FetchRecommendations {
        request,
        flight_id,
        query,
    })
}

pub fn handle_recommendations_loaded(
    state: &mut AppState,
    request: RequestId,
    query: RecommendQuery,
    seats: Vec<Seat>,
) -> UpdateResult {
    if !state.requests.is_latest(request) {
        debug!("Dropping stale recommendations (request {})", request.seq);
        return UpdateResult::none();
    }
    let Some(view) = state.seat_map.as_mut() else {
        return UpdateResult::none();
    };

    debug!("{} recommended seat(s) for {:?}", seats.len(), query.filters);
    view.load_recommended(seats);
    state.mark_changed();
    UpdateResult::none()
}

pub fn handle_recommendations_failed(
    state: &mut AppState,
    request: RequestId,
    error: &str,
) -> UpdateResult {
    if !state.requests.is_latest(request) {
        debug!("Dropping stale recommendation failure (request {})", request.seq);
        return UpdateResult::none();
    }
    let Some(view) = state.seat_map.as_mut() else {
        return UpdateResult::none();
    };

    error!("Error fetching recommended seats: {}", error);
    view.report(SeatNotice::RecommendationsFailed);
    state.mark_changed();
    UpdateResult::none()
}

pub fn handle_move_cursor(state: &mut AppState, movement: CursorMove) -> UpdateResult {
    let Some(view) = state.seat_map.as_mut() else {
        return UpdateResult::none();
    };

    let before = view.cursor;
    view.move_cursor(movement);
    if view.cursor != before {
        state.mark_changed();
    }
    UpdateResult::none()
}

pub fn handle_toggle_at_cursor(state: &mut AppState) -> UpdateResult {
    let seat_id = state
        .seat_map
        .as_ref()
        .and_then(|view| view.seat_at_cursor())
        .map(|seat| seat.id);

    match seat_id {
        Some(id) => handle_toggle_seat(state, id),
        None => UpdateResult::none(),
    }
}

/// Toggle one seat; occupied and unknown seats are left alone
pub fn handle_toggle_seat(state: &mut AppState, id: SeatId) -> UpdateResult {
    let Some(view) = state.seat_map.as_mut() else {
        return UpdateResult::none();
    };

    if view.toggle_seat(id) {
        debug!("Seat {} toggled, total {}", id, view.total_label());
        state.mark_changed();
    }
    UpdateResult::none()
}

/// Flip a filter and refresh recommendations; the selection is untouched
pub fn handle_toggle_filter(state: &mut AppState, filter: SeatFilter) -> UpdateResult {
    let Some(view) = state.seat_map.as_mut() else {
        return UpdateResult::none();
    };

    view.toggle_filter(filter);
    state.mark_changed();
    UpdateResult::message(Message::RefreshRecommendations)
}
