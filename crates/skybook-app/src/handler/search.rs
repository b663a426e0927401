//! Search screen handlers: form editing, search round trip, price slider
//! and result list

use skybook_api::SearchQuery;
use skybook_core::prelude::*;
use skybook_core::Flight;

use crate::message::Message;
use crate::request::{RequestId, RequestKind};
use crate::search::{evaluate_search, SearchNotice};
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

pub fn handle_focus_next(state: &mut AppState) -> UpdateResult {
    state.search.focus = state.search.focus.next();
    state.mark_changed();
    UpdateResult::none()
}

pub fn handle_focus_previous(state: &mut AppState) -> UpdateResult {
    state.search.focus = state.search.focus.prev();
    state.mark_changed();
    UpdateResult::none()
}

pub fn handle_input_char(state: &mut AppState, c: char) -> UpdateResult {
    if let Some(text) = state.search.focused_text_mut() {
        text.push(c);
        state.mark_changed();
    }
    UpdateResult::none()
}

pub fn handle_input_backspace(state: &mut AppState) -> UpdateResult {
    let removed = state
        .search
        .focused_text_mut()
        .and_then(|text| text.pop())
        .is_some();
    if removed {
        state.mark_changed();
    }
    UpdateResult::none()
}

/// Validate the inputs and start a search
///
/// Every attempt clears the previous message. An invalid date is reported
/// without sending anything.
pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    state.search.notice = None;
    state.mark_changed();

    let query = match state.search.query() {
        Ok(query) => query,
        Err(e) => {
            debug!("Search not sent: {}", e);
            state.requests.invalidate(RequestKind::Search);
            state.search.loading = false;
            state.search.notice = Some(SearchNotice::InvalidDate);
            return UpdateResult::none();
        }
    };

    let request = state.requests.issue(RequestKind::Search);
    state.search.loading = true;
    debug!("Searching flights (request {}): {:?}", request.seq, query);

    UpdateResult::action(UpdateAction::SearchFlights {
        request,
        query,
        max_price: state.search.max_price,
    })
}

pub fn handle_search_completed(
    state: &mut AppState,
    request: RequestId,
    query: &SearchQuery,
    max_price: u32,
    fetched: Vec<Flight>,
) -> UpdateResult {
    if !state.requests.is_latest(request) {
        debug!("Dropping stale search response (request {})", request.seq);
        return UpdateResult::none();
    }

    let (flights, notice) = evaluate_search(
        &fetched,
        query.has_date(),
        max_price,
        state.settings.search.empty_result_policy,
    );
    info!(
        "Search returned {} flight(s), {} within {}€",
        fetched.len(),
        flights.len(),
        max_price
    );

    state.search.flights = flights;
    state.search.selected = 0;
    state.search.notice = notice;
    state.search.loading = false;
    state.mark_changed();
    UpdateResult::none()
}

pub fn handle_search_failed(state: &mut AppState, request: RequestId, error: &str) -> UpdateResult {
    if !state.requests.is_latest(request) {
        debug!("Dropping stale search failure (request {})", request.seq);
        return UpdateResult::none();
    }

    error!("Error finding flights: {}", error);
    state.search.flights.clear();
    state.search.selected = 0;
    state.search.notice = Some(SearchNotice::Failed);
    state.search.loading = false;
    state.mark_changed();
    UpdateResult::none()
}

/// Reset the whole form in one step; a search in flight is abandoned
pub fn handle_clear_filters(state: &mut AppState) -> UpdateResult {
    state.search = std::mem::take(&mut state.search).cleared();
    state.requests.invalidate(RequestKind::Search);
    state.mark_changed();
    UpdateResult::none()
}

pub fn handle_adjust_max_price(state: &mut AppState, delta: i64) -> UpdateResult {
    let before = state.search.max_price;
    state.search.adjust_max_price(delta);
    if state.search.max_price != before {
        state.mark_changed();
    }
    UpdateResult::none()
}

pub fn handle_set_max_price(state: &mut AppState, value: i64) -> UpdateResult {
    let before = state.search.max_price;
    state.search.set_max_price(value);
    if state.search.max_price != before {
        state.mark_changed();
    }
    UpdateResult::none()
}

pub fn handle_select_next(state: &mut AppState) -> UpdateResult {
    state.search.select_next();
    state.mark_changed();
    UpdateResult::none()
}

pub fn handle_select_previous(state: &mut AppState) -> UpdateResult {
    state.search.select_previous();
    state.mark_changed();
    UpdateResult::none()
}

/// Hand the highlighted flight to the seat screen
pub fn handle_open_selected(state: &mut AppState) -> UpdateResult {
    match state.search.selected_flight() {
        Some(flight) => UpdateResult::message(Message::OpenSeatMap {
            flight: Some(flight.clone()),
        }),
        None => UpdateResult::none(),
    }
}
