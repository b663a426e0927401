//! Application state (Model in TEA pattern)

use crate::config::Settings;
use crate::request::{RequestKind, RequestTracker};
use crate::search::SearchState;
use crate::seat_view::SeatMapState;

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Query form, price slider and result list
    #[default]
    Search,

    /// Seat map for the flight picked on the search screen
    SeatMap,
}

/// Lifecycle of the application loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub screen: Screen,
    pub phase: AppPhase,

    pub search: SearchState,

    /// Present while the seat screen is open. Holds the flight handed over
    /// from the result list; dropped when returning to search.
    pub seat_map: Option<SeatMapState>,

    pub requests: RequestTracker,
    pub settings: Settings,

    /// Bumped by every update that changes what is on screen
    pub version: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            screen: Screen::default(),
            phase: AppPhase::default(),
            search: SearchState::new(),
            seat_map: None,
            requests: RequestTracker::new(),
            settings,
            version: 0,
        }
    }

    pub fn mark_changed(&mut self) {
        self.version = self.version.wrapping_add(1);
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn request_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    /// Switch to the seat screen with a fresh view for `flight`
    pub fn enter_seat_map(&mut self, flight: Option<skybook_core::Flight>) {
        self.screen = Screen::SeatMap;
        self.seat_map = Some(SeatMapState::new(flight));
    }

    /// Return to search, dropping seat state and any seat fetches in flight
    pub fn leave_seat_map(&mut self) {
        self.screen = Screen::Search;
        self.seat_map = None;
        self.requests.invalidate(RequestKind::SeatPlan);
        self.requests.invalidate(RequestKind::Recommendations);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_starts_on_search() {
        let state = AppState::new();
        assert_eq!(state.screen, Screen::Search);
        assert!(state.seat_map.is_none());
        assert_eq!(state.version, 0);
        assert!(!state.should_quit());
    }

    #[test]
    fn test_leave_seat_map_invalidates_seat_requests() {
        let mut state = AppState::new();
        let plan = state.requests.issue(RequestKind::SeatPlan);
        let recommend = state.requests.issue(RequestKind::Recommendations);
        let search = state.requests.issue(RequestKind::Search);

        state.enter_seat_map(None);
        state.leave_seat_map();

        assert_eq!(state.screen, Screen::Search);
        assert!(state.seat_map.is_none());
        assert!(!state.requests.is_latest(plan));
        assert!(!state.requests.is_latest(recommend));
        assert!(state.requests.is_latest(search));
    }
}
