//! Message processing
//!
//! Runs a message and its follow-ups through the TEA update function,
//! hands actions to the background task spawner and publishes the state
//! version afterwards.

use std::sync::Arc;

use tokio::sync::mpsc;

use skybook_api::BookingApi;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::notifier::StateNotifier;
use crate::state::AppState;

/// Everything the loop needs besides the state itself
pub struct ProcessContext<A> {
    pub msg_tx: mpsc::Sender<Message>,
    pub api: Arc<A>,
    pub notifier: StateNotifier,
}

impl<A> ProcessContext<A>
where
    A: BookingApi + Sync + 'static,
{
    pub fn new(msg_tx: mpsc::Sender<Message>, api: Arc<A>, notifier: StateNotifier) -> Self {
        Self {
            msg_tx,
            api,
            notifier,
        }
    }
}

/// Process a message through the TEA update function
pub fn process_message<A>(state: &mut AppState, message: Message, ctx: &ProcessContext<A>)
where
    A: BookingApi + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, ctx.msg_tx.clone(), ctx.api.clone());
        }

        // Continue with follow-up message
        msg = result.message;
    }

    ctx.notifier.publish(state.version);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Screen;
    use chrono::NaiveDate;
    use skybook_api::fake::{FakeBookingApi, FakeCall};
    use skybook_core::{Flight, FlightId, Seat, SeatFilter, SeatId};
    use tokio::sync::watch;

    fn flight(id: i64, price: f64) -> Flight {
        Flight {
            id: FlightId(id),
            origin: "Tallinn".to_string(),
            destination: "London".to_string(),
            departure_time: NaiveDate::from_ymd_opt(2024, 5, 1)
                .unwrap()
                .and_hms_opt(18, 45, 0)
                .unwrap(),
            price,
        }
    }

    fn seat(id: i64, number: &str, price: f64) -> Seat {
        Seat {
            id: SeatId(id),
            seat_number: number.to_string(),
            occupied: false,
            business_class: false,
            price,
        }
    }

    fn context(
        api: FakeBookingApi,
    ) -> (
        ProcessContext<FakeBookingApi>,
        mpsc::Receiver<Message>,
        watch::Receiver<u64>,
    ) {
        let (msg_tx, msg_rx) = mpsc::channel(16);
        let (notifier, version_rx) = StateNotifier::new(0);
        (
            ProcessContext::new(msg_tx, Arc::new(api), notifier),
            msg_rx,
            version_rx,
        )
    }

    /// Feed results from background tasks back in until `expected` arrived
    async fn pump(
        state: &mut AppState,
        ctx: &ProcessContext<FakeBookingApi>,
        rx: &mut mpsc::Receiver<Message>,
        expected: usize,
    ) {
        for _ in 0..expected {
            let msg = rx.recv().await.expect("task result");
            process_message(state, msg, ctx);
        }
    }

    #[tokio::test]
    async fn test_search_round_trip_filters_by_bound() {
        let api = FakeBookingApi::new().with_flights(vec![flight(1, 100.0), flight(2, 400.0)]);
        let (ctx, mut rx, mut version_rx) = context(api);
        let mut state = AppState::new();

        process_message(&mut state, Message::SubmitSearch, &ctx);
        assert!(state.search.loading);
        assert!(version_rx.has_changed().unwrap());
        version_rx.borrow_and_update();

        pump(&mut state, &ctx, &mut rx, 1).await;

        assert!(!state.search.loading);
        assert_eq!(state.search.flights.len(), 1);
        assert_eq!(state.search.flights[0].id, FlightId(1));
        assert!(version_rx.has_changed().unwrap());
    }

    #[tokio::test]
    async fn test_opening_flight_loads_plan_and_recommendations() {
        let api = FakeBookingApi::new()
            .with_seats(vec![seat(1, "12A", 50.0), seat(2, "14C", 75.0)])
            .with_recommended(vec![seat(2, "14C", 75.0)]);
        let (ctx, mut rx, _version_rx) = context(api);
        let mut state = AppState::new();
        state.search.flights = vec![flight(9, 120.0)];

        process_message(&mut state, Message::OpenSelectedFlight, &ctx);
        assert_eq!(state.screen, Screen::SeatMap);

        pump(&mut state, &ctx, &mut rx, 2).await;

        let view = state.seat_map.as_ref().unwrap();
        assert_eq!(view.seats.len(), 2);
        assert_eq!(view.recommended.len(), 1);
        assert!(view.is_recommended(SeatId(2)));

        let calls = ctx.api.calls();
        assert!(calls.contains(&FakeCall::SeatPlan(FlightId(9))));
        assert!(calls
            .iter()
            .any(|c| matches!(c, FakeCall::Recommend(FlightId(9), _))));
    }

    #[tokio::test]
    async fn test_filter_toggle_requests_new_recommendations() {
        let (ctx, mut rx, _version_rx) = context(FakeBookingApi::new());
        let mut state = AppState::new();
        process_message(
            &mut state,
            Message::OpenSeatMap {
                flight: Some(flight(4, 80.0)),
            },
            &ctx,
        );
        pump(&mut state, &ctx, &mut rx, 2).await;

        process_message(&mut state, Message::ToggleFilter(SeatFilter::Window), &ctx);
        pump(&mut state, &ctx, &mut rx, 1).await;

        let windows: Vec<bool> = ctx
            .api
            .calls()
            .into_iter()
            .filter_map(|c| match c {
                FakeCall::Recommend(_, query) => Some(query.filters.is_window),
                _ => None,
            })
            .collect();
        assert_eq!(windows, vec![false, true]);
    }

    #[tokio::test]
    async fn test_open_without_flight_makes_no_calls() {
        let (ctx, mut rx, _version_rx) = context(FakeBookingApi::new());
        let mut state = AppState::new();

        process_message(&mut state, Message::OpenSeatMap { flight: None }, &ctx);

        assert_eq!(state.screen, Screen::SeatMap);
        assert!(ctx.api.calls().is_empty());
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_api_failure_surfaces_message() {
        let (ctx, mut rx, _version_rx) = context(FakeBookingApi::new().failing("down"));
        let mut state = AppState::new();

        process_message(&mut state, Message::SubmitSearch, &ctx);
        pump(&mut state, &ctx, &mut rx, 1).await;

        assert_eq!(
            state.search.notice.map(|n| n.text()),
            Some("Error finding flights.")
        );
    }
}
