//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Each action becomes one tokio task that calls the [`BookingApi`] and
//! reports back with a single message tagged with the request id it was
//! issued under. Failures are logged here and surface as `*Failed`
//! messages; nothing is retried.

use std::sync::Arc;

use tokio::sync::mpsc;

use skybook_api::BookingApi;
use skybook_core::prelude::*;

use crate::message::Message;
use crate::UpdateAction;

/// Execute an action by spawning a background task
pub fn handle_action<A>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, api: Arc<A>)
where
    A: BookingApi + Sync + 'static,
{
    match action {
        UpdateAction::SearchFlights {
            request,
            query,
            max_price,
        } => {
            tokio::spawn(async move {
                let msg = match api.search_flights(&query).await {
                    Ok(flights) => Message::SearchCompleted {
                        request,
                        query,
                        max_price,
                        flights,
                    },
                    Err(e) => {
                        log_failure("Flight search", &e);
                        Message::SearchFailed {
                            request,
                            error: e.to_string(),
                        }
                    }
                };
                send(&msg_tx, msg).await;
            });
        }

        UpdateAction::FetchSeatPlan { request, flight_id } => {
            tokio::spawn(async move {
                let msg = match api.seat_plan(flight_id).await {
                    Ok(seats) => Message::SeatPlanLoaded { request, seats },
                    Err(e) => {
                        log_failure(&format!("Seat plan for flight {flight_id}"), &e);
                        Message::SeatPlanFailed {
                            request,
                            error: e.to_string(),
                        }
                    }
                };
                send(&msg_tx, msg).await;
            });
        }

        UpdateAction::FetchRecommendations {
            request,
            flight_id,
            query,
        } => {
            tokio::spawn(async move {
                let msg = match api.recommended_seats(flight_id, query).await {
                    Ok(seats) => Message::RecommendationsLoaded {
                        request,
                        query,
                        seats,
                    },
                    Err(e) => {
                        log_failure(&format!("Recommendations for flight {flight_id}"), &e);
                        Message::RecommendationsFailed {
                            request,
                            error: e.to_string(),
                        }
                    }
                };
                send(&msg_tx, msg).await;
            });
        }
    }
}

/// API failures the view can recover from are warnings; anything else is an error
fn log_failure(what: &str, e: &Error) {
    if e.is_recoverable() {
        warn!("{} failed: {}", what, e);
    } else {
        error!("{} failed: {}", what, e);
    }
}

async fn send(msg_tx: &mpsc::Sender<Message>, msg: Message) {
    if msg_tx.send(msg).await.is_err() {
        // Receiver is gone once the app is shutting down
        debug!("Message channel closed, dropping API result");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{RequestKind, RequestTracker};
    use skybook_api::fake::{FakeBookingApi, FakeCall};
    use skybook_api::{RecommendQuery, SearchQuery};
    use skybook_core::{FlightId, Seat, SeatFilters, SeatId};

    fn seat(id: i64, number: &str) -> Seat {
        Seat {
            id: SeatId(id),
            seat_number: number.to_string(),
            occupied: false,
            business_class: true,
            price: 120.0,
        }
    }

    #[tokio::test]
    async fn test_search_action_echoes_request_and_bound() {
        let (tx, mut rx) = mpsc::channel(4);
        let api = Arc::new(FakeBookingApi::new());
        let request = RequestTracker::new().issue(RequestKind::Search);
        let query = SearchQuery::from_inputs("Tallinn", "", "2024-05-01");

        handle_action(
            UpdateAction::SearchFlights {
                request,
                query: query.clone(),
                max_price: 80,
            },
            tx,
            api.clone(),
        );

        match rx.recv().await {
            Some(Message::SearchCompleted {
                request: echoed,
                query: echoed_query,
                max_price,
                flights,
            }) => {
                assert_eq!(echoed, request);
                assert_eq!(echoed_query, query);
                assert_eq!(max_price, 80);
                assert!(flights.is_empty());
            }
            other => panic!("unexpected message: {:?}", other),
        }
        assert_eq!(api.calls(), vec![FakeCall::Search(query)]);
    }

    #[tokio::test]
    async fn test_failed_seat_plan_reports_failure() {
        let (tx, mut rx) = mpsc::channel(4);
        let api = Arc::new(FakeBookingApi::new().failing("boom"));
        let request = RequestTracker::new().issue(RequestKind::SeatPlan);

        handle_action(
            UpdateAction::FetchSeatPlan {
                request,
                flight_id: FlightId(3),
            },
            tx,
            api,
        );

        match rx.recv().await {
            Some(Message::SeatPlanFailed { request: r, error }) => {
                assert_eq!(r, request);
                assert!(error.contains("boom"));
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_recommendations_action_passes_filters() {
        let (tx, mut rx) = mpsc::channel(4);
        let api = Arc::new(FakeBookingApi::new().with_recommended(vec![seat(1, "1A")]));
        let request = RequestTracker::new().issue(RequestKind::Recommendations);
        let filters = SeatFilters {
            is_window: true,
            ..SeatFilters::default()
        };
        let query = RecommendQuery::new(filters, 3);

        handle_action(
            UpdateAction::FetchRecommendations {
                request,
                flight_id: FlightId(7),
                query,
            },
            tx,
            api.clone(),
        );

        match rx.recv().await {
            Some(Message::RecommendationsLoaded { seats, .. }) => {
                assert_eq!(seats.len(), 1);
            }
            other => panic!("unexpected message: {:?}", other),
        }
        assert_eq!(api.calls(), vec![FakeCall::Recommend(FlightId(7), query)]);
    }
}
