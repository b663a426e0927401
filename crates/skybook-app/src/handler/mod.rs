//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per screen
//! - `search`: Search form, price slider and result list handlers
//! - `seats`: Seat map handlers

pub(crate) mod keys;
pub(crate) mod search;
pub(crate) mod seats;
pub(crate) mod update;


use skybook_api::{RecommendQuery, SearchQuery};
use skybook_core::FlightId;

use crate::message::Message;
use crate::request::RequestId;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Query the flight search endpoint
    SearchFlights {
        request: RequestId,
        query: SearchQuery,
        /// Price bound captured at submission, echoed back with the result
        max_price: u32,
    },

    /// Fetch the seat plan for a flight
    FetchSeatPlan {
        request: RequestId,
        flight_id: FlightId,
    },

    /// Fetch recommended seats for a flight and filter set
    FetchRecommendations {
        request: RequestId,
        flight_id: FlightId,
        query: RecommendQuery,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }

    /// Perform `action`, then process `msg`
    pub fn action_then(action: UpdateAction, msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: Some(action),
        }
    }
}
