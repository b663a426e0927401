//! In-memory [`BookingApi`] for tests

use std::sync::Mutex;

use skybook_core::prelude::*;
use skybook_core::{Flight, FlightId, Seat};

use crate::client::BookingApi;
use crate::query::{RecommendQuery, SearchQuery};

/// A call received by [`FakeBookingApi`]
#[derive(Debug, Clone, PartialEq)]
pub enum FakeCall {
    Search(SearchQuery),
    SeatPlan(FlightId),
    Recommend(FlightId, RecommendQuery),
}

/// Canned responses plus a call log
#[derive(Debug, Default)]
pub struct FakeBookingApi {
    flights: Vec<Flight>,
    seats: Vec<Seat>,
    recommended: Vec<Seat>,
    failure: Option<String>,
    calls: Mutex<Vec<FakeCall>>,
}

impl FakeBookingApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_flights(mut self, flights: Vec<Flight>) -> Self {
        self.flights = flights;
        self
    }

    pub fn with_seats(mut self, seats: Vec<Seat>) -> Self {
        self.seats = seats;
        self
    }

    pub fn with_recommended(mut self, seats: Vec<Seat>) -> Self {
        self.recommended = seats;
        self
    }

    /// Make every call fail with an HTTP error
    pub fn failing(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    pub fn calls(&self) -> Vec<FakeCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn record(&self, call: FakeCall) -> Result<()> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
        match &self.failure {
            Some(message) => Err(Error::http(message.clone())),
            None => Ok(()),
        }
    }
}

impl BookingApi for FakeBookingApi {
    async fn search_flights(&self, query: &SearchQuery) -> Result<Vec<Flight>> {
        self.record(FakeCall::Search(query.clone()))?;
        Ok(self.flights.clone())
    }

    async fn seat_plan(&self, flight_id: FlightId) -> Result<Vec<Seat>> {
        self.record(FakeCall::SeatPlan(flight_id))?;
        Ok(self.seats.clone())
    }

    async fn recommended_seats(
        &self,
        flight_id: FlightId,
        query: RecommendQuery,
    ) -> Result<Vec<Seat>> {
        self.record(FakeCall::Recommend(flight_id, query))?;
        Ok(self.recommended.clone())
    }
}
