//! skybook-api - Booking API client for SkyBook
//!
//! Talks to the three read-only endpoints of the booking backend:
//! - `GET /flights/search` - flight search
//! - `GET /seats/plan` - seat plan for one flight
//! - `GET /flights/{id}/seats/recommend` - recommended seats for one flight
//!
//! The app layer only depends on the [`BookingApi`] trait, so tests can swap
//! in [`fake::FakeBookingApi`] (feature `test-helpers`).

pub mod client;
pub mod query;

#[cfg(any(test, feature = "test-helpers"))]
pub mod fake;

pub use client::{BookingApi, HttpBookingApi, LocalBookingApi};
pub use query::{RecommendQuery, SearchQuery};
