//! Records returned by the booking API
//!
//! Field names follow the API's camelCase JSON (`departureTime`,
//! `seatNumber`, `businessClass`).

use std::fmt;

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned flight identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlightId(pub i64);

impl fmt::Display for FlightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Seat identifier, unique within one flight's seat plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeatId(pub i64);

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A flight offered by the search endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub id: FlightId,
    pub origin: String,
    pub destination: String,
    /// Local wall-clock departure time
    #[serde(deserialize_with = "deserialize_departure_time")]
    pub departure_time: NaiveDateTime,
    pub price: f64,
}

impl Flight {
    /// `origin - destination`, as shown in the result list
    pub fn route_label(&self) -> String {
        format!("{} - {}", self.origin, self.destination)
    }

    /// Departure date as `YYYY-MM-DD`
    pub fn departure_date(&self) -> String {
        self.departure_time.format("%Y-%m-%d").to_string()
    }

    /// Departure time as `HH:MM`
    pub fn departure_clock(&self) -> String {
        self.departure_time.format("%H:%M").to_string()
    }
}

/// One seat in a flight's seat plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seat {
    pub id: SeatId,
    /// Row digits followed by the column letter, e.g. `12C`
    pub seat_number: String,
    pub occupied: bool,
    pub business_class: bool,
    pub price: f64,
}

/// Criteria for the seat recommendation endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct SeatFilters {
    pub is_window: bool,
    pub has_extra_legroom: bool,
    pub is_near_exit: bool,
}

/// One of the three recommendation criteria
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatFilter {
    Window,
    ExtraLegroom,
    NearExit,
}

impl SeatFilter {
    pub fn label(&self) -> &'static str {
        match self {
            SeatFilter::Window => "Window Seat",
            SeatFilter::ExtraLegroom => "Extra Legroom",
            SeatFilter::NearExit => "Near Exit",
        }
    }
}

impl SeatFilters {
    /// Returns a copy with `filter` flipped
    #[must_use]
    pub fn toggled(self, filter: SeatFilter) -> Self {
        let mut next = self;
        match filter {
            SeatFilter::Window => next.is_window = !next.is_window,
            SeatFilter::ExtraLegroom => next.has_extra_legroom = !next.has_extra_legroom,
            SeatFilter::NearExit => next.is_near_exit = !next.is_near_exit,
        }
        next
    }

    pub fn is_set(&self, filter: SeatFilter) -> bool {
        match filter {
            SeatFilter::Window => self.is_window,
            SeatFilter::ExtraLegroom => self.has_extra_legroom,
            SeatFilter::NearExit => self.is_near_exit,
        }
    }
}

/// Accepts `2024-05-01T10:30:00`, `2024-05-01T10:30:00.123` and RFC 3339
/// timestamps with an offset. Offsets are dropped, keeping the wall-clock
/// time the server reported.
fn deserialize_departure_time<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_departure_time(&raw).ok_or_else(|| {
        serde::de::Error::custom(format!("invalid departure time '{raw}', expected ISO-8601"))
    })
}

pub(crate) fn parse_departure_time(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .ok()
}
