//! Query parameters for the booking endpoints

use skybook_core::SeatFilters;

/// Flight search criteria
///
/// Only non-empty fields are sent. Inputs are trimmed, so a field holding
/// only whitespace counts as empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery {
    pub origin: Option<String>,
    pub destination: Option<String>,
    /// `YYYY-MM-DD`
    pub date: Option<String>,
}

impl SearchQuery {
    pub fn from_inputs(origin: &str, destination: &str, date: &str) -> Self {
        Self {
            origin: non_empty(origin),
            destination: non_empty(destination),
            date: non_empty(date),
        }
    }

    pub fn has_date(&self) -> bool {
        self.date.is_some()
    }

    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::with_capacity(3);
        if let Some(origin) = &self.origin {
            params.push(("origin", origin.clone()));
        }
        if let Some(destination) = &self.destination {
            params.push(("destination", destination.clone()));
        }
        if let Some(date) = &self.date {
            params.push(("date", date.clone()));
        }
        params
    }
}

/// Recommendation request for one flight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendQuery {
    pub filters: SeatFilters,
    pub count: u32,
}

impl RecommendQuery {
    pub fn new(filters: SeatFilters, count: u32) -> Self {
        Self { filters, count }
    }

    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("isWindow", self.filters.is_window.to_string()),
            ("hasExtraLegroom", self.filters.has_extra_legroom.to_string()),
            ("isNearExit", self.filters.is_near_exit.to_string()),
            ("count", self.count.to_string()),
        ]
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
