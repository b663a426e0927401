//! Search screen state: query form, price bound and result list

use chrono::NaiveDate;

use skybook_api::SearchQuery;
use skybook_core::prelude::*;
use skybook_core::{clamp_bound, filter_by_max_price, Flight, DEFAULT_MAX_PRICE};

use crate::config::EmptyResultPolicy;

/// Focusable parts of the search screen, in Tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Origin,
    Destination,
    Date,
    MaxPrice,
    Results,
}

impl FormField {
    const ORDER: [FormField; 5] = [
        FormField::Origin,
        FormField::Destination,
        FormField::Date,
        FormField::MaxPrice,
        FormField::Results,
    ];

    pub fn next(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    pub fn is_text(self) -> bool {
        matches!(
            self,
            FormField::Origin | FormField::Destination | FormField::Date
        )
    }
}

/// Message shown under the form after a search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchNotice {
    /// Date given, server returned nothing
    NoFlightsThisDay,
    /// No date given, server returned nothing ([`EmptyResultPolicy::Always`])
    NoFlightsFound,
    /// Server returned flights, the price bound removed all of them
    MaxPriceTooLow,
    /// Date field is not `YYYY-MM-DD`; nothing was sent
    InvalidDate,
    /// Transport or server failure
    Failed,
}

impl SearchNotice {
    pub fn text(&self) -> &'static str {
        match self {
            SearchNotice::NoFlightsThisDay => "No flights this day!",
            SearchNotice::NoFlightsFound => "No flights found!",
            SearchNotice::MaxPriceTooLow => "Max Price too low - No flights found!",
            SearchNotice::InvalidDate => "Invalid date - use YYYY-MM-DD",
            SearchNotice::Failed => "Error finding flights.",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, SearchNotice::InvalidDate | SearchNotice::Failed)
    }
}

/// Everything the search screen shows
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    pub origin: String,
    pub destination: String,
    pub date: String,
    /// Max-price bound in `[0, 350]`
    pub max_price: u32,
    pub focus: FormField,
    /// Flights left after price filtering, in server order
    pub flights: Vec<Flight>,
    /// Highlighted row of `flights`
    pub selected: usize,
    pub notice: Option<SearchNotice>,
    pub loading: bool,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            origin: String::new(),
            destination: String::new(),
            date: String::new(),
            max_price: DEFAULT_MAX_PRICE,
            focus: FormField::default(),
            flights: Vec::new(),
            selected: 0,
            notice: None,
            loading: false,
        }
    }
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset inputs, bound, results and messages; focus stays where it was
    #[must_use]
    pub fn cleared(self) -> Self {
        Self {
            focus: self.focus,
            ..Self::default()
        }
    }

    /// Build the request for the current inputs
    ///
    /// Fails with [`Error::InvalidDate`] when a date is typed but is not
    /// `YYYY-MM-DD`.
    pub fn query(&self) -> Result<SearchQuery> {
        let query = SearchQuery::from_inputs(&self.origin, &self.destination, &self.date);
        if let Some(date) = &query.date {
            NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| Error::invalid_date(date))?;
        }
        Ok(query)
    }

    pub fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::Origin => Some(&mut self.origin),
            FormField::Destination => Some(&mut self.destination),
            FormField::Date => Some(&mut self.date),
            FormField::MaxPrice | FormField::Results => None,
        }
    }

    pub fn set_max_price(&mut self, bound: i64) {
        self.max_price = clamp_bound(bound);
    }

    pub fn adjust_max_price(&mut self, delta: i64) {
        self.set_max_price(i64::from(self.max_price) + delta);
    }

    pub fn selected_flight(&self) -> Option<&Flight> {
        self.flights.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if !self.flights.is_empty() {
            self.selected = (self.selected + 1).min(self.flights.len() - 1);
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}

/// Turn a server response into the displayed list and its message
///
/// `has_date` and `bound` are the values captured when the search was
/// submitted.
pub fn evaluate_search(
    fetched: &[Flight],
    has_date: bool,
    bound: u32,
    policy: EmptyResultPolicy,
) -> (Vec<Flight>, Option<SearchNotice>) {
    if fetched.is_empty() {
        let notice = if has_date {
            Some(SearchNotice::NoFlightsThisDay)
        } else {
            match policy {
                EmptyResultPolicy::DateOnly => None,
                EmptyResultPolicy::Always => Some(SearchNotice::NoFlightsFound),
            }
        };
        return (Vec::new(), notice);
    }

    let flights = filter_by_max_price(fetched, bound);
    if flights.is_empty() {
        (flights, Some(SearchNotice::MaxPriceTooLow))
    } else {
        (flights, None)
    }
}
