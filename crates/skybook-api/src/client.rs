//! Booking API trait and its reqwest implementation

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use skybook_core::prelude::*;
use skybook_core::{Flight, FlightId, Seat};

use crate::query::{RecommendQuery, SearchQuery};

const SEARCH_PATH: &str = "flights/search";
const SEAT_PLAN_PATH: &str = "seats/plan";

/// Read-only operations of the booking backend
///
/// Every call is a single attempt; failures are returned to the caller.
#[trait_variant::make(BookingApi: Send)]
pub trait LocalBookingApi {
    /// Search flights, sending only the criteria that are set
    async fn search_flights(&self, query: &SearchQuery) -> Result<Vec<Flight>>;

    /// Fetch the full seat plan of a flight
    async fn seat_plan(&self, flight_id: FlightId) -> Result<Vec<Seat>>;

    /// Fetch seats recommended for the given criteria
    async fn recommended_seats(
        &self,
        flight_id: FlightId,
        query: RecommendQuery,
    ) -> Result<Vec<Seat>>;
}

/// [`BookingApi`] over HTTP
#[derive(Debug, Clone)]
pub struct HttpBookingApi {
    client: Client,
    base_url: Url,
}

impl HttpBookingApi {
    /// Create a client for the backend at `base_url`
    ///
    /// A base URL with a path prefix (`http://host/api`) keeps the prefix.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let mut url =
            Url::parse(base_url).map_err(|e| Error::invalid_base_url(base_url, e.to_string()))?;
        if url.cannot_be_a_base() {
            return Err(Error::invalid_base_url(base_url, "URL cannot be a base"));
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::http(e.to_string()))?;

        Ok(Self {
            client,
            base_url: url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| Error::invalid_base_url(self.base_url.as_str(), e.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&'static str, String)],
    ) -> Result<T> {
        let url = self.endpoint(path)?;
        debug!("GET {} {:?}", url, params);

        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|e| Error::http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!("GET /{} returned {}", path, status);
            return Err(Error::http_status(status.as_u16(), format!("/{path}")));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::http(e.to_string()))?;

        serde_json::from_slice(&body).map_err(|e| Error::decode(format!("/{path}"), e.to_string()))
    }
}

impl BookingApi for HttpBookingApi {
    async fn search_flights(&self, query: &SearchQuery) -> Result<Vec<Flight>> {
        let flights: Vec<Flight> = self.get_json(SEARCH_PATH, &query.to_params()).await?;
        debug!("Search returned {} flights", flights.len());
        Ok(flights)
    }

    async fn seat_plan(&self, flight_id: FlightId) -> Result<Vec<Seat>> {
        let params = [("flightId", flight_id.to_string())];
        let seats: Vec<Seat> = self.get_json(SEAT_PLAN_PATH, &params).await?;
        debug!("Seat plan for flight {} has {} seats", flight_id, seats.len());
        Ok(seats)
    }

    async fn recommended_seats(
        &self,
        flight_id: FlightId,
        query: RecommendQuery,
    ) -> Result<Vec<Seat>> {
        let path = format!("flights/{flight_id}/seats/recommend");
        self.get_json(&path, &query.to_params()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let api = HttpBookingApi::new("http://localhost:8080", Duration::from_secs(1)).unwrap();
        assert_eq!(api.base_url().as_str(), "http://localhost:8080/");
        assert_eq!(
            api.endpoint(SEARCH_PATH).unwrap().as_str(),
            "http://localhost:8080/flights/search"
        );
    }

    #[test]
    fn test_base_url_path_prefix_is_kept() {
        let api = HttpBookingApi::new("http://example.test/api", Duration::from_secs(1)).unwrap();
        assert_eq!(
            api.endpoint("flights/42/seats/recommend").unwrap().as_str(),
            "http://example.test/api/flights/42/seats/recommend"
        );
    }

    #[test]
    fn test_invalid_base_url_is_fatal() {
        let err = HttpBookingApi::new("not a url", Duration::from_secs(1)).unwrap_err();
        assert!(matches!(err, Error::InvalidBaseUrl { .. }));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_non_base_url_is_rejected() {
        let err = HttpBookingApi::new("mailto:ops@example.test", Duration::from_secs(1)).unwrap_err();
        assert!(matches!(err, Error::InvalidBaseUrl { .. }));
    }
}
