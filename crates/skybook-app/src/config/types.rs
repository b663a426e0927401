//! Configuration types for SkyBook
//!
//! Defines:
//! - `Settings` - Global application settings
//! - Related sub-types and enums

use serde::{Deserialize, Serialize};

use skybook_core::prelude::*;
use skybook_core::PRICE_CEILING;

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub search: SearchSettings,

    #[serde(default)]
    pub seats: SeatSettings,
}

impl Settings {
    /// Reject values the app cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(Error::config_invalid("api.base_url must not be empty"));
        }
        if self.api.timeout_ms == 0 {
            return Err(Error::config_invalid("api.timeout_ms must be greater than 0"));
        }
        if self.search.price_step == 0 || self.search.price_step > PRICE_CEILING {
            return Err(Error::config_invalid(format!(
                "search.price_step must be between 1 and {PRICE_CEILING}"
            )));
        }
        if self.seats.recommend_count == 0 {
            return Err(Error::config_invalid(
                "seats.recommend_count must be greater than 0",
            ));
        }
        Ok(())
    }
}

/// Booking backend connection
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ApiSettings {
    /// Base URL the endpoint paths are resolved against
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

/// Search screen behavior
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SearchSettings {
    /// How far Left/Right move the max-price slider
    #[serde(default = "default_price_step")]
    pub price_step: u32,

    #[serde(default)]
    pub empty_result_policy: EmptyResultPolicy,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            price_step: default_price_step(),
            empty_result_policy: EmptyResultPolicy::default(),
        }
    }
}

fn default_price_step() -> u32 {
    10
}

/// When an empty server result gets a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyResultPolicy {
    /// Only searches with a date report "No flights this day!"
    #[default]
    DateOnly,
    /// Searches without a date also report "No flights found!"
    Always,
}

/// Seat map behavior
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SeatSettings {
    /// Number of seats requested from the recommendation endpoint
    #[serde(default = "default_recommend_count")]
    pub recommend_count: u32,
}

impl Default for SeatSettings {
    fn default() -> Self {
        Self {
            recommend_count: default_recommend_count(),
        }
    }
}

fn default_recommend_count() -> u32 {
    3
}
