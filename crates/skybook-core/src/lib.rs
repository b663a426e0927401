//! # skybook-core - Core Domain Types
//!
//! Foundation crate for SkyBook. Provides the flight and seat records returned
//! by the booking API, the seat map grouping rules, the selection set, price
//! helpers, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, regex, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Flight`], [`FlightId`] - A search result row
//! - [`Seat`], [`SeatId`] - One seat of a flight's seat plan
//! - [`SeatFilters`] - Window / extra legroom / near exit recommendation filters
//!
//! ### Seat Map (`seat_map`)
//! - [`group_into_rows()`] - Partition seats into numerically ordered rows
//! - [`SeatDisplay`] - Display state with occupied > selected > recommended > business > standard precedence
//!
//! ### Selection (`selection`)
//! - [`SelectionSet`] - Ordered toggle set of chosen seats
//!
//! ### Pricing (`price`)
//! - [`filter_by_max_price()`], [`format_price()`], [`PRICE_CEILING`]
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use skybook_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod price;
pub mod seat_map;
pub mod selection;
pub mod types;

/// Prelude for common imports used throughout all SkyBook crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use price::{
    clamp_bound, filter_by_max_price, format_amount, format_price, total_price, DEFAULT_MAX_PRICE,
    PRICE_CEILING, PRICE_FLOOR,
};
pub use seat_map::{
    column_label, group_into_rows, has_aisle_after, row_number, SeatDisplay, SeatRow,
};
pub use selection::SelectionSet;
pub use types::{Flight, FlightId, Seat, SeatFilter, SeatFilters, SeatId};
