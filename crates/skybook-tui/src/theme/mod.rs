//! Centralized theme for the SkyBook TUI.
//!
//! - `palette`: raw color constants
//! - `styles`: semantic style builders

pub mod palette;
pub mod styles;
