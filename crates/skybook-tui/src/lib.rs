//! skybook-tui - Terminal UI for SkyBook
//!
//! ratatui front end over `skybook-app`: polls crossterm events, feeds them
//! through the TEA loop and redraws when the state version changes.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
