//! skybook-app - Application state and orchestration for SkyBook
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state management:
//! an owned [`AppState`], a pure [`handler::update`] function driven by [`Message`]s,
//! and [`UpdateAction`]s that the event loop turns into background API calls.
//! It also owns configuration loading, request sequencing and the state-change
//! notifier that tells front ends when to redraw.

pub mod actions;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod notifier;
pub mod process;
pub mod request;
pub mod search;
pub mod seat_view;
pub mod signals;
pub mod state;

// Re-export primary types
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use notifier::StateNotifier;
pub use process::{process_message, ProcessContext};
pub use request::{RequestId, RequestKind, RequestTracker};
pub use state::{AppState, Screen};
