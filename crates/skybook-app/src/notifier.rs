//! State-change notification
//!
//! The process loop publishes [`AppState::version`](crate::AppState) after
//! every message; front ends hold the receiver and redraw only when the
//! value moves.

use tokio::sync::watch;

/// Publishing side of the version channel
#[derive(Debug)]
pub struct StateNotifier {
    tx: watch::Sender<u64>,
}

impl StateNotifier {
    /// Create a notifier seeded with `version`, plus its first subscriber
    pub fn new(version: u64) -> (Self, watch::Receiver<u64>) {
        let (tx, rx) = watch::channel(version);
        (Self { tx }, rx)
    }

    /// Publish `version`; subscribers are woken only when it changed
    pub fn publish(&self, version: u64) {
        self.tx.send_if_modified(|current| {
            if *current == version {
                false
            } else {
                *current = version;
                true
            }
        });
    }

    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.tx.subscribe()
    }
}
