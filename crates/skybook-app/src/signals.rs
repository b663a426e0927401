//! OS signal handling: SIGINT/SIGTERM (Ctrl+C on Windows) become
//! [`Message::Quit`] so the terminal is restored on the normal exit path.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use skybook_core::prelude::*;

use crate::message::Message;

/// Spawn the listener; the task ends after forwarding one quit
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) -> JoinHandle<()> {
    tokio::spawn(async move {
        match next_shutdown_signal().await {
            Ok(name) => {
                info!("Received {}, shutting down", name);
                if tx.send(Message::Quit).await.is_err() {
                    debug!("App loop already gone, ignoring {}", name);
                }
            }
            Err(e) => error!("Signal handler error: {}", e),
        }
    })
}

/// Resolve with the name of the first shutdown signal delivered
async fn next_shutdown_signal() -> Result<&'static str> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigint = signal(SignalKind::interrupt())
            .map_err(|e| Error::terminal(format!("Failed to create SIGINT handler: {}", e)))?;
        let mut sigterm = signal(SignalKind::terminate())
            .map_err(|e| Error::terminal(format!("Failed to create SIGTERM handler: {}", e)))?;

        let name = tokio::select! {
            _ = sigint.recv() => "SIGINT",
            _ = sigterm.recv() => "SIGTERM",
        };
        Ok(name)
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c()
            .await
            .map_err(|e| Error::terminal(format!("Failed to listen for Ctrl+C: {}", e)))?;
        Ok("Ctrl+C")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_no_quit_without_signal() {
        let (tx, mut rx) = mpsc::channel::<Message>(1);

        let handle = spawn_signal_handler(tx);
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        assert!(rx.try_recv().is_err());
        assert!(!handle.is_finished());
        handle.abort();
    }
}
