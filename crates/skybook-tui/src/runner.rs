//! Main TUI runner - entry point and event loop

use std::sync::Arc;
use std::time::Duration;

use ratatui::backend::Backend;
use ratatui::Terminal;
use tokio::sync::{mpsc, watch};

use skybook_api::{BookingApi, HttpBookingApi};
use skybook_app::config::Settings;
use skybook_app::message::Message;
use skybook_app::signals::spawn_signal_handler;
use skybook_app::{process_message, AppState, ProcessContext, StateNotifier};
use skybook_core::prelude::*;

use super::{event, render, terminal};

/// Run the TUI against the configured booking API
pub async fn run(settings: Settings) -> Result<()> {
    // Fail on a bad base URL before the terminal is taken over
    let api = HttpBookingApi::new(
        &settings.api.base_url,
        Duration::from_millis(settings.api.timeout_ms),
    )
    .context("Creating booking API client")?;
    info!("Using booking API at {}", api.base_url());

    terminal::install_panic_hook();
    let mut term = terminal::init()?;

    let mut state = AppState::with_settings(settings);
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // Sends Message::Quit on SIGINT/SIGTERM
    let signal_task = spawn_signal_handler(msg_tx.clone());

    let (notifier, version_rx) = StateNotifier::new(state.version);
    let ctx = ProcessContext::new(msg_tx, Arc::new(api), notifier);

    let result = run_loop(&mut term, &mut state, msg_rx, version_rx, &ctx);

    signal_task.abort();
    let restored = terminal::restore();
    info!("SkyBook exiting");

    // A loop error is more useful than a restore error
    result.and(restored)
}

/// Main event loop
///
/// Drains results from background tasks, redraws when the state version
/// moved, then waits briefly for terminal input.
fn run_loop<B, A>(
    terminal: &mut Terminal<B>,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    mut version_rx: watch::Receiver<u64>,
    ctx: &ProcessContext<A>,
) -> Result<()>
where
    B: Backend,
    A: BookingApi + Sync + 'static,
{
    // First frame is drawn before anything changed
    let mut needs_draw = true;

    while !state.should_quit() {
        // Results from API tasks and the signal handler
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, ctx);
        }

        if needs_draw || version_rx.has_changed().unwrap_or(false) {
            version_rx.borrow_and_update();
            terminal
                .draw(|frame| render::view(frame, state))
                .map_err(|e| Error::terminal(format!("Failed to draw frame: {}", e)))
                .with_context(|| format!("Drawing the {:?} screen", state.screen))?;
            needs_draw = false;
        }

        if let Some(message) = event::poll()? {
            process_message(state, message, ctx);
        }
    }

    Ok(())
}
