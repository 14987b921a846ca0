//! Background worker thread that processes actions through middleware
//!
//! - Main thread handles rendering, key polling and reducing
//! - Background thread runs the middleware chain (API calls, clipboard)
//! - Communication happens via channels
//!
//! Actions that no middleware consumes are forwarded to the main thread.

use crate::actions::{Action, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, RwLock};
use std::thread;

/// Shared state that background can read (main thread writes via reducer)
pub type SharedState = Arc<RwLock<AppState>>;

/// Spawn the background worker thread
///
/// - `action_rx`: actions from the main thread and from `Dispatcher` (re-entry)
/// - `action_tx`: used to create the `Dispatcher` handed to middleware
/// - `result_tx`: actions that reach the reducers on the main thread
/// - `state`: shared state for middleware to read
pub fn spawn_background_worker(
    action_rx: Receiver<Action>,
    action_tx: Sender<Action>,
    result_tx: Sender<Action>,
    state: SharedState,
    middleware: Vec<Box<dyn Middleware>>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        background_loop(action_rx, action_tx, result_tx, state, middleware);
    })
}

fn background_loop(
    action_rx: Receiver<Action>,
    action_tx: Sender<Action>,
    result_tx: Sender<Action>,
    state: SharedState,
    mut middleware: Vec<Box<dyn Middleware>>,
) {
    log::info!("Background worker started");

    let dispatcher = Dispatcher::new(action_tx);

    while let Ok(action) = action_rx.recv() {
        if matches!(action, Action::Global(GlobalAction::Quit)) {
            log::info!("Background worker received shutdown signal");
            if result_tx.send(action).is_err() {
                log::error!("Failed to send quit action to main thread");
            }
            break;
        }

        let current_state = match state.read() {
            Ok(s) => s.clone(),
            Err(e) => {
                log::error!("Failed to read shared state: {}", e);
                continue;
            }
        };

        let forward = process(&action, &current_state, &mut middleware, &dispatcher);

        if forward && result_tx.send(action).is_err() {
            log::error!("Result channel disconnected, shutting down");
            break;
        }
    }

    // Dropping the middleware shuts down the tokio runtime
    log::info!("Background worker stopped");
}

/// Run `action` through the chain; `true` when it should reach the reducer
fn process(
    action: &Action,
    state: &AppState,
    middleware: &mut [Box<dyn Middleware>],
    dispatcher: &Dispatcher,
) -> bool {
    for mw in middleware.iter_mut() {
        if !mw.handle(action, state, dispatcher) {
            return false;
        }
    }
    true
}
