//! Dispatcher for middleware action dispatch
//!
//! Actions dispatched here go back to the background worker and re-enter the
//! middleware chain from the beginning. This is how, for example, a submitted
//! credential turns into `LoadStart` and later `Loaded`.

use crate::actions::Action;
use std::sync::mpsc::Sender;

/// Sends actions into the middleware chain
#[derive(Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    /// Dispatch an action through the full middleware chain
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}
