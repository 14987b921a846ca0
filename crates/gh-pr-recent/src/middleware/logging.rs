use crate::actions::{Action, CredentialAction, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use crate::views::ViewId;

/// LoggingMiddleware - logs all actions passing through
///
/// Keystrokes typed into the credential popup are not logged.
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether logging `action` could reveal part of the token being typed
fn carries_secret_input(action: &Action, state: &AppState) -> bool {
    match action {
        Action::Credential(
            CredentialAction::InputChar(_) | CredentialAction::InputBackspace,
        ) => true,
        Action::Global(GlobalAction::KeyPressed(_)) | Action::TextInput(_) => state
            .active_view()
            .is_some_and(|view| view.view_id() == ViewId::Credential),
        _ => false,
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, _dispatcher: &Dispatcher) -> bool {
        if carries_secret_input(action, state) {
            log::debug!("Action: <credential input>");
        } else {
            log::debug!("Action: {:?}", action);
        }
        true
    }
}
