//! Credential Middleware
//!
//! Turns the popup's edit buffer into a submitted credential and closes the
//! popup.

use crate::actions::{Action, CredentialAction, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::domain_models::Credential;
use crate::middleware::Middleware;
use crate::state::AppState;

pub struct CredentialMiddleware;

impl CredentialMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CredentialMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for CredentialMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Credential(CredentialAction::SubmitInput) => {
                let credential = Credential::new(&state.credential.input);
                dispatcher.dispatch(Action::Global(GlobalAction::Close));
                dispatcher.dispatch(Action::Credential(CredentialAction::Submit(credential)));
            }
            Action::Credential(CredentialAction::Cancel) => {
                dispatcher.dispatch(Action::Global(GlobalAction::Close));
            }
            _ => {}
        }
        // The reducer still resets the edit buffer
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::test_support::{drain, recording_dispatcher};

    #[test]
    fn test_submit_input_closes_and_submits_trimmed() {
        let mut state = AppState::default();
        state.credential.input = " ghp_abc ".to_string();
        let (dispatcher, rx) = recording_dispatcher();

        let forwarded = CredentialMiddleware::new().handle(
            &Action::Credential(CredentialAction::SubmitInput),
            &state,
            &dispatcher,
        );

        assert!(forwarded);
        let dispatched = drain(&rx);
        assert!(matches!(
            dispatched.as_slice(),
            [
                Action::Global(GlobalAction::Close),
                Action::Credential(CredentialAction::Submit(c))
            ] if *c == Credential::new("ghp_abc")
        ));
    }

    #[test]
    fn test_cancel_only_closes() {
        let state = AppState::default();
        let (dispatcher, rx) = recording_dispatcher();

        CredentialMiddleware::new().handle(
            &Action::Credential(CredentialAction::Cancel),
            &state,
            &dispatcher,
        );

        assert!(matches!(
            drain(&rx).as_slice(),
            [Action::Global(GlobalAction::Close)]
        ));
    }
}
