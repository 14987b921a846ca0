//! Translation Middleware
//!
//! Translates the generic Navigate, TextInput and ViewContext actions into
//! view-specific actions using the active view. Translated actions are
//! dispatched so they pass through the full middleware chain.

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// Middleware that translates generic actions via the active view
pub struct TranslationMiddleware;

impl TranslationMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TranslationMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for TranslationMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Some(view) = state.active_view() else {
            return true;
        };

        let translated = match action {
            Action::Navigate(nav) => view.translate_navigation(*nav),
            Action::TextInput(input) => view.translate_text_input(input.clone()),
            Action::ViewContext(context) => view.translate_context_action(*context, state),
            _ => return true,
        };

        match translated {
            Some(translated) => {
                log::debug!("TranslationMiddleware: {:?} -> {:?}", view.view_id(), translated);
                dispatcher.dispatch(translated);
            }
            None => {
                log::debug!("Generic action not handled by {:?}", view.view_id());
            }
        }

        // Generic actions never reach the reducer
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{BootstrapAction, NavigationAction, PullRequestAction};
    use crate::middleware::test_support::{drain, recording_dispatcher};

    #[test]
    fn test_navigation_translated_by_table_view() {
        let state = AppState::default();
        let (dispatcher, rx) = recording_dispatcher();
        let mut middleware = TranslationMiddleware::new();

        let forwarded = middleware.handle(
            &Action::Navigate(NavigationAction::Next),
            &state,
            &dispatcher,
        );

        assert!(!forwarded);
        let dispatched = drain(&rx);
        assert!(matches!(
            dispatched.as_slice(),
            [Action::PullRequest(PullRequestAction::NavigateNext)]
        ));
    }

    #[test]
    fn test_other_actions_pass_through() {
        let state = AppState::default();
        let (dispatcher, rx) = recording_dispatcher();
        let mut middleware = TranslationMiddleware::new();

        assert!(middleware.handle(
            &Action::Bootstrap(BootstrapAction::Start),
            &state,
            &dispatcher
        ));
        assert!(drain(&rx).is_empty());
    }
}
