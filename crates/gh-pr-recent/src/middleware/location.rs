//! Location Middleware
//!
//! Reads the view location once at start-up: restores the status selection
//! and submits the credential it carries. Without a credential the
//! credential popup is opened.

use crate::actions::{
    Action, BootstrapAction, CredentialAction, FilterAction, GlobalAction, StatusBarAction,
};
use crate::dispatcher::Dispatcher;
use crate::domain_models::credential::TOKEN_PARAM;
use crate::domain_models::pr_filter::STATUS_PARAM;
use crate::domain_models::Credential;
use crate::middleware::Middleware;
use crate::state::AppState;
use crate::views::CredentialView;

pub struct LocationMiddleware {
    /// Used when the location carries no token (`--token` / `GITHUB_TOKEN`)
    fallback_credential: Credential,
}

impl LocationMiddleware {
    pub fn new(fallback_credential: Credential) -> Self {
        Self {
            fallback_credential,
        }
    }

    fn restore(&self, state: &AppState, dispatcher: &Dispatcher) {
        let location = &state.location;

        let statuses = location.get_all(STATUS_PARAM);
        if !statuses.is_empty() {
            log::info!("Restoring status selection {:?}", statuses);
            dispatcher.dispatch(Action::Filter(FilterAction::SetStatuses(statuses)));
        }

        let credential = location
            .get(TOKEN_PARAM)
            .map(Credential::new)
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| self.fallback_credential.clone());

        if credential.is_empty() {
            log::info!("No credential available, asking for one");
            dispatcher.dispatch(Action::Global(GlobalAction::PushView(Box::new(
                CredentialView::new(),
            ))));
            dispatcher.dispatch(Action::StatusBar(StatusBarAction::info(
                "Enter a GitHub token to load your pull requests",
                "Start",
            )));
        } else {
            dispatcher.dispatch(Action::Credential(CredentialAction::Submit(credential)));
        }
    }
}

impl Middleware for LocationMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Bootstrap(BootstrapAction::Start) = action {
            self.restore(state, dispatcher);
            return false;
        }
        true
    }
}
