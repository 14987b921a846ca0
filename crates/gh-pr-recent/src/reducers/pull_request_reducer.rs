//! Pull Request Reducer
//!
//! Cursor movement and the fetch lifecycle. Fetch results are accepted only
//! for the most recently started ticket, and only while its credential is
//! still the current one.

use crate::actions::{Action, CredentialAction, PullRequestAction};
use crate::domain_models::{Credential, FetchTicket, LoadingState};
use crate::state::PullRequestState;

/// Reduce PR state
///
/// - `current_credential`: the credential before this action is applied
/// - `visible_len`: number of rows currently displayed
pub fn reduce(
    mut state: PullRequestState,
    action: &Action,
    current_credential: &Credential,
    visible_len: usize,
) -> PullRequestState {
    match action {
        Action::PullRequest(pr_action) => {
            state = reduce_pr_action(state, pr_action, current_credential, visible_len)
        }
        Action::Credential(CredentialAction::Submit(credential))
            if credential != current_credential =>
        {
            // A fetch for the previous credential can no longer be accepted
            if state
                .pending_ticket
                .as_ref()
                .is_some_and(|t| t.credential != *credential)
            {
                state.pending_ticket = None;
                if state.loading_state == LoadingState::Loading {
                    state.loading_state = LoadingState::Idle;
                }
            }
        }
        _ => {}
    }
    state
}

fn reduce_pr_action(
    mut state: PullRequestState,
    action: &PullRequestAction,
    current_credential: &Credential,
    visible_len: usize,
) -> PullRequestState {
    match action {
        PullRequestAction::NavigateNext => {
            if state.selected + 1 < visible_len {
                state.selected += 1;
            }
        }
        PullRequestAction::NavigatePrevious => {
            state.selected = state.selected.saturating_sub(1);
        }
        PullRequestAction::NavigateToTop => state.selected = 0,
        PullRequestAction::NavigateToBottom => state.selected = visible_len.saturating_sub(1),

        PullRequestAction::LoadStart(ticket) => {
            state.pending_ticket = Some(ticket.clone());
            state.loading_state = LoadingState::Loading;
        }
        PullRequestAction::Loaded { ticket, prs } => {
            if is_current(&state, ticket, current_credential) {
                state.prs = prs.clone();
                state.loading_state = LoadingState::Loaded;
                state.pending_ticket = None;
                state.selected = 0;
                state.last_updated = Some(chrono::Local::now());
            } else {
                log::debug!("Discarding stale result of fetch #{}", ticket.id);
            }
        }
        PullRequestAction::LoadError { ticket, error } => {
            if is_current(&state, ticket, current_credential) {
                state.prs.clear();
                state.loading_state = LoadingState::Error(error.clone());
                state.pending_ticket = None;
                state.selected = 0;
            } else {
                log::debug!("Discarding stale error of fetch #{}", ticket.id);
            }
        }

        // Side effects only, handled by middleware
        PullRequestAction::OpenInBrowser
        | PullRequestAction::CopyLink
        | PullRequestAction::CopyAllLinks
        | PullRequestAction::CopyShareLink
        | PullRequestAction::Refresh => {}
    }
    state
}

fn is_current(state: &PullRequestState, ticket: &FetchTicket, credential: &Credential) -> bool {
    state.pending_ticket.as_ref() == Some(ticket) && ticket.credential == *credential
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::pull_request::test_pr;
    use crate::domain_models::Pr;

    fn ticket(id: u64, token: &str) -> FetchTicket {
        FetchTicket {
            id,
            credential: Credential::new(token),
        }
    }

    fn pr_action(action: PullRequestAction) -> Action {
        Action::PullRequest(action)
    }

    fn sample() -> Vec<Pr> {
        vec![test_pr(1, "A", "widgets", "open", "2024-05-01T10:00:00Z")]
    }

    #[test]
    fn test_loaded_for_latest_ticket_is_accepted() {
        let cred = Credential::new("a");
        let state = reduce(
            PullRequestState::default(),
            &pr_action(PullRequestAction::LoadStart(ticket(1, "a"))),
            &cred,
            0,
        );
        assert_eq!(state.loading_state, LoadingState::Loading);

        let state = reduce(
            state,
            &pr_action(PullRequestAction::Loaded {
                ticket: ticket(1, "a"),
                prs: sample(),
            }),
            &cred,
            0,
        );
        assert_eq!(state.loading_state, LoadingState::Loaded);
        assert_eq!(state.prs.len(), 1);
        assert!(state.pending_ticket.is_none());
        assert!(state.last_updated.is_some());
    }

    #[test]
    fn test_older_ticket_is_discarded() {
        let cred = Credential::new("a");
        let mut state = PullRequestState::default();
        for id in [1, 2] {
            state = reduce(
                state,
                &pr_action(PullRequestAction::LoadStart(ticket(id, "a"))),
                &cred,
                0,
            );
        }

        // The first request finishes last-but-one and must not win
        let state = reduce(
            state,
            &pr_action(PullRequestAction::Loaded {
                ticket: ticket(1, "a"),
                prs: sample(),
            }),
            &cred,
            0,
        );
        assert!(state.prs.is_empty());
        assert_eq!(state.loading_state, LoadingState::Loading);
    }

    #[test]
    fn test_result_for_replaced_credential_is_discarded() {
        let old = Credential::new("old");
        let state = reduce(
            PullRequestState::default(),
            &pr_action(PullRequestAction::LoadStart(ticket(1, "old"))),
            &old,
            0,
        );

        // User switches to an empty credential while the request is in flight
        let state = reduce(
            state,
            &Action::Credential(CredentialAction::Submit(Credential::default())),
            &old,
            0,
        );
        assert!(state.pending_ticket.is_none());
        assert_eq!(state.loading_state, LoadingState::Idle);

        let state = reduce(
            state,
            &pr_action(PullRequestAction::Loaded {
                ticket: ticket(1, "old"),
                prs: sample(),
            }),
            &Credential::default(),
            0,
        );
        assert!(state.prs.is_empty());
    }

    #[test]
    fn test_error_clears_list() {
        let cred = Credential::new("a");
        let mut state = PullRequestState {
            prs: sample(),
            ..Default::default()
        };
        state = reduce(
            state,
            &pr_action(PullRequestAction::LoadStart(ticket(3, "a"))),
            &cred,
            1,
        );
        state = reduce(
            state,
            &pr_action(PullRequestAction::LoadError {
                ticket: ticket(3, "a"),
                error: "401".to_string(),
            }),
            &cred,
            1,
        );
        assert!(state.prs.is_empty());
        assert_eq!(state.loading_state, LoadingState::Error("401".to_string()));
    }

    #[test]
    fn test_navigation_bounds() {
        let cred = Credential::default();
        let nav = |state, action| reduce(state, &pr_action(action), &cred, 3);

        let state = nav(PullRequestState::default(), PullRequestAction::NavigatePrevious);
        assert_eq!(state.selected, 0);
        let state = nav(state, PullRequestAction::NavigateToBottom);
        assert_eq!(state.selected, 2);
        let state = nav(state, PullRequestAction::NavigateNext);
        assert_eq!(state.selected, 2);
        let state = nav(state, PullRequestAction::NavigateToTop);
        assert_eq!(state.selected, 0);
    }
}
