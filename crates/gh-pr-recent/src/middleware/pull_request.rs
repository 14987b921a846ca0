//! Pull Request Middleware
//!
//! Side effects on the PR table: copying links and opening PRs in the
//! browser. Clipboard failures are logged only.

use crate::actions::{Action, PullRequestAction, StatusBarAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use crate::utils::browser::open_url;
use crate::utils::clipboard::Clipboard;
use tokio::runtime::Handle;

const SOURCE: &str = "Clipboard";

pub struct PullRequestMiddleware {
    /// Runtime the browser is launched from
    runtime: Handle,
    clipboard: Box<dyn Clipboard>,
}

impl PullRequestMiddleware {
    pub fn new(runtime: Handle, clipboard: Box<dyn Clipboard>) -> Self {
        Self { runtime, clipboard }
    }

    fn copy(&mut self, text: &str, confirmation: &str, dispatcher: &Dispatcher) {
        match self.clipboard.copy(text) {
            Ok(()) => dispatcher.dispatch(Action::StatusBar(StatusBarAction::success(
                confirmation,
                SOURCE,
            ))),
            Err(e) => log::warn!("Failed to copy to clipboard: {:#}", e),
        }
    }
}

/// Links of the visible rows in display order, one per line
pub fn all_visible_links(state: &AppState) -> String {
    state
        .visible_prs()
        .iter()
        .map(|pr| pr.html_url.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Query string that reproduces the current view, without the credential
pub fn share_link(state: &AppState) -> String {
    format!("?{}", state.location.shareable().to_query_string())
}

impl Middleware for PullRequestMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::PullRequest(pr_action) = action else {
            return true;
        };

        match pr_action {
            PullRequestAction::OpenInBrowser => {
                if let Some(pr) = state.selected_pr() {
                    dispatcher.dispatch(Action::StatusBar(StatusBarAction::info(
                        format!("Opening #{} in browser", pr.number),
                        "Browser",
                    )));
                    self.runtime.spawn(open_url(pr.html_url.clone()));
                }
            }
            PullRequestAction::CopyLink => {
                if let Some(pr) = state.selected_pr() {
                    let url = pr.html_url.clone();
                    self.copy(&url, "PR link copied to clipboard!", dispatcher);
                }
            }
            PullRequestAction::CopyAllLinks => {
                let links = all_visible_links(state);
                self.copy(&links, "All PR links copied to clipboard!", dispatcher);
            }
            PullRequestAction::CopyShareLink => {
                let link = share_link(state);
                self.copy(&link, "Share link copied to clipboard!", dispatcher);
            }
            _ => return true,
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::pull_request::test_pr;
    use crate::domain_models::Location;
    use crate::middleware::test_support::{drain, recording_dispatcher};
    use pretty_assertions::assert_eq;
    use std::sync::{Arc, Mutex};

    /// Clipboard that remembers what was copied
    #[derive(Default, Clone)]
    struct RecordingClipboard {
        copied: Arc<Mutex<Vec<String>>>,
        fail: bool,
    }

    impl Clipboard for RecordingClipboard {
        fn copy(&mut self, text: &str) -> anyhow::Result<()> {
            if self.fail {
                anyhow::bail!("no clipboard");
            }
            self.copied.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    fn state_with_prs() -> AppState {
        let mut state = AppState::default();
        state.pull_requests.prs = vec![
            test_pr(1, "Older", "widgets", "open", "2024-05-01T10:00:00Z"),
            test_pr(2, "Newest", "gadgets", "closed", "2024-05-03T10:00:00Z"),
            test_pr(3, "Middle", "widgets", "open", "2024-05-02T10:00:00Z"),
        ];
        state
    }

    fn run(
        state: &AppState,
        clipboard: RecordingClipboard,
        action: PullRequestAction,
    ) -> Vec<Action> {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut middleware = PullRequestMiddleware::new(runtime.handle().clone(), Box::new(clipboard));
        let (dispatcher, rx) = recording_dispatcher();
        assert!(!middleware.handle(&Action::PullRequest(action), state, &dispatcher));
        drain(&rx)
    }

    fn status_message(actions: &[Action]) -> Option<String> {
        actions.iter().find_map(|a| match a {
            Action::StatusBar(StatusBarAction::Push { message, .. }) => Some(message.clone()),
            _ => None,
        })
    }

    #[test]
    fn test_copy_all_joins_visible_in_display_order() {
        let mut state = state_with_prs();
        state.filter.current.toggle_status("open");
        let clipboard = RecordingClipboard::default();

        let actions = run(&state, clipboard.clone(), PullRequestAction::CopyAllLinks);

        assert_eq!(
            clipboard.copied.lock().unwrap().clone(),
            vec!["https://github.com/acme/widgets/pull/3\nhttps://github.com/acme/widgets/pull/1"]
        );
        assert_eq!(
            status_message(&actions).as_deref(),
            Some("All PR links copied to clipboard!")
        );
    }

    #[test]
    fn test_copy_link_uses_cursor_row() {
        let mut state = state_with_prs();
        state.pull_requests.selected = 1;
        let clipboard = RecordingClipboard::default();

        let actions = run(&state, clipboard.clone(), PullRequestAction::CopyLink);

        assert_eq!(
            clipboard.copied.lock().unwrap().clone(),
            vec!["https://github.com/acme/widgets/pull/3"]
        );
        assert_eq!(
            status_message(&actions).as_deref(),
            Some("PR link copied to clipboard!")
        );
    }

    #[test]
    fn test_clipboard_failure_is_silent() {
        let state = state_with_prs();
        let clipboard = RecordingClipboard {
            fail: true,
            ..Default::default()
        };

        let actions = run(&state, clipboard, PullRequestAction::CopyAllLinks);
        assert_eq!(status_message(&actions), None);
    }

    #[test]
    fn test_share_link_omits_token() {
        let mut state = AppState::default();
        state.location = Location::parse("token=secret&status=open");
        assert_eq!(share_link(&state), "?status=open");
    }

    #[test]
    fn test_copy_link_without_rows_does_nothing() {
        let state = AppState::default();
        let clipboard = RecordingClipboard::default();

        let actions = run(&state, clipboard.clone(), PullRequestAction::CopyLink);
        assert!(actions.is_empty());
        assert!(clipboard.copied.lock().unwrap().is_empty());
    }
}
