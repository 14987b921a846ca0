//! Application State

use crate::domain_models::{available_statuses, visible_pull_requests, Location, Pr};
use crate::keymap::{default_keymap, Keymap};
use crate::views::{PullRequestView, View};
use gh_pr_config::AppConfig;
use gh_pr_recent_theme::Theme;

use super::{CredentialState, FilterState, PullRequestState, StatusBarState};

/// Application state
///
/// Written only by the reducer on the main thread; middleware read cloned
/// snapshots.
#[derive(Debug, Clone)]
pub struct AppState {
    pub running: bool,
    /// Stack of views - bottom view is the PR table, floating views on top
    pub view_stack: Vec<Box<dyn View>>,
    pub pull_requests: PullRequestState,
    pub filter: FilterState,
    pub credential: CredentialState,
    /// View location, kept in sync with the status selection
    pub location: Location,
    pub status_bar: StatusBarState,
    pub theme: Theme,
    pub keymap: Keymap,
    pub app_config: AppConfig,
}

impl AppState {
    pub fn new(location: Location, app_config: AppConfig) -> Self {
        Self {
            running: true,
            view_stack: vec![Box::new(PullRequestView::new())],
            pull_requests: PullRequestState::default(),
            filter: FilterState::default(),
            credential: CredentialState::default(),
            location,
            status_bar: StatusBarState::default(),
            theme: Theme::default(),
            keymap: default_keymap(),
            app_config,
        }
    }

    /// Top-most (active) view
    pub fn active_view(&self) -> Option<&dyn View> {
        self.view_stack.last().map(|v| v.as_ref())
    }

    /// Rows as displayed: filtered, newest first
    pub fn visible_prs(&self) -> Vec<&Pr> {
        visible_pull_requests(&self.pull_requests.prs, &self.filter.current)
    }

    /// PR under the cursor
    pub fn selected_pr(&self) -> Option<&Pr> {
        self.visible_prs()
            .get(self.pull_requests.selected)
            .copied()
    }

    /// Labels offered in the status filter popup
    pub fn available_statuses(&self) -> Vec<String> {
        available_statuses(&self.pull_requests.prs, &self.filter.current)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Location::default(), AppConfig::default())
    }
}
