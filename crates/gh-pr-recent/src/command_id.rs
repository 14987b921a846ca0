//! Command identifiers
//!
//! Every command a key can trigger, as a type-safe enum.

use crate::actions::{
    Action, ContextAction, FilterAction, GlobalAction, NavigationAction, PullRequestAction,
};
use crate::views::{CredentialView, SearchView, StatusFilterView};
use serde::{Deserialize, Serialize};

/// Unique identifier for each command in the application.
///
/// Serialized as snake_case (e.g., `PrCopyLink` -> `"pr_copy_link"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandId {
    // === Navigation ===
    NavigateNext,
    NavigatePrevious,
    NavigateToTop,
    NavigateToBottom,

    // === Context ===
    /// Primary action on the focused item (Enter)
    Confirm,
    /// Toggle the focused item (Space)
    ToggleSelect,

    // === PR Operations ===
    PrOpenInBrowser,
    PrCopyLink,
    PrCopyAllLinks,
    PrCopyShareLink,
    PrRefresh,

    // === Filter & Search ===
    SearchOpen,
    StatusFilterOpen,
    StatusFilterClear,
    FilterClearAll,

    // === Credential ===
    CredentialOpen,

    // === General ===
    GlobalClose,
    GlobalQuit,
}

impl CommandId {
    /// Convert this command ID to an Action
    pub fn to_action(self) -> Action {
        match self {
            Self::NavigateNext => Action::Navigate(NavigationAction::Next),
            Self::NavigatePrevious => Action::Navigate(NavigationAction::Previous),
            Self::NavigateToTop => Action::Navigate(NavigationAction::ToTop),
            Self::NavigateToBottom => Action::Navigate(NavigationAction::ToBottom),

            Self::Confirm => Action::ViewContext(ContextAction::Confirm),
            Self::ToggleSelect => Action::ViewContext(ContextAction::ToggleSelect),

            Self::PrOpenInBrowser => Action::PullRequest(PullRequestAction::OpenInBrowser),
            Self::PrCopyLink => Action::PullRequest(PullRequestAction::CopyLink),
            Self::PrCopyAllLinks => Action::PullRequest(PullRequestAction::CopyAllLinks),
            Self::PrCopyShareLink => Action::PullRequest(PullRequestAction::CopyShareLink),
            Self::PrRefresh => Action::PullRequest(PullRequestAction::Refresh),

            Self::SearchOpen => Action::Global(GlobalAction::PushView(Box::new(SearchView::new()))),
            Self::StatusFilterOpen => {
                Action::Global(GlobalAction::PushView(Box::new(StatusFilterView::new())))
            }
            Self::StatusFilterClear => Action::Filter(FilterAction::ClearStatuses),
            Self::FilterClearAll => Action::Filter(FilterAction::ClearAll),

            Self::CredentialOpen => {
                Action::Global(GlobalAction::PushView(Box::new(CredentialView::new())))
            }

            Self::GlobalClose => Action::Global(GlobalAction::Close),
            Self::GlobalQuit => Action::Global(GlobalAction::Quit),
        }
    }

    /// Short description for key hints
    pub fn title(&self) -> &'static str {
        match self {
            Self::NavigateNext => "Down",
            Self::NavigatePrevious => "Up",
            Self::NavigateToTop => "Top",
            Self::NavigateToBottom => "Bottom",
            Self::Confirm => "Open",
            Self::ToggleSelect => "Toggle",
            Self::PrOpenInBrowser => "Open",
            Self::PrCopyLink => "Copy link",
            Self::PrCopyAllLinks => "Copy all",
            Self::PrCopyShareLink => "Share",
            Self::PrRefresh => "Refresh",
            Self::SearchOpen => "Search",
            Self::StatusFilterOpen => "Status",
            Self::StatusFilterClear => "Clear",
            Self::FilterClearAll => "Clear filters",
            Self::CredentialOpen => "Token",
            Self::GlobalClose => "Close",
            Self::GlobalQuit => "Quit",
        }
    }
}
