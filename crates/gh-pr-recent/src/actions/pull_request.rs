//! Pull Request actions
//!
//! Table navigation, link side effects and the fetch lifecycle.

use crate::domain_models::{FetchTicket, Pr};

#[derive(Debug, Clone)]
pub enum PullRequestAction {
    /// Navigate to the next PR
    NavigateNext,
    /// Navigate to the previous PR
    NavigatePrevious,
    /// Navigate to the first PR
    NavigateToTop,
    /// Navigate to the last PR
    NavigateToBottom,

    /// Open the PR under the cursor in the browser
    OpenInBrowser,
    /// Copy the link of the PR under the cursor
    CopyLink,
    /// Copy the links of all visible PRs, newline separated
    CopyAllLinks,
    /// Copy the shareable view location
    CopyShareLink,

    /// Re-run the search for the current credential
    Refresh,

    /// A fetch was issued
    LoadStart(FetchTicket),
    /// A fetch succeeded
    Loaded { ticket: FetchTicket, prs: Vec<Pr> },
    /// A fetch failed
    LoadError { ticket: FetchTicket, error: String },
}
