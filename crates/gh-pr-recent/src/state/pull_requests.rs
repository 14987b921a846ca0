//! Pull Request State

use crate::domain_models::{FetchTicket, LoadingState, Pr};
use chrono::{DateTime, Local};

/// Loaded pull requests and the fetch lifecycle
#[derive(Debug, Clone, Default)]
pub struct PullRequestState {
    /// PRs in response order; filtering and sorting happen on read
    pub prs: Vec<Pr>,
    pub loading_state: LoadingState,
    /// Most recently started fetch, if it has not completed yet
    pub pending_ticket: Option<FetchTicket>,
    /// Cursor position within the visible (filtered, sorted) rows
    pub selected: usize,
    /// When the current result list was received
    pub last_updated: Option<DateTime<Local>>,
}
