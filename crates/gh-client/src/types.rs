//! GitHub API data transfer objects
//!
//! These types represent the data returned from the GitHub search API.
//! They are intentionally separate from application domain models
//! to keep this crate pure and reusable.

use serde::{Deserialize, Serialize};

/// A pull request item as returned by the issue search endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    /// Global item ID (unique across repositories)
    pub id: u64,

    /// PR number within its repository (e.g., 123)
    pub number: u64,

    /// PR title
    pub title: String,

    /// PR URL for opening in browser
    pub html_url: String,

    /// API URL of the owning repository
    pub repository_url: String,

    /// State label as reported by GitHub (e.g., "open", "closed")
    ///
    /// Kept as a plain string; the set of labels is defined by the API.
    pub state: String,

    /// Last update timestamp, ISO 8601
    pub updated_at: String,
}

/// Envelope of a search response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResults<T> {
    /// Total number of matches on the server (all pages)
    #[serde(default)]
    pub total_count: u64,

    /// Whether GitHub timed out while collecting results
    #[serde(default)]
    pub incomplete_results: bool,

    /// Items of the requested page
    pub items: Vec<T>,
}
