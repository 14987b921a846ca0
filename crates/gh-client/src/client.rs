//! GitHub client trait
//!
//! This module defines the core `GitHubClient` trait that all client
//! implementations must satisfy.

use crate::types::PullRequest;
use async_trait::async_trait;

/// GitHub API client trait
///
/// Defines the interface for interacting with the GitHub API.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across
/// async tasks and threads.
///
/// # Example
///
/// ```rust,ignore
/// use gh_client::{GitHubClient, PullRequest};
///
/// async fn recent(client: &dyn GitHubClient) -> anyhow::Result<Vec<PullRequest>> {
///     client.search_pull_requests("involves:@me is:pr").await
/// }
/// ```
#[async_trait]
pub trait GitHubClient: Send + Sync {
    /// Search issues and pull requests
    ///
    /// Issues a single request against the search endpoint and returns the
    /// `items` of the first result page. Pages are never merged.
    ///
    /// # Arguments
    ///
    /// * `query` - GitHub search query (e.g., `involves:@me is:pr`)
    ///
    /// # Returns
    ///
    /// The matching items, or an error if the request failed, GitHub
    /// answered with a non-success status, or the body could not be decoded.
    async fn search_pull_requests(&self, query: &str) -> anyhow::Result<Vec<PullRequest>>;
}
