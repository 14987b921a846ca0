//! Octocrab-based GitHub API client
//!
//! Direct implementation of the `GitHubClient` trait using the octocrab library.
//! This client makes real API calls without any caching.

use crate::client::GitHubClient;
use crate::types::{PullRequest, SearchResults};
use anyhow::Context;
use async_trait::async_trait;
use log::debug;
use octocrab::Octocrab;
use serde::Serialize;
use std::sync::Arc;

/// Route of the issue/PR search endpoint
const SEARCH_ISSUES_ROUTE: &str = "/search/issues";

/// Query parameters of the search endpoint
#[derive(Debug, Serialize)]
struct SearchParams<'a> {
    q: &'a str,
}

/// Direct GitHub API client using octocrab
#[derive(Debug, Clone)]
pub struct OctocrabClient {
    octocrab: Arc<Octocrab>,
}

impl OctocrabClient {
    /// Create a new client with the given octocrab instance
    pub fn new(octocrab: Arc<Octocrab>) -> Self {
        Self { octocrab }
    }

    /// Create a client authenticated with a personal access token
    ///
    /// `api_base_url` overrides the API root (GitHub Enterprise, tests);
    /// `None` targets api.github.com.
    ///
    /// Must be called from within a tokio runtime.
    pub fn from_token(token: &str, api_base_url: Option<&str>) -> anyhow::Result<Self> {
        let mut builder = Octocrab::builder().personal_token(token.to_string());

        if let Some(uri) = api_base_url {
            debug!("Using API base URI {}", uri);
            builder = builder.base_uri(uri).context("Failed to set base URI")?;
        }

        let octocrab = builder.build().context("Failed to build GitHub client")?;
        Ok(Self::new(Arc::new(octocrab)))
    }
}

#[async_trait]
impl GitHubClient for OctocrabClient {
    async fn search_pull_requests(&self, query: &str) -> anyhow::Result<Vec<PullRequest>> {
        debug!("Searching pull requests: {}", query);

        // Raw GET so that `state` stays an opaque string instead of octocrab's IssueState
        let results: SearchResults<PullRequest> = self
            .octocrab
            .get(SEARCH_ISSUES_ROUTE, Some(&SearchParams { q: query }))
            .await
            .context("Search request failed")?;

        if results.incomplete_results {
            log::warn!("GitHub reported incomplete search results");
        }

        debug!(
            "Search returned {} items ({} total matches)",
            results.items.len(),
            results.total_count
        );
        Ok(results.items)
    }
}
