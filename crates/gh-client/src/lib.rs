//! GitHub API client for recently touched pull requests
//!
//! This crate provides a trait-based GitHub API client. The application talks
//! to the trait; the octocrab-backed implementation does the actual HTTP work.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              GitHubClient trait                  │
//! │  - search_pull_requests()                        │
//! └─────────────────────────────────────────────────┘
//!                        │
//!                        ▼
//!              ┌─────────────────┐
//!              │ OctocrabClient  │
//!              │ (direct API)    │
//!              └─────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use gh_client::{lookback_start, recent_involvement_query, GitHubClient, OctocrabClient};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = OctocrabClient::from_token("token", None)?;
//! let since = lookback_start(chrono::Utc::now(), 7)?;
//! let prs = client
//!     .search_pull_requests(&recent_involvement_query(since))
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod octocrab_client;
pub mod query;
pub mod types;

pub use client::GitHubClient;
pub use octocrab_client::OctocrabClient;
pub use query::{lookback_start, recent_involvement_query, DEFAULT_LOOKBACK_DAYS};
pub use types::{PullRequest, SearchResults};
