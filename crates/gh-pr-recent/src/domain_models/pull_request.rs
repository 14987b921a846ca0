//! Pull Request model
//!
//! Domain model for the pull requests returned by the search.

use super::credential::Credential;
use chrono::{DateTime, Local, Utc};
use std::fmt::Write;

/// A pull request the user recently interacted with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pr {
    /// Unique id assigned by GitHub
    pub id: u64,
    /// PR number within its repository
    pub number: u64,
    pub title: String,
    /// Link to the PR page
    pub html_url: String,
    /// API URL of the owning repository
    pub repository_url: String,
    /// Status label as reported by the API ("open", "closed", ...)
    pub state: String,
    /// Last update time, ISO 8601 as received
    pub updated_at: String,
}

impl Pr {
    /// Parsed update time, `None` when the timestamp is not valid RFC 3339
    pub fn updated_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.updated_at)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Short repository name (last path segment of the repository URL)
    pub fn repository_name(&self) -> &str {
        self.repository_url
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or(&self.repository_url)
    }

    /// Update time in local time using `format`
    ///
    /// Falls back to the raw value when the timestamp is unparseable or
    /// `format` is not a valid strftime pattern.
    pub fn display_updated_at(&self, format: &str) -> String {
        let Some(utc) = self.updated_at_utc() else {
            return self.updated_at.clone();
        };
        let mut rendered = String::new();
        match write!(rendered, "{}", utc.with_timezone(&Local).format(format)) {
            Ok(()) => rendered,
            Err(_) => {
                log::warn!("Invalid date format '{}'", format);
                self.updated_at.clone()
            }
        }
    }
}

impl From<gh_client::PullRequest> for Pr {
    fn from(pr: gh_client::PullRequest) -> Self {
        Self {
            id: pr.id,
            number: pr.number,
            title: pr.title,
            html_url: pr.html_url,
            repository_url: pr.repository_url,
            state: pr.state,
            updated_at: pr.updated_at,
        }
    }
}

/// Loading state of the result list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadingState {
    /// Nothing requested yet (no credential)
    #[default]
    Idle,
    Loading,
    Loaded,
    /// The last request failed; holds the detailed error
    Error(String),
}

/// Identifies one fetch so that late responses can be recognized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    /// Monotonic request number
    pub id: u64,
    /// Credential the request was issued with
    pub credential: Credential,
}

#[cfg(test)]
pub(crate) fn test_pr(id: u64, title: &str, repo: &str, state: &str, updated_at: &str) -> Pr {
    Pr {
        id,
        number: id,
        title: title.to_string(),
        html_url: format!("https://github.com/acme/{}/pull/{}", repo, id),
        repository_url: format!("https://api.github.com/repos/acme/{}", repo),
        state: state.to_string(),
        updated_at: updated_at.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_name_is_last_segment() {
        let pr = test_pr(1, "Fix", "widgets", "open", "2024-05-01T10:00:00Z");
        assert_eq!(pr.repository_name(), "widgets");
    }

    #[test]
    fn test_repository_name_ignores_trailing_slash() {
        let mut pr = test_pr(1, "Fix", "widgets", "open", "2024-05-01T10:00:00Z");
        pr.repository_url.push('/');
        assert_eq!(pr.repository_name(), "widgets");
    }

    #[test]
    fn test_updated_at_parsing() {
        let pr = test_pr(1, "Fix", "widgets", "open", "2024-05-01T10:00:00Z");
        assert!(pr.updated_at_utc().is_some());

        let broken = test_pr(2, "Fix", "widgets", "open", "yesterday");
        assert!(broken.updated_at_utc().is_none());
        assert_eq!(broken.display_updated_at("%Y"), "yesterday");
    }

    #[test]
    fn test_invalid_date_format_shows_raw_value() {
        let pr = test_pr(1, "t", "r", "open", "2024-05-01T10:00:00Z");
        assert_eq!(pr.display_updated_at("%Q"), "2024-05-01T10:00:00Z");
        assert_eq!(pr.display_updated_at("%Y"), "2024");
    }

    #[test]
    fn test_from_wire_type() {
        let wire = gh_client::PullRequest {
            id: 7,
            number: 42,
            title: "Add things".to_string(),
            html_url: "https://github.com/acme/widgets/pull/42".to_string(),
            repository_url: "https://api.github.com/repos/acme/widgets".to_string(),
            state: "merged-ish".to_string(),
            updated_at: "2024-05-01T10:00:00Z".to_string(),
        };
        let pr = Pr::from(wire);
        assert_eq!(pr.number, 42);
        assert_eq!(pr.state, "merged-ish");
    }
}
