//! PR Filter model
//!
//! Text search plus status selection, and the derived visible list.

use super::pull_request::Pr;
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Location parameter that carries the selected status labels
pub const STATUS_PARAM: &str = "status";

/// Filter applied to the loaded pull requests
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrFilter {
    /// Case-insensitive search text, matched against title and repository URL
    pub query: String,
    /// Selected status labels; empty means every status
    pub statuses: BTreeSet<String>,
}

impl PrFilter {
    /// Check whether a PR passes both the search text and the status selection
    pub fn matches(&self, pr: &Pr) -> bool {
        self.matches_query(pr) && self.matches_status(pr)
    }

    fn matches_query(&self, pr: &Pr) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        pr.title.to_lowercase().contains(&needle)
            || pr.repository_url.to_lowercase().contains(&needle)
    }

    fn matches_status(&self, pr: &Pr) -> bool {
        self.statuses.is_empty() || self.statuses.contains(&pr.state)
    }

    /// Add the label when absent, remove it when present
    pub fn toggle_status(&mut self, label: &str) {
        if !self.statuses.remove(label) {
            self.statuses.insert(label.to_string());
        }
    }

    /// Reset both the status selection and the search text
    pub fn clear(&mut self) {
        self.statuses.clear();
        self.query.clear();
    }

    pub fn is_active(&self) -> bool {
        !self.query.is_empty() || !self.statuses.is_empty()
    }
}

/// Filtered PRs, most recently updated first
///
/// The sort is stable: rows with equal timestamps keep their response order.
/// Rows whose timestamp cannot be parsed go last.
pub fn visible_pull_requests<'a>(prs: &'a [Pr], filter: &PrFilter) -> Vec<&'a Pr> {
    let mut visible: Vec<&Pr> = prs.iter().filter(|pr| filter.matches(pr)).collect();
    visible.sort_by(|a, b| newest_first(a, b));
    visible
}

fn newest_first(a: &Pr, b: &Pr) -> Ordering {
    match (a.updated_at_utc(), b.updated_at_utc()) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Status labels offered for selection
///
/// The union of labels present in the loaded data and labels already
/// selected, so a selection restored from the location stays visible before
/// any data has arrived.
pub fn available_statuses(prs: &[Pr], filter: &PrFilter) -> Vec<String> {
    let mut labels: BTreeSet<String> = prs.iter().map(|pr| pr.state.clone()).collect();
    labels.extend(filter.statuses.iter().cloned());
    labels.into_iter().collect()
}
