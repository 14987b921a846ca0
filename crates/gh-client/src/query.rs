//! Search query construction
//!
//! The query asks GitHub for pull requests involving the authenticated user
//! (author, assignee, mentioned, commenter or reviewer) that were updated
//! after a cut-off timestamp.

use anyhow::Context;
use chrono::{DateTime, Duration, SecondsFormat, Utc};

/// Default lookback window in days
pub const DEFAULT_LOOKBACK_DAYS: i64 = 7;

/// Compute the start of the lookback window
///
/// Evaluated at call time, so every fetch uses a fresh cut-off. Fails when
/// the window reaches outside the representable date range.
pub fn lookback_start(now: DateTime<Utc>, days: i64) -> anyhow::Result<DateTime<Utc>> {
    Duration::try_days(days)
        .and_then(|window| now.checked_sub_signed(window))
        .with_context(|| format!("Lookback window of {} days is out of range", days))
}

/// Build the search query for pull requests involving the current user
///
/// The timestamp uses millisecond precision with a `Z` suffix
/// (e.g., `2024-05-01T12:00:00.000Z`).
pub fn recent_involvement_query(since: DateTime<Utc>) -> String {
    format!(
        "involves:@me is:pr updated:>{}",
        since.to_rfc3339_opts(SecondsFormat::Millis, true)
    )
}
