//! View model for the PR table view
//!
//! Separates presentation logic from domain models and view rendering.
//! Pre-computes all display text, colors, and styles.

use crate::command_id::CommandId;
use crate::domain_models::{LoadingState, Pr};
use crate::state::AppState;
use gh_pr_recent_theme::Theme;
use ratatui::style::{Color, Style};

/// Message shown in place of the table when a fetch failed
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch PRs";
/// Message shown in place of the table while a fetch runs
pub const LOADING_MESSAGE: &str = "Loading...";

/// Header line above the table
#[derive(Debug, Clone)]
pub struct HeaderViewModel {
    /// Label/value pairs: token, search, status, location
    pub fields: Vec<(&'static str, String)>,
    /// Right-aligned loading summary, e.g. "Updated 14:02"
    pub status_text: String,
    pub status_color: Color,
}

/// What the table area shows
#[derive(Debug, Clone, PartialEq)]
pub enum PrTableContent {
    /// A message instead of rows
    Message { text: String, style: Style },
    /// An error line above the (empty) table
    Error { text: String, style: Style },
    Rows,
}

/// A single PR row
#[derive(Debug, Clone)]
pub struct PrRowViewModel {
    pub repository: String,
    pub number: String,
    pub status: String,
    pub title: String,
    pub updated: String,
    pub style: Style,
    pub status_color: Color,
}

/// View model for the whole PR table area
#[derive(Debug, Clone)]
pub struct PrTableViewModel {
    pub header: HeaderViewModel,
    /// Block title, e.g. " Recent pull requests (3 of 12) "
    pub title: String,
    pub content: PrTableContent,
    pub rows: Vec<PrRowViewModel>,
    pub selected_index: usize,
    /// Key hints for the bottom border: (keys, description)
    pub hints: Vec<(String, &'static str)>,
}

const HINT_COMMANDS: [CommandId; 9] = [
    CommandId::NavigateNext,
    CommandId::PrOpenInBrowser,
    CommandId::PrCopyLink,
    CommandId::PrCopyAllLinks,
    CommandId::SearchOpen,
    CommandId::StatusFilterOpen,
    CommandId::FilterClearAll,
    CommandId::CredentialOpen,
    CommandId::GlobalClose,
];

impl PrTableViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let theme = &state.theme;
        let visible = state.visible_prs();
        let prs = &state.pull_requests;

        let rows = visible
            .iter()
            .enumerate()
            .map(|(index, pr)| Self::build_row(pr, index, prs.selected, state, theme))
            .collect();

        let title = if state.filter.current.is_active() {
            format!(" Recent pull requests ({} of {}) ", visible.len(), prs.prs.len())
        } else {
            format!(" Recent pull requests ({}) ", prs.prs.len())
        };

        Self {
            header: Self::build_header(state),
            title,
            content: Self::build_content(state, visible.is_empty()),
            rows,
            selected_index: prs.selected,
            hints: HINT_COMMANDS
                .iter()
                .filter_map(|cmd| {
                    state
                        .keymap
                        .compact_hint_for_command(*cmd)
                        .map(|keys| (keys, cmd.title()))
                })
                .collect(),
        }
    }

    fn build_header(state: &AppState) -> HeaderViewModel {
        let theme = &state.theme;
        let filter = &state.filter.current;

        let token = if state.credential.current.is_empty() {
            "none".to_string()
        } else {
            "set".to_string()
        };
        let search = if filter.query.is_empty() {
            "-".to_string()
        } else {
            format!("\"{}\"", filter.query)
        };
        let statuses = if filter.statuses.is_empty() {
            "all".to_string()
        } else {
            filter.statuses.iter().cloned().collect::<Vec<_>>().join(", ")
        };
        let location = format!("?{}", state.location.shareable().to_query_string());

        let (status_text, status_color) = match &state.pull_requests.loading_state {
            LoadingState::Idle => ("Idle".to_string(), theme.text_muted),
            LoadingState::Loading => ("Loading...".to_string(), theme.status_warning),
            LoadingState::Loaded => {
                let when = state
                    .pull_requests
                    .last_updated
                    .map(|t| t.format("%H:%M").to_string())
                    .unwrap_or_default();
                (format!("Updated {} [Ctrl+R to refresh]", when), theme.status_success)
            }
            LoadingState::Error(_) => ("Error".to_string(), theme.status_error),
        };

        HeaderViewModel {
            fields: vec![
                ("token", token),
                ("search", search),
                ("status", statuses),
                ("location", location),
            ],
            status_text,
            status_color,
        }
    }

    fn build_content(state: &AppState, nothing_visible: bool) -> PrTableContent {
        let theme = &state.theme;
        match &state.pull_requests.loading_state {
            LoadingState::Loading => PrTableContent::Message {
                text: LOADING_MESSAGE.to_string(),
                style: theme.warning(),
            },
            LoadingState::Error(_) => PrTableContent::Error {
                text: FETCH_FAILED_MESSAGE.to_string(),
                style: theme.error(),
            },
            LoadingState::Idle if state.credential.current.is_empty() => PrTableContent::Message {
                text: "No token set. Press t to enter a GitHub token.".to_string(),
                style: theme.muted(),
            },
            _ if nothing_visible && state.filter.current.is_active() => PrTableContent::Message {
                text: "No pull requests match the filter. Press F to clear it.".to_string(),
                style: theme.muted(),
            },
            _ if nothing_visible => PrTableContent::Message {
                text: "No recently updated pull requests.".to_string(),
                style: theme.muted(),
            },
            _ => PrTableContent::Rows,
        }
    }

    fn build_row(
        pr: &Pr,
        index: usize,
        cursor: usize,
        state: &AppState,
        theme: &Theme,
    ) -> PrRowViewModel {
        let style = if index == cursor {
            theme.table_selected()
        } else if index % 2 == 0 {
            theme.table_row().bg(theme.table_row_bg_normal)
        } else {
            theme.table_row().bg(theme.table_row_bg_alt)
        };

        PrRowViewModel {
            repository: pr.repository_name().to_string(),
            number: format!("#{}", pr.number),
            status: pr.state.clone(),
            title: pr.title.clone(),
            updated: pr.display_updated_at(&state.app_config.date_format),
            style,
            status_color: theme.pr_state_color(&pr.state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::pull_request::test_pr;
    use crate::domain_models::Credential;

    fn state_with(prs: Vec<Pr>, loading_state: LoadingState) -> AppState {
        let mut state = AppState::default();
        state.credential.current = Credential::new("ghp_x");
        state.pull_requests.prs = prs;
        state.pull_requests.loading_state = loading_state;
        state
    }

    #[test]
    fn test_rows_sorted_with_repository_name() {
        let state = state_with(
            vec![
                test_pr(5, "Older", "widgets", "open", "2024-05-01T10:00:00Z"),
                test_pr(6, "Newer", "gadgets", "closed", "2024-05-02T10:00:00Z"),
            ],
            LoadingState::Loaded,
        );
        let vm = PrTableViewModel::from_state(&state);

        assert_eq!(vm.content, PrTableContent::Rows);
        let cells: Vec<(&str, &str, &str)> = vm
            .rows
            .iter()
            .map(|r| (r.repository.as_str(), r.number.as_str(), r.status.as_str()))
            .collect();
        assert_eq!(cells, vec![("gadgets", "#6", "closed"), ("widgets", "#5", "open")]);
    }

    #[test]
    fn test_loading_message() {
        let vm = PrTableViewModel::from_state(&state_with(vec![], LoadingState::Loading));
        assert!(matches!(vm.content, PrTableContent::Message { ref text, .. } if text == "Loading..."));
    }

    #[test]
    fn test_error_message() {
        let vm = PrTableViewModel::from_state(&state_with(
            vec![],
            LoadingState::Error("401 Bad credentials".to_string()),
        ));
        assert!(matches!(
            vm.content,
            PrTableContent::Error { ref text, .. } if text == FETCH_FAILED_MESSAGE
        ));
        assert!(vm.rows.is_empty());
    }

    #[test]
    fn test_header_hides_token_value() {
        let mut state = state_with(vec![], LoadingState::Idle);
        state.location = crate::domain_models::Location::parse("token=ghp_x&status=open");
        let vm = PrTableViewModel::from_state(&state);

        let location = vm
            .header
            .fields
            .iter()
            .find(|(label, _)| *label == "location")
            .map(|(_, value)| value.as_str());
        assert_eq!(location, Some("?status=open"));
        assert!(vm.header.fields.iter().all(|(_, v)| !v.contains("ghp_x")));
    }

    #[test]
    fn test_title_counts_filtered_rows() {
        let mut state = state_with(
            vec![
                test_pr(1, "A", "r", "open", "2024-05-01T10:00:00Z"),
                test_pr(2, "B", "r", "closed", "2024-05-01T10:00:00Z"),
            ],
            LoadingState::Loaded,
        );
        state.filter.current.toggle_status("open");
        let vm = PrTableViewModel::from_state(&state);
        assert_eq!(vm.title, " Recent pull requests (1 of 2) ");
    }

    #[test]
    fn test_hints_come_from_keymap() {
        let vm = PrTableViewModel::from_state(&AppState::default());
        assert!(vm
            .hints
            .iter()
            .any(|(keys, desc)| keys == "j/↓" && *desc == "Down"));
    }
}
