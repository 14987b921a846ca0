//! Status Filter View Model

use crate::state::AppState;
use ratatui::style::Style;

#[derive(Debug, Clone, PartialEq)]
pub struct StatusFilterItem {
    pub label: String,
    pub checked: bool,
    /// Number of loaded PRs with this status
    pub count: usize,
    pub style: Style,
}

#[derive(Debug, Clone)]
pub struct StatusFilterViewModel {
    pub items: Vec<StatusFilterItem>,
    pub cursor: usize,
    /// Shown instead of the list when there is nothing to choose from
    pub empty_hint: Option<&'static str>,
}

impl StatusFilterViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let theme = &state.theme;
        let statuses = &state.filter.current.statuses;

        let items: Vec<StatusFilterItem> = state
            .available_statuses()
            .into_iter()
            .enumerate()
            .map(|(index, label)| {
                let count = state
                    .pull_requests
                    .prs
                    .iter()
                    .filter(|pr| pr.state == label)
                    .count();
                let style = if index == state.filter.status_cursor {
                    theme.table_selected()
                } else {
                    Style::default().fg(theme.pr_state_color(&label))
                };
                StatusFilterItem {
                    checked: statuses.contains(&label),
                    label,
                    count,
                    style,
                }
            })
            .collect();

        let empty_hint = items
            .is_empty()
            .then_some("No statuses yet, load some pull requests first");

        Self {
            items,
            cursor: state.filter.status_cursor,
            empty_hint,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::pull_request::test_pr;

    #[test]
    fn test_items_reflect_selection_and_counts() {
        let mut state = AppState::default();
        state.pull_requests.prs = vec![
            test_pr(1, "A", "r", "open", "2024-05-01T10:00:00Z"),
            test_pr(2, "B", "r", "open", "2024-05-01T10:00:00Z"),
            test_pr(3, "C", "r", "closed", "2024-05-01T10:00:00Z"),
        ];
        state.filter.current.toggle_status("closed");

        let vm = StatusFilterViewModel::from_state(&state);
        let summary: Vec<(&str, bool, usize)> = vm
            .items
            .iter()
            .map(|i| (i.label.as_str(), i.checked, i.count))
            .collect();
        assert_eq!(summary, vec![("closed", true, 1), ("open", false, 2)]);
        assert!(vm.empty_hint.is_none());
    }

    #[test]
    fn test_empty_hint() {
        let vm = StatusFilterViewModel::from_state(&AppState::default());
        assert!(vm.items.is_empty());
        assert!(vm.empty_hint.is_some());
    }
}
