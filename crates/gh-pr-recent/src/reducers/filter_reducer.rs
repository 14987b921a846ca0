//! Filter Reducer
//!
//! Search text, status selection and the status popup cursor. Changes to the
//! status selection are mirrored into the view location by [`sync_location`].

use crate::actions::FilterAction;
use crate::domain_models::pr_filter::STATUS_PARAM;
use crate::domain_models::{Location, PrFilter};
use crate::state::FilterState;

/// `status_count` is the number of labels listed in the status popup
pub fn reduce(mut state: FilterState, action: &FilterAction, status_count: usize) -> FilterState {
    let filter = &mut state.current;
    match action {
        FilterAction::SearchChar(c) => filter.query.push(*c),
        FilterAction::SearchBackspace => {
            filter.query.pop();
        }
        FilterAction::SearchClear => filter.query.clear(),
        FilterAction::ToggleStatus(label) => filter.toggle_status(label),
        FilterAction::SetStatuses(labels) => {
            filter.statuses = labels.iter().cloned().collect();
        }
        FilterAction::ClearStatuses => filter.statuses.clear(),
        FilterAction::ClearAll => filter.clear(),
        FilterAction::StatusCursorNext => {
            if state.status_cursor + 1 < status_count {
                state.status_cursor += 1;
            }
        }
        FilterAction::StatusCursorPrevious => {
            state.status_cursor = state.status_cursor.saturating_sub(1);
        }
    }
    state
}

/// Rewrite the location's status parameters from the filter
pub fn sync_location(location: &mut Location, filter: &PrFilter) {
    location.set_all(STATUS_PARAM, filter.statuses.iter().cloned());
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn apply(state: FilterState, actions: &[FilterAction]) -> FilterState {
        actions
            .iter()
            .fold(state, |state, action| reduce(state, action, 3))
    }

    #[test]
    fn test_search_editing() {
        let state = apply(
            FilterState::default(),
            &[
                FilterAction::SearchChar('f'),
                FilterAction::SearchChar('i'),
                FilterAction::SearchChar('x'),
                FilterAction::SearchBackspace,
            ],
        );
        assert_eq!(state.current.query, "fi");

        let state = apply(state, &[FilterAction::SearchClear]);
        assert_eq!(state.current.query, "");
    }

    #[test]
    fn test_toggle_twice_restores() {
        let state = apply(
            FilterState::default(),
            &[FilterAction::ToggleStatus("open".to_string())],
        );
        let before = state.current.statuses.clone();
        let state = apply(
            state,
            &[
                FilterAction::ToggleStatus("closed".to_string()),
                FilterAction::ToggleStatus("closed".to_string()),
            ],
        );
        assert_eq!(state.current.statuses, before);
    }

    #[test]
    fn test_clear_statuses_keeps_query() {
        let state = apply(
            FilterState::default(),
            &[
                FilterAction::SearchChar('a'),
                FilterAction::ToggleStatus("open".to_string()),
                FilterAction::ClearStatuses,
            ],
        );
        assert!(state.current.statuses.is_empty());
        assert_eq!(state.current.query, "a");
    }

    #[test]
    fn test_cursor_stays_in_range() {
        let state = apply(
            FilterState::default(),
            &[
                FilterAction::StatusCursorPrevious,
                FilterAction::StatusCursorNext,
                FilterAction::StatusCursorNext,
                FilterAction::StatusCursorNext,
            ],
        );
        assert_eq!(state.status_cursor, 2);
    }

    #[test]
    fn test_sync_location_rewrites_status_params() {
        let mut location = Location::parse("token=abc&status=old");
        let mut filter = PrFilter::default();
        filter.toggle_status("open");
        filter.toggle_status("closed");

        sync_location(&mut location, &filter);
        assert_eq!(
            location.to_query_string(),
            "token=abc&status=closed&status=open"
        );

        filter.clear();
        sync_location(&mut location, &filter);
        assert_eq!(location.get_all("status"), Vec::<String>::new());
    }
}
