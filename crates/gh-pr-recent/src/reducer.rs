use crate::actions::{Action, GlobalAction};
use crate::reducers::{
    credential_reducer, filter_reducer, pull_request_reducer, status_bar_reducer,
};
use crate::state::AppState;
use crate::views::ViewId;

/// Reducer - pure function that produces new state from current state + action
///
/// Root reducer orchestrating the sub-reducers.
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    if let Action::Global(global) = action {
        reduce_global(&mut state, global);
        return state;
    }

    // Uses the credential as it was before this action
    let visible_len = state.visible_prs().len();
    state.pull_requests = pull_request_reducer::reduce(
        state.pull_requests,
        action,
        &state.credential.current,
        visible_len,
    );

    match action {
        Action::Credential(credential_action) => {
            state.credential = credential_reducer::reduce(state.credential, credential_action);
        }
        Action::Filter(filter_action) => {
            let previous_statuses = state.filter.current.statuses.clone();
            let status_count = state.available_statuses().len();
            state.filter = filter_reducer::reduce(state.filter, filter_action, status_count);

            if state.filter.current.statuses != previous_statuses {
                filter_reducer::sync_location(&mut state.location, &state.filter.current);
                log::debug!("Location is now '{}'", state.location.shareable().to_query_string());
            }
        }
        Action::StatusBar(status_action) => {
            state.status_bar = status_bar_reducer::reduce(state.status_bar, status_action);
        }
        _ => {}
    }

    clamp_cursors(&mut state);
    state
}

fn reduce_global(state: &mut AppState, action: &GlobalAction) {
    match action {
        GlobalAction::Quit => state.running = false,
        GlobalAction::Close => {
            if state.view_stack.len() > 1 {
                let popped = state.view_stack.pop();
                log::debug!("Closed view: {:?}", popped.map(|v| v.view_id()));
            } else {
                log::debug!("Closing the last view, quitting");
                state.running = false;
            }
        }
        GlobalAction::PushView(view) => {
            if state.active_view().map(|v| v.view_id()) == Some(view.view_id()) {
                log::debug!("{:?} is already open", view.view_id());
                return;
            }
            match view.view_id() {
                ViewId::Credential => state.credential.input.clear(),
                ViewId::StatusFilter => state.filter.status_cursor = 0,
                ViewId::PullRequests | ViewId::Search => {}
            }
            log::debug!("Pushing view onto stack: {:?}", view.view_id());
            state.view_stack.push(view.clone());
        }
        GlobalAction::KeyPressed(_) => {}
    }
}

/// Keep cursors within the rows/labels currently shown
fn clamp_cursors(state: &mut AppState) {
    let visible_len = state.visible_prs().len();
    state.pull_requests.selected = state
        .pull_requests
        .selected
        .min(visible_len.saturating_sub(1));

    let status_count = state.available_statuses().len();
    state.filter.status_cursor = state.filter.status_cursor.min(status_count.saturating_sub(1));
}
