//! Status filter popup
//!
//! Checklist of the known status labels; toggling rewrites the filter and
//! the view location.

use crate::actions::{Action, ContextAction, FilterAction, GlobalAction, NavigationAction};
use crate::capabilities::PanelCapabilities;
use crate::state::AppState;
use crate::view_models::StatusFilterViewModel;
use crate::views::{centered_rect, hint_line, render_dim_overlay, View, ViewId};
use ratatui::{
    layout::{Margin, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

#[derive(Debug, Clone)]
pub struct StatusFilterView;

impl StatusFilterView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StatusFilterView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for StatusFilterView {
    fn view_id(&self) -> ViewId {
        ViewId::StatusFilter
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        let theme = &state.theme;
        let vm = StatusFilterViewModel::from_state(state);
        render_dim_overlay(area, f);

        // Borders + margins take 4 rows
        let height = vm.items.len().max(1) as u16 + 4;
        let popup = centered_rect(area, 48, height);
        f.render_widget(Clear, popup);
        f.render_widget(Block::default().style(theme.panel_background()), popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Filter by status ")
            .title_style(theme.panel_title())
            .title_bottom(hint_line(
                &[("Space", "toggle"), ("c", "clear"), ("Esc", "close")],
                theme,
            ))
            .border_style(theme.panel_border())
            .style(theme.panel_background());

        let inner = block.inner(popup).inner(Margin::new(1, 1));
        f.render_widget(block, popup);

        if let Some(hint) = vm.empty_hint {
            f.render_widget(
                Paragraph::new(Line::from(Span::styled(hint, theme.muted()))),
                inner,
            );
            return;
        }

        let lines: Vec<Line> = vm
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let pointer = if index == vm.cursor { ">" } else { " " };
                let mark = if item.checked { "[x]" } else { "[ ]" };
                Line::from(Span::styled(
                    format!("{} {} {} ({})", pointer, mark, item.label, item.count),
                    item.style,
                ))
            })
            .collect();
        f.render_widget(Paragraph::new(lines), inner);
    }

    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        PanelCapabilities::VIM_NAVIGATION_BINDINGS | PanelCapabilities::ITEM_NAVIGATION
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_navigation(&self, nav: NavigationAction) -> Option<Action> {
        match nav {
            NavigationAction::Next => Some(Action::Filter(FilterAction::StatusCursorNext)),
            NavigationAction::Previous => {
                Some(Action::Filter(FilterAction::StatusCursorPrevious))
            }
            NavigationAction::ToTop | NavigationAction::ToBottom => None,
        }
    }

    fn translate_context_action(&self, action: ContextAction, state: &AppState) -> Option<Action> {
        match action {
            ContextAction::Confirm | ContextAction::ToggleSelect => state
                .available_statuses()
                .get(state.filter.status_cursor)
                .map(|label| Action::Filter(FilterAction::ToggleStatus(label.clone()))),
        }
    }

    fn accepts_action(&self, action: &Action) -> bool {
        matches!(
            action,
            Action::Filter(_)
                | Action::Navigate(_)
                | Action::ViewContext(_)
                | Action::Global(GlobalAction::Close | GlobalAction::Quit)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::pull_request::test_pr;

    fn state_with_statuses() -> AppState {
        let mut state = AppState::default();
        state.pull_requests.prs = vec![
            test_pr(1, "A", "r", "open", "2024-05-01T10:00:00Z"),
            test_pr(2, "B", "r", "closed", "2024-05-02T10:00:00Z"),
        ];
        state
    }

    #[test]
    fn test_toggle_uses_label_under_cursor() {
        let mut state = state_with_statuses();
        state.filter.status_cursor = 1;

        let action = StatusFilterView::new()
            .translate_context_action(ContextAction::ToggleSelect, &state);
        match action {
            Some(Action::Filter(FilterAction::ToggleStatus(label))) => assert_eq!(label, "open"),
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn test_render_points_at_cursor_row() {
        use ratatui::{backend::TestBackend, Terminal};

        let mut state = state_with_statuses();
        state.filter.current.toggle_status("open");
        state.filter.status_cursor = 1;
        state.view_stack.push(Box::new(StatusFilterView::new()));

        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal
            .draw(|f| crate::views::render(&state, f.area(), f))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let lines: Vec<String> = (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect()
            })
            .collect();
        assert!(lines.iter().any(|l| l.contains("> [x] open (1)")));
        assert!(lines.iter().any(|l| l.contains("  [ ] closed (1)")));
    }

    #[test]
    fn test_toggle_without_statuses_is_none() {
        let state = AppState::default();
        assert!(StatusFilterView::new()
            .translate_context_action(ContextAction::Confirm, &state)
            .is_none());
    }

    #[test]
    fn test_navigation_moves_cursor() {
        let view = StatusFilterView::new();
        assert!(matches!(
            view.translate_navigation(NavigationAction::Next),
            Some(Action::Filter(FilterAction::StatusCursorNext))
        ));
        assert!(view.translate_navigation(NavigationAction::ToBottom).is_none());
    }
}
