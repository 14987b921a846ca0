use crate::actions::{Action, ContextAction, NavigationAction, TextInputAction};
use crate::capabilities::PanelCapabilities;
use crate::state::AppState;
use gh_pr_recent_theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Block,
    Frame,
};

pub mod credential_view;
pub mod pull_request_view;
pub mod search_view;
pub mod status_bar;
pub mod status_filter_view;

pub use credential_view::CredentialView;
pub use pull_request_view::PullRequestView;
pub use search_view::SearchView;
pub use status_filter_view::StatusFilterView;

/// View identifier - allows comparing which view is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewId {
    PullRequests,
    Search,
    Credential,
    StatusFilter,
}

/// View trait - the interface all views implement
///
/// Must stay object-safe: views live in the stack as `Box<dyn View>`, travel
/// between threads inside actions and are read through the shared state.
pub trait View: std::fmt::Debug + Send + Sync {
    fn view_id(&self) -> ViewId;

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame);

    /// Capabilities used for keyboard routing
    fn capabilities(&self, state: &AppState) -> PanelCapabilities;

    /// Clone into a Box (Clone itself requires Sized)
    fn clone_box(&self) -> Box<dyn View>;

    /// Translate generic navigation into this view's action
    fn translate_navigation(&self, _nav: NavigationAction) -> Option<Action> {
        None
    }

    /// Translate generic text input into this view's action
    fn translate_text_input(&self, _input: TextInputAction) -> Option<Action> {
        None
    }

    /// Translate a context action (Enter, Space) into this view's action
    fn translate_context_action(&self, _action: ContextAction, _state: &AppState) -> Option<Action> {
        None
    }

    /// Whether a keymap command's action applies while this view is active
    fn accepts_action(&self, action: &Action) -> bool;
}

impl Clone for Box<dyn View> {
    fn clone(&self) -> Box<dyn View> {
        self.clone_box()
    }
}

/// Render the whole UI, views bottom-up so floating views end up on top
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    for view in &state.view_stack {
        view.render(state, area, f);
    }
}

/// Dim everything below a popup
pub(crate) fn render_dim_overlay(area: Rect, f: &mut Frame) {
    let overlay = Block::default().style(
        Style::default()
            .bg(Color::Black)
            .add_modifier(Modifier::DIM),
    );
    f.render_widget(overlay, area);
}

/// Rect of `width` x `height` centered in `area`, shrunk to fit
pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Key hint line for a popup's bottom border: `Enter submit  Esc cancel`
pub(crate) fn hint_line<'a>(hints: &[(&'a str, &'a str)], theme: &Theme) -> Line<'a> {
    let mut spans = vec![Span::raw(" ")];
    for (i, (keys, description)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*keys, theme.key_hint()));
        spans.push(Span::styled(format!(" {}", description), theme.key_description()));
    }
    spans.push(Span::raw(" "));
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_rect(area, 50, 10), Rect::new(25, 15, 50, 10));
    }

    #[test]
    fn test_centered_rect_shrinks_to_area() {
        let area = Rect::new(2, 1, 30, 8);
        assert_eq!(centered_rect(area, 50, 10), area);
    }
}
