//! Search popup
//!
//! Edits the filter query live; the table underneath updates on every key.

use crate::actions::{Action, FilterAction, GlobalAction, TextInputAction};
use crate::capabilities::PanelCapabilities;
use crate::state::AppState;
use crate::views::{centered_rect, hint_line, View, ViewId};
use ratatui::{
    layout::{Margin, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

#[derive(Debug, Clone)]
pub struct SearchView;

impl SearchView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SearchView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for SearchView {
    fn view_id(&self) -> ViewId {
        ViewId::Search
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        let theme = &state.theme;
        let popup = centered_rect(area, 60, 5);

        f.render_widget(Clear, popup);
        f.render_widget(Block::default().style(theme.panel_background()), popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Search title or repository ")
            .title_style(theme.panel_title())
            .title_bottom(hint_line(
                &[("Enter", "done"), ("Esc", "close"), ("Ctrl+U", "clear")],
                theme,
            ))
            .border_style(theme.panel_border())
            .style(theme.panel_background());

        let inner = block.inner(popup).inner(Margin::new(1, 1));
        f.render_widget(block, popup);

        let line = Line::from(vec![
            Span::styled("/ ", theme.muted()),
            Span::styled(state.filter.current.query.clone(), theme.text()),
            Span::styled("█", Style::default().fg(theme.accent_primary)),
        ]);
        f.render_widget(Paragraph::new(line), inner);
    }

    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        PanelCapabilities::TEXT_INPUT
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_text_input(&self, input: TextInputAction) -> Option<Action> {
        let action = match input {
            TextInputAction::Char(c) => Action::Filter(FilterAction::SearchChar(c)),
            TextInputAction::Backspace => Action::Filter(FilterAction::SearchBackspace),
            TextInputAction::ClearLine => Action::Filter(FilterAction::SearchClear),
            TextInputAction::Escape | TextInputAction::Confirm => {
                Action::Global(GlobalAction::Close)
            }
        };
        Some(action)
    }

    fn accepts_action(&self, action: &Action) -> bool {
        matches!(
            action,
            Action::TextInput(_)
                | Action::Filter(_)
                | Action::Global(GlobalAction::Close | GlobalAction::Quit)
        )
    }
}
