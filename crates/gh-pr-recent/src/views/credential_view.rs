//! Credential popup
//!
//! Masked input for a GitHub personal access token.

use crate::actions::{Action, CredentialAction, GlobalAction, TextInputAction};
use crate::capabilities::PanelCapabilities;
use crate::domain_models::credential::mask;
use crate::state::AppState;
use crate::views::{centered_rect, hint_line, render_dim_overlay, View, ViewId};
use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

#[derive(Debug, Clone)]
pub struct CredentialView;

impl CredentialView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CredentialView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for CredentialView {
    fn view_id(&self) -> ViewId {
        ViewId::Credential
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        let theme = &state.theme;
        render_dim_overlay(area, f);

        let popup = centered_rect(area, 64, 8);
        f.render_widget(Clear, popup);
        f.render_widget(Block::default().style(theme.panel_background()), popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" GitHub token ")
            .title_style(theme.panel_title())
            .title_bottom(hint_line(
                &[("Enter", "submit"), ("Esc", "cancel"), ("Ctrl+U", "clear")],
                theme,
            ))
            .border_style(theme.panel_border())
            .style(theme.panel_background());

        let inner = block.inner(popup).inner(Margin::new(2, 1));
        f.render_widget(block, popup);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Help text
                Constraint::Length(1), // Input
                Constraint::Min(0),
            ])
            .split(inner);

        let current = if state.credential.current.is_empty() {
            "No token set"
        } else {
            "A token is set; submitting replaces it"
        };
        let help = vec![
            Line::from(Span::styled(
                "Paste a personal access token with repo read access.",
                theme.text(),
            )),
            Line::from(Span::styled(current, theme.muted())),
        ];
        f.render_widget(Paragraph::new(help), chunks[0]);

        let input = Line::from(vec![
            Span::styled("> ", theme.key_hint()),
            Span::styled(mask(&state.credential.input), theme.text()),
            Span::styled("█", Style::default().fg(theme.accent_primary)),
        ]);
        f.render_widget(Paragraph::new(input), chunks[1]);
    }

    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        PanelCapabilities::TEXT_INPUT
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_text_input(&self, input: TextInputAction) -> Option<Action> {
        let action = match input {
            TextInputAction::Char(c) => CredentialAction::InputChar(c),
            TextInputAction::Backspace => CredentialAction::InputBackspace,
            TextInputAction::ClearLine => CredentialAction::InputClear,
            TextInputAction::Escape => CredentialAction::Cancel,
            TextInputAction::Confirm => CredentialAction::SubmitInput,
        };
        Some(Action::Credential(action))
    }

    fn accepts_action(&self, action: &Action) -> bool {
        matches!(
            action,
            Action::TextInput(_)
                | Action::Credential(_)
                | Action::Global(GlobalAction::Close | GlobalAction::Quit)
        )
    }
}
