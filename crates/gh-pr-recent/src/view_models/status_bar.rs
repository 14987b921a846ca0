//! Status Bar View Model

use crate::state::{AppState, StatusKind};
use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone)]
pub struct StatusBarViewModel {
    pub emoji: &'static str,
    pub message: String,
    /// Timestamp formatted for display (e.g., "14:32:05"), empty for the welcome line
    pub timestamp: String,
    /// Where the message came from
    pub source: String,
    pub message_style: Style,
    pub bg_color: Color,
    /// Style for timestamp and source
    pub metadata_style: Style,
}

impl StatusBarViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let theme = &state.theme;
        let metadata_style = theme.muted();

        match state.status_bar.latest() {
            Some(msg) => {
                let fg = match msg.kind {
                    StatusKind::Running | StatusKind::Warning => theme.status_warning,
                    StatusKind::Success => theme.status_success,
                    StatusKind::Error => theme.status_error,
                    StatusKind::Info => theme.status_info,
                };
                Self {
                    emoji: msg.kind.emoji(),
                    message: msg.message.clone(),
                    timestamp: msg.timestamp.format("%H:%M:%S").to_string(),
                    source: msg.source.clone(),
                    message_style: Style::default().fg(fg).add_modifier(Modifier::BOLD),
                    bg_color: theme.bg_primary,
                    metadata_style,
                }
            }
            None => Self {
                emoji: "👋",
                message: "Pull requests you touched recently".to_string(),
                timestamp: String::new(),
                source: String::new(),
                message_style: theme.muted().add_modifier(Modifier::ITALIC),
                bg_color: theme.bg_primary,
                metadata_style,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StatusMessage;

    #[test]
    fn test_latest_message_shown() {
        let mut state = AppState::default();
        state.status_bar.push(StatusMessage::new(
            StatusKind::Error,
            "Failed to fetch PRs",
            "Fetch",
        ));
        let vm = StatusBarViewModel::from_state(&state);
        assert_eq!(vm.message, "Failed to fetch PRs");
        assert_eq!(vm.source, "Fetch");
        assert_eq!(vm.message_style.fg, Some(state.theme.status_error));
    }

    #[test]
    fn test_welcome_without_messages() {
        let vm = StatusBarViewModel::from_state(&AppState::default());
        assert!(vm.timestamp.is_empty());
        assert!(vm.source.is_empty());
    }
}
