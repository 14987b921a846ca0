//! KeyboardMiddleware - translates keyboard events into actions
//!
//! ## Layer 1: Priority keys
//! Ctrl+C always quits. Esc goes to the view as text input when it has the
//! TEXT_INPUT capability, otherwise it closes the top-most floating view.
//!
//! ## Layer 2: Capabilities
//! Views with TEXT_INPUT receive characters, Backspace and Enter as text
//! input instead of keymap commands.
//!
//! ## Layer 3: Keymap + Gating
//! The keymap yields candidate commands; the first one the active view
//! accepts is dispatched. Navigation commands additionally need
//! ITEM_NAVIGATION, and VIM_NAVIGATION_BINDINGS when bound to a letter.

use crate::actions::{Action, GlobalAction, TextInputAction};
use crate::dispatcher::Dispatcher;
use crate::keybindings::{KeyMatch, PendingKey};
use crate::middleware::Middleware;
use crate::state::AppState;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct KeyboardMiddleware {
    /// First key of a two-key sequence
    pending_key: Option<PendingKey>,
}

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self { pending_key: None }
    }

    fn handle_key(&mut self, key: KeyEvent, state: &AppState, dispatcher: &Dispatcher) {
        let view = state.active_view();
        let capabilities = view.map(|v| v.capabilities(state)).unwrap_or_default();

        // Layer 1: priority keys
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            log::debug!("Layer 1: Ctrl+C - dispatching Quit");
            dispatcher.dispatch(Action::Global(GlobalAction::Quit));
            return;
        }

        if key.code == KeyCode::Esc {
            self.pending_key = None;
            if capabilities.accepts_text_input() {
                dispatcher.dispatch(Action::TextInput(TextInputAction::Escape));
            } else if state.view_stack.len() > 1 {
                dispatcher.dispatch(Action::Global(GlobalAction::Close));
            }
            return;
        }

        // Layer 2: text input
        if capabilities.accepts_text_input() {
            self.pending_key = None;
            if let Some(input) = text_input_for(&key) {
                dispatcher.dispatch(Action::TextInput(input));
                return;
            }
        }

        // Layer 3: keymap + gating
        let commands = match state.keymap.match_key(&key, self.pending_key.as_ref()) {
            KeyMatch::Pending(first) => {
                log::debug!("Layer 3: waiting for second key after '{}'", first);
                self.pending_key = Some(PendingKey::new(first));
                return;
            }
            KeyMatch::Commands(commands) => commands,
            KeyMatch::NoMatch => Vec::new(),
        };
        self.pending_key = None;

        for command in commands {
            let action = command.to_action();
            if let Action::Navigate(_) = action {
                let letter_key = matches!(key.code, KeyCode::Char(_));
                if !capabilities.supports_item_navigation()
                    || (letter_key && !capabilities.supports_vim_navigation())
                {
                    log::debug!("Layer 3: {:?} needs navigation support", command);
                    continue;
                }
            }
            match view {
                Some(view) if !view.accepts_action(&action) => {
                    log::debug!("Layer 3: {:?} rejected by {:?}", command, view.view_id());
                }
                _ => {
                    log::debug!("Layer 3: dispatching {:?}", command);
                    dispatcher.dispatch(action);
                    return;
                }
            }
        }
    }
}

/// Text input meaning of a key, if it has one
fn text_input_for(key: &KeyEvent) -> Option<TextInputAction> {
    let ctrl_or_alt = key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
    match key.code {
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(TextInputAction::ClearLine)
        }
        KeyCode::Char(c) if !ctrl_or_alt => Some(TextInputAction::Char(c)),
        KeyCode::Backspace if key.modifiers.contains(KeyModifiers::SUPER) => {
            Some(TextInputAction::ClearLine)
        }
        KeyCode::Backspace => Some(TextInputAction::Backspace),
        KeyCode::Enter => Some(TextInputAction::Confirm),
        _ => None,
    }
}

impl Default for KeyboardMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Global(GlobalAction::KeyPressed(key)) = action {
            self.handle_key(*key, state, dispatcher);
            // Raw keys are consumed, handled or not
            return false;
        }
        true
    }
}
