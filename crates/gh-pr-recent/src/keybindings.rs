//! Keybinding system
//!
//! Maps keyboard input to commands. A binding is written as text:
//! - single char, case-sensitive: `"q"`, `"G"`
//! - modifiers and named keys: `"ctrl+r"`, `"enter"`, `"down"`, `"space"`
//! - two-key sequence: `"g g"`

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::command_id::CommandId;

/// Time allowed between the two keys of a sequence
const SEQUENCE_TIMEOUT: Duration = Duration::from_secs(2);

/// A single keybinding that maps a key pattern to a command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Textual key pattern, e.g. `"ctrl+r"` or `"g g"`
    pub keys: String,
    /// Display hint, e.g. `"Ctrl+R"`
    pub hint: String,
    pub command: CommandId,
}

impl KeyBinding {
    pub fn new(keys: impl Into<String>, hint: impl Into<String>, command: CommandId) -> Self {
        Self {
            keys: keys.into(),
            hint: hint.into(),
            command,
        }
    }
}

/// Parsed key pattern for matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedKeyPattern {
    Single {
        code: KeyCode,
        modifiers: KeyModifiers,
    },
    Sequence {
        first: char,
        second: char,
    },
}

/// Parse a textual key pattern, `None` if it is malformed
pub fn parse_key_pattern(pattern: &str) -> Option<ParsedKeyPattern> {
    let pattern = pattern.trim();

    if pattern.contains(' ') {
        let mut parts = pattern.split_whitespace();
        let first = single_char(parts.next()?)?;
        let second = single_char(parts.next()?)?;
        if parts.next().is_some() {
            return None;
        }
        return Some(ParsedKeyPattern::Sequence { first, second });
    }

    if let Some(c) = single_char(pattern) {
        // Terminals report uppercase letters with SHIFT
        let modifiers = if c.is_ascii_uppercase() {
            KeyModifiers::SHIFT
        } else {
            KeyModifiers::NONE
        };
        return Some(ParsedKeyPattern::Single {
            code: KeyCode::Char(c),
            modifiers,
        });
    }

    let lower = pattern.to_lowercase();
    let mut modifiers = KeyModifiers::NONE;
    let mut rest = lower.as_str();
    while let Some((modifier, tail)) = rest.split_once('+') {
        match modifier {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" => modifiers |= KeyModifiers::ALT,
            _ => return None,
        }
        rest = tail;
    }

    Some(ParsedKeyPattern::Single {
        code: parse_key_code(rest)?,
        modifiers,
    })
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    let c = chars.next()?;
    chars.next().is_none().then_some(c)
}

fn parse_key_code(s: &str) -> Option<KeyCode> {
    let code = match s {
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "backspace" => KeyCode::Backspace,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "space" => KeyCode::Char(' '),
        s => KeyCode::Char(single_char(s)?),
    };
    Some(code)
}

/// First key of a sequence that is waiting for its second key
#[derive(Debug, Clone)]
pub struct PendingKey {
    pub key: char,
    pub since: Instant,
}

impl PendingKey {
    pub fn new(key: char) -> Self {
        Self {
            key,
            since: Instant::now(),
        }
    }

    fn is_expired(&self) -> bool {
        self.since.elapsed() >= SEQUENCE_TIMEOUT
    }
}

/// Outcome of matching one key event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyMatch {
    /// Matching commands, in keymap order; the caller picks the first one the view accepts
    Commands(Vec<CommandId>),
    /// The key starts a sequence
    Pending(char),
    NoMatch,
}

/// Collection of bindings with matching logic
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: Vec<(KeyBinding, ParsedKeyPattern)>,
}

impl Keymap {
    /// Build a keymap, skipping bindings whose pattern does not parse
    pub fn new(bindings: Vec<KeyBinding>) -> Self {
        let bindings = bindings
            .into_iter()
            .filter_map(|binding| match parse_key_pattern(&binding.keys) {
                Some(pattern) => Some((binding, pattern)),
                None => {
                    log::warn!("Ignoring invalid key pattern '{}'", binding.keys);
                    None
                }
            })
            .collect();
        Self { bindings }
    }

    /// Match a key event, completing `pending` when it forms a sequence
    pub fn match_key(&self, key: &KeyEvent, pending: Option<&PendingKey>) -> KeyMatch {
        let typed = match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Some(c)
            }
            _ => None,
        };

        if let (Some(pending), Some(current)) = (pending.filter(|p| !p.is_expired()), typed) {
            let completed: Vec<CommandId> = self
                .bindings
                .iter()
                .filter(|(_, pattern)| {
                    *pattern
                        == ParsedKeyPattern::Sequence {
                            first: pending.key,
                            second: current,
                        }
                })
                .map(|(binding, _)| binding.command)
                .collect();
            if !completed.is_empty() {
                return KeyMatch::Commands(completed);
            }
        }

        let singles: Vec<CommandId> = self
            .bindings
            .iter()
            .filter(|(_, pattern)| match pattern {
                ParsedKeyPattern::Single { code, modifiers } => {
                    // BackTab arrives with or without SHIFT depending on the terminal
                    key.code == *code && (*code == KeyCode::BackTab || key.modifiers == *modifiers)
                }
                ParsedKeyPattern::Sequence { .. } => false,
            })
            .map(|(binding, _)| binding.command)
            .collect();
        if !singles.is_empty() {
            return KeyMatch::Commands(singles);
        }

        let starts_sequence = typed.is_some_and(|c| {
            self.bindings.iter().any(
                |(_, pattern)| matches!(pattern, ParsedKeyPattern::Sequence { first, .. } if *first == c),
            )
        });
        match typed {
            Some(c) if starts_sequence => KeyMatch::Pending(c),
            _ => KeyMatch::NoMatch,
        }
    }

    pub fn bindings(&self) -> impl Iterator<Item = &KeyBinding> {
        self.bindings.iter().map(|(b, _)| b)
    }

    /// Deduplicated hints for a command joined with "/", e.g. "j/↓"
    pub fn compact_hint_for_command(&self, command: CommandId) -> Option<String> {
        let mut hints: Vec<&str> = Vec::new();
        for binding in self.bindings().filter(|b| b.command == command) {
            if !hints.contains(&binding.hint.as_str()) {
                hints.push(&binding.hint);
            }
        }
        (!hints.is_empty()).then(|| hints.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    fn test_keymap() -> Keymap {
        use CommandId::*;
        Keymap::new(vec![
            KeyBinding::new("j", "j", NavigateNext),
            KeyBinding::new("down", "↓", NavigateNext),
            KeyBinding::new("g g", "gg", NavigateToTop),
            KeyBinding::new("G", "G", NavigateToBottom),
            KeyBinding::new("ctrl+r", "Ctrl+R", PrRefresh),
            KeyBinding::new("enter", "Enter", Confirm),
            KeyBinding::new("enter", "Enter", PrOpenInBrowser),
            KeyBinding::new("q", "q", GlobalClose),
            KeyBinding::new("esc", "Esc", GlobalClose),
        ])
    }

    #[test]
    fn test_parse_patterns() {
        assert_eq!(
            parse_key_pattern("G"),
            Some(ParsedKeyPattern::Single {
                code: KeyCode::Char('G'),
                modifiers: KeyModifiers::SHIFT
            })
        );
        assert_eq!(
            parse_key_pattern("ctrl+r"),
            Some(ParsedKeyPattern::Single {
                code: KeyCode::Char('r'),
                modifiers: KeyModifiers::CONTROL
            })
        );
        assert_eq!(
            parse_key_pattern("g g"),
            Some(ParsedKeyPattern::Sequence {
                first: 'g',
                second: 'g'
            })
        );
        assert_eq!(parse_key_pattern("a b c"), None);
        assert_eq!(parse_key_pattern("hyper+x"), None);
    }

    #[test]
    fn test_single_key_matches() {
        let keymap = test_keymap();
        assert_eq!(
            keymap.match_key(&key(KeyCode::Char('j'), KeyModifiers::NONE), None),
            KeyMatch::Commands(vec![CommandId::NavigateNext])
        );
        assert_eq!(
            keymap.match_key(&key(KeyCode::Char('r'), KeyModifiers::CONTROL), None),
            KeyMatch::Commands(vec![CommandId::PrRefresh])
        );
    }

    #[test]
    fn test_shared_key_returns_all_commands_in_order() {
        let keymap = test_keymap();
        assert_eq!(
            keymap.match_key(&key(KeyCode::Enter, KeyModifiers::NONE), None),
            KeyMatch::Commands(vec![CommandId::Confirm, CommandId::PrOpenInBrowser])
        );
    }

    #[test]
    fn test_sequence_needs_two_keys() {
        let keymap = test_keymap();
        let g = key(KeyCode::Char('g'), KeyModifiers::NONE);

        assert_eq!(keymap.match_key(&g, None), KeyMatch::Pending('g'));

        let pending = PendingKey::new('g');
        assert_eq!(
            keymap.match_key(&g, Some(&pending)),
            KeyMatch::Commands(vec![CommandId::NavigateToTop])
        );
    }

    #[test]
    fn test_uppercase_is_distinct_from_sequence() {
        let keymap = test_keymap();
        assert_eq!(
            keymap.match_key(&key(KeyCode::Char('G'), KeyModifiers::SHIFT), None),
            KeyMatch::Commands(vec![CommandId::NavigateToBottom])
        );
    }

    #[test]
    fn test_unbound_key() {
        let keymap = test_keymap();
        assert_eq!(
            keymap.match_key(&key(KeyCode::Char('z'), KeyModifiers::NONE), None),
            KeyMatch::NoMatch
        );
    }

    #[test]
    fn test_compact_hint() {
        let keymap = test_keymap();
        assert_eq!(
            keymap.compact_hint_for_command(CommandId::NavigateNext),
            Some("j/↓".to_string())
        );
        assert_eq!(
            keymap.compact_hint_for_command(CommandId::GlobalClose),
            Some("q/Esc".to_string())
        );
        assert_eq!(keymap.compact_hint_for_command(CommandId::SearchOpen), None);
    }
}
