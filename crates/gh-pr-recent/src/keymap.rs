pub use crate::{
    command_id::CommandId,
    keybindings::{KeyBinding, Keymap},
};

/// Get the default keymap
///
/// A key may map to several commands; the active view accepts the first one
/// it understands.
pub fn default_keymap() -> Keymap {
    use CommandId::*;

    let bindings = vec![
        // Navigation
        KeyBinding::new("j", "j", NavigateNext),
        KeyBinding::new("down", "↓", NavigateNext),
        KeyBinding::new("k", "k", NavigatePrevious),
        KeyBinding::new("up", "↑", NavigatePrevious),
        KeyBinding::new("g g", "gg", NavigateToTop),
        KeyBinding::new("G", "G", NavigateToBottom),
        // Context
        KeyBinding::new("enter", "Enter", Confirm),
        KeyBinding::new("space", "Space", ToggleSelect),
        // PR Operations
        KeyBinding::new("o", "o", PrOpenInBrowser),
        KeyBinding::new("y", "y", PrCopyLink),
        KeyBinding::new("Y", "Y", PrCopyAllLinks),
        KeyBinding::new("L", "L", PrCopyShareLink),
        KeyBinding::new("ctrl+r", "Ctrl+R", PrRefresh),
        // Filter & Search
        KeyBinding::new("/", "/", SearchOpen),
        KeyBinding::new("s", "s", StatusFilterOpen),
        KeyBinding::new("c", "c", StatusFilterClear),
        KeyBinding::new("F", "F", FilterClearAll),
        // Credential
        KeyBinding::new("t", "t", CredentialOpen),
        // General
        KeyBinding::new("q", "q", GlobalClose),
        KeyBinding::new("ctrl+c", "Ctrl+C", GlobalQuit),
    ];

    Keymap::new(bindings)
}
