//! Text input actions - shared across screens with text input capability

/// Generic text input actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextInputAction {
    /// Character typed into input field
    Char(char),
    /// Remove last character
    Backspace,
    /// Clear entire line (Ctrl+U or Cmd+Backspace)
    ClearLine,
    /// Escape pressed - the view decides whether to cancel or close
    Escape,
    /// Enter pressed
    Confirm,
}
