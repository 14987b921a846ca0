//! Context-sensitive actions
//!
//! Semantic actions that views interpret differently. `Confirm` (Enter)
//! opens the PR in the table and toggles the focused label in the status
//! popup; `ToggleSelect` (Space) only means something in the status popup.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextAction {
    /// Primary action on focused item (Enter key)
    Confirm,
    /// Toggle state of focused item (Space key)
    ToggleSelect,
}
