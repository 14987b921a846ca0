//! Navigation actions - shared across screens
//!
//! Generic navigation that views translate into their own actions.

/// Generic navigation actions (vim-style)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    /// Next item (j, down arrow)
    Next,
    /// Previous item (k, up arrow)
    Previous,
    /// First item (gg)
    ToTop,
    /// Last item (G)
    ToBottom,
}
