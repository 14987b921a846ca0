//! Filter State

use crate::domain_models::PrFilter;

/// Active filter and the status popup cursor
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    pub current: PrFilter,
    /// Cursor position within the available status labels
    pub status_cursor: usize,
}
