//! Filter actions
//!
//! Search text editing and status label selection.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterAction {
    /// Character typed into the search field
    SearchChar(char),
    /// Remove last character of the search text
    SearchBackspace,
    /// Clear the search text
    SearchClear,
    /// Add or remove a status label
    ToggleStatus(String),
    /// Replace the status selection (restoring from the view location)
    SetStatuses(Vec<String>),
    /// Deselect every status label
    ClearStatuses,
    /// Reset status selection and search text
    ClearAll,
    /// Move the status popup cursor down
    StatusCursorNext,
    /// Move the status popup cursor up
    StatusCursorPrevious,
}
