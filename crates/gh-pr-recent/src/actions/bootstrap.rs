//! Bootstrap actions

/// Actions for application start-up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapAction {
    /// Application started: read the view location and restore the view
    Start,
}
