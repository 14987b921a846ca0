//! Actions module
//!
//! All actions of the application, tagged by screen/domain:
//! - Generic actions (Navigation, TextInput, ViewContext) that the active view
//!   translates to screen-specific actions
//! - Global actions that affect the entire application
//! - Screen/domain-specific actions that go straight to their reducer

// Shared action types
pub mod context_action;
pub mod global;
pub mod navigation;
pub mod text_input;

// Screen-specific action types
pub mod bootstrap;
pub mod credential;
pub mod filter;
pub mod pull_request;
pub mod status_bar;

pub use bootstrap::BootstrapAction;
pub use context_action::ContextAction;
pub use credential::CredentialAction;
pub use filter::FilterAction;
pub use global::GlobalAction;
pub use navigation::NavigationAction;
pub use pull_request::PullRequestAction;
pub use status_bar::StatusBarAction;
pub use text_input::TextInputAction;

/// Root action enum - tagged by screen/domain
#[derive(Debug, Clone)]
pub enum Action {
    // Generic actions (need translation by active view)
    /// Generic navigation action - translated by the active view
    Navigate(NavigationAction),
    /// Generic text input action - translated by the active view
    TextInput(TextInputAction),
    /// Context-sensitive action (Enter, Space) - translated by the active view
    ViewContext(ContextAction),

    // Global actions (no translation needed)
    Global(GlobalAction),

    // Targeted actions
    /// Start-up actions
    Bootstrap(BootstrapAction),
    /// PR table actions and fetch results
    PullRequest(PullRequestAction),
    /// Search text and status selection
    Filter(FilterAction),
    /// Credential input and submission
    Credential(CredentialAction),
    /// Status bar messages
    StatusBar(StatusBarAction),
}
