//! Application state

mod app;
mod credential;
mod filter;
mod pull_requests;
mod status_bar;

pub use app::AppState;
pub use credential::CredentialState;
pub use filter::FilterState;
pub use pull_requests::PullRequestState;
pub use status_bar::{StatusBarState, StatusKind, StatusMessage};
