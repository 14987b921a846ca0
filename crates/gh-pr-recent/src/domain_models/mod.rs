//! Domain models
//!
//! Pure data types and functions, independent of the UI and the GitHub client.

pub mod credential;
pub mod location;
pub mod pr_filter;
pub mod pull_request;

pub use credential::Credential;
pub use location::Location;
pub use pr_filter::{available_statuses, visible_pull_requests, PrFilter};
pub use pull_request::{FetchTicket, LoadingState, Pr};
