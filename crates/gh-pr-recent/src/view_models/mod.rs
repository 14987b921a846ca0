//! View models
//!
//! Pre-computed presentation data, so views only lay out widgets.

pub mod pull_request_view_model;
pub mod status_bar;
pub mod status_filter;

pub use pull_request_view_model::{HeaderViewModel, PrTableContent, PrTableViewModel};
pub use status_bar::StatusBarViewModel;
pub use status_filter::StatusFilterViewModel;
