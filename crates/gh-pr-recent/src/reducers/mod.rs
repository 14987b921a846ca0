pub mod credential_reducer;
pub mod filter_reducer;
pub mod pull_request_reducer;
pub mod status_bar_reducer;
