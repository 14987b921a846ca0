//! Credential State

use crate::domain_models::Credential;

/// Current credential and the popup's edit buffer
#[derive(Debug, Clone, Default)]
pub struct CredentialState {
    /// Credential the current result list belongs to
    pub current: Credential,
    /// Text typed into the credential popup, not yet submitted
    pub input: String,
}
