//! Credential actions
//!
//! Editing the token in the credential popup and submitting it.

use crate::domain_models::Credential;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialAction {
    /// Character typed into the token field
    InputChar(char),
    /// Remove last character of the token field
    InputBackspace,
    /// Clear the token field
    InputClear,
    /// Submit the token field (Enter in the popup)
    SubmitInput,
    /// Leave the popup without submitting
    Cancel,
    /// Make this the current credential; fetches when it changed and is non-empty
    Submit(Credential),
}
