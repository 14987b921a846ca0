//! Credential model
//!
//! The personal access token used to authenticate the search request.

use std::fmt;

/// Location parameter that carries the credential
pub const TOKEN_PARAM: &str = "token";

/// A GitHub personal access token
///
/// Surrounding whitespace is trimmed on construction, so a pasted token with a
/// trailing newline compares equal to the clean one. The `Debug` output never
/// reveals the token.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl AsRef<str>) -> Self {
        Self(token.as_ref().trim().to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The raw token, for building the API client
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "Credential(<empty>)")
        } else {
            write!(f, "Credential(<redacted>)")
        }
    }
}

/// Mask a token for display, keeping its length visible
pub fn mask(token: &str) -> String {
    "*".repeat(token.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_is_trimmed() {
        assert_eq!(Credential::new("  ghp_abc\n"), Credential::new("ghp_abc"));
        assert!(Credential::new("   ").is_empty());
    }

    #[test]
    fn test_debug_never_prints_token() {
        let debug = format!("{:?}", Credential::new("ghp_secret"));
        assert!(!debug.contains("ghp_secret"));
        assert_eq!(format!("{:?}", Credential::default()), "Credential(<empty>)");
    }

    #[test]
    fn test_mask_keeps_length() {
        assert_eq!(mask("abc"), "***");
        assert_eq!(mask(""), "");
    }
}
