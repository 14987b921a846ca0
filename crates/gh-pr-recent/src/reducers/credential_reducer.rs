//! Credential Reducer

use crate::actions::CredentialAction;
use crate::state::CredentialState;

pub fn reduce(mut state: CredentialState, action: &CredentialAction) -> CredentialState {
    match action {
        CredentialAction::InputChar(c) => state.input.push(*c),
        CredentialAction::InputBackspace => {
            state.input.pop();
        }
        CredentialAction::InputClear
        | CredentialAction::SubmitInput
        | CredentialAction::Cancel => state.input.clear(),
        CredentialAction::Submit(credential) => state.current = credential.clone(),
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::Credential;

    #[test]
    fn test_editing_buffer() {
        let mut state = CredentialState::default();
        for c in "abc".chars() {
            state = reduce(state, &CredentialAction::InputChar(c));
        }
        state = reduce(state, &CredentialAction::InputBackspace);
        assert_eq!(state.input, "ab");

        state = reduce(state, &CredentialAction::SubmitInput);
        assert_eq!(state.input, "");
        assert!(state.current.is_empty());
    }

    #[test]
    fn test_submit_replaces_current() {
        let state = reduce(
            CredentialState::default(),
            &CredentialAction::Submit(Credential::new("ghp_x")),
        );
        assert_eq!(state.current, Credential::new("ghp_x"));
    }
}
