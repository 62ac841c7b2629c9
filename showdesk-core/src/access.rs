//! Passcode screen in front of the administrative view.

use thiserror::Error;

/// The fixed administrator passcode.
pub const ADMIN_ACCESS_CODE: &str = "1987";

/// Message shown under the passcode field after a wrong attempt.
pub const INCORRECT_CODE_MESSAGE: &str = "Code incorrect";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AccessError {
    #[error("Code incorrect")]
    IncorrectCode,
}

/// Whether the administrative view is unlocked.
///
/// Starts locked. Once unlocked it stays unlocked for the life of the value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AccessState {
    unlocked: bool,
}

impl AccessState {
    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    pub fn unlock(&mut self) {
        self.unlocked = true;
    }
}

/// Single-field passcode form.
#[derive(Debug, Clone)]
pub struct AccessGate {
    secret: &'static str,
    /// Text currently typed in the passcode field.
    pub code: String,
    error: Option<&'static str>,
}

impl Default for AccessGate {
    fn default() -> Self {
        Self::new(ADMIN_ACCESS_CODE)
    }
}

impl AccessGate {
    pub fn new(secret: &'static str) -> Self {
        Self {
            secret,
            code: String::new(),
            error: None,
        }
    }

    /// Inline error from the last failed attempt.
    pub fn error(&self) -> Option<&str> {
        self.error
    }

    /// Compare the typed code with the secret.
    ///
    /// On an exact match `on_unlock` runs once and any previous error is
    /// cleared. On mismatch the error message is set, the callback is not
    /// run, and the typed code is kept so it can be corrected.
    pub fn submit(&mut self, on_unlock: impl FnOnce()) -> Result<(), AccessError> {
        if self.code == self.secret {
            on_unlock();
            self.error = None;
            log::info!("Administrator access granted");
            Ok(())
        } else {
            self.error = Some(INCORRECT_CODE_MESSAGE);
            log::warn!("Rejected administrator passcode attempt");
            Err(AccessError::IncorrectCode)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_code_unlocks_once_and_clears_error() {
        let mut gate = AccessGate::default();
        gate.code = "0000".into();
        let _ = gate.submit(|| panic!("must not unlock"));
        assert_eq!(gate.error(), Some("Code incorrect"));

        gate.code = ADMIN_ACCESS_CODE.into();
        let mut calls = 0;
        gate.submit(|| calls += 1).unwrap();
        assert_eq!(calls, 1);
        assert_eq!(gate.error(), None);
    }

    #[test]
    fn wrong_code_keeps_typed_value() {
        let mut gate = AccessGate::default();
        gate.code = "1986".into();
        let mut calls = 0;
        let result = gate.submit(|| calls += 1);
        assert_eq!(result, Err(AccessError::IncorrectCode));
        assert_eq!(calls, 0);
        assert_eq!(gate.code, "1986");
        assert_eq!(gate.error(), Some(INCORRECT_CODE_MESSAGE));
    }

    #[test]
    fn comparison_is_exact() {
        for attempt in ["", " 1987", "1987 ", "19870", "１９８７"] {
            let mut gate = AccessGate::default();
            gate.code = attempt.into();
            assert!(gate.submit(|| {}).is_err(), "'{}' should be rejected", attempt);
        }
    }

    #[test]
    fn access_state_only_moves_forward() {
        let mut state = AccessState::default();
        assert!(!state.is_unlocked());
        state.unlock();
        state.unlock();
        assert!(state.is_unlocked());
    }

    #[test]
    fn error_displays_inline_message() {
        assert_eq!(AccessError::IncorrectCode.to_string(), INCORRECT_CODE_MESSAGE);
    }
}
