use super::outcome::LoginOutcome;
use crate::auth::AuthError;

/// Message used when a failure carries no description of its own.
pub const GENERIC_FAILURE_MESSAGE: &str = "Unable to login";

/// Maps verification failures onto the outcomes the UI distinguishes.
pub struct AuthOutcomeClassifier;

impl AuthOutcomeClassifier {
    /// Classifies a failed online attempt.
    ///
    /// Only an explicit credentials rejection becomes
    /// [`LoginOutcome::InvalidCredentials`]; everything else is an
    /// [`LoginOutcome::AuthFailure`] carrying the error's own description.
    pub fn classify(error: &AuthError) -> LoginOutcome {
        if error.is_invalid_credentials() {
            return LoginOutcome::InvalidCredentials;
        }

        let message = error.description().unwrap_or(GENERIC_FAILURE_MESSAGE);
        LoginOutcome::AuthFailure(message.to_string())
    }
}
