//! Failures reported by an [`AuthBackend`](super::AuthBackend).

use thiserror::Error;

/// Result type for credential verification
pub type AuthResult<T> = Result<T, AuthError>;

/// Why an online verification attempt did not produce a session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The server rejected the username/password pair
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The authentication server could not be reached
    #[error("Authentication unavailable: {0}")]
    Unavailable(String),

    /// The request did not complete in time
    #[error("Authentication timed out")]
    Timeout,

    /// The server answered with an error that is not about the credentials
    #[error("Authentication server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// The account exists but may not log in
    #[error("Insufficient privileges: {0}")]
    InsufficientPrivileges(String),

    /// Anything else
    #[error("Authentication failed: {0}")]
    Other(String),
}

impl AuthError {
    /// Creates an Unavailable error
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    /// Creates a Server error
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: message.into(),
        }
    }

    /// Creates an Other error
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }

    /// Check if the server rejected the credentials themselves
    pub fn is_invalid_credentials(&self) -> bool {
        matches!(self, Self::InvalidCredentials)
    }

    /// The underlying description, without the variant prefix used by `Display`.
    ///
    /// Returns `None` when the error carries no usable text.
    pub fn description(&self) -> Option<&str> {
        let text = match self {
            Self::InvalidCredentials => "Invalid credentials",
            Self::Timeout => "timeout",
            Self::Unavailable(message)
            | Self::InsufficientPrivileges(message)
            | Self::Other(message)
            | Self::Server { message, .. } => message.as_str(),
        };
        let text = text.trim();
        (!text.is_empty()).then_some(text)
    }
}
