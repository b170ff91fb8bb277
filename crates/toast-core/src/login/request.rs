use std::fmt;

/// A single login form submission.
///
/// An empty password selects offline play; an empty username falls back to
/// the last-known username when the request is dispatched.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Creates a username-only (offline) request.
    pub fn offline(username: impl Into<String>) -> Self {
        Self::new(username, String::new())
    }

    /// True iff there is something to submit.
    pub fn can_submit(&self) -> bool {
        !self.username.is_empty() || !self.password.is_empty()
    }

    /// True if this request should be verified online.
    pub fn is_online(&self) -> bool {
        !self.password.is_empty()
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let password = if self.password.is_empty() { "" } else { "<redacted>" };
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &password)
            .finish()
    }
}
