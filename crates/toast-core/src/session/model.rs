//! Session domain model.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// How a session was established.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SessionMode {
    /// Accepted without credential verification, identified by username only.
    Offline,
    /// Established after successful external credential verification.
    Online,
}

/// The identity the client is currently playing as.
///
/// A session is a value: it is replaced wholesale on every successful login
/// and never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Display name of the player
    pub username: String,
    /// Whether the name was verified by the authentication server
    pub mode: SessionMode,
}

impl Session {
    /// Creates a session accepted without verification.
    pub fn offline(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            mode: SessionMode::Offline,
        }
    }

    /// Creates a session for a verified account.
    pub fn online(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            mode: SessionMode::Online,
        }
    }

    /// Returns true if the session was verified online.
    pub fn is_online(&self) -> bool {
        self.mode == SessionMode::Online
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_constructors_set_mode() {
        assert_eq!(Session::offline("alice").mode, SessionMode::Offline);
        assert!(Session::online("bob").is_online());
    }

    #[test]
    fn test_mode_display_and_parse() {
        assert_eq!(SessionMode::Online.to_string(), "online");
        assert_eq!(SessionMode::from_str("offline").unwrap(), SessionMode::Offline);
    }
}
