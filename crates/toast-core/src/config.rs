//! Configuration model (`config.toml`).
//!
//! Every field has a default, so an empty or missing file is a valid
//! configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_USERNAME: &str = "Player";
pub const DEFAULT_AUTH_SERVER: &str = "https://authserver.mojang.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct RootConfig {
    #[serde(default)]
    pub session: SessionSettings,
    #[serde(default)]
    pub auth: AuthSettings,
    #[serde(default)]
    pub debug: DebugSettings,
}

/// Settings for the session the process starts with.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    /// Username used when no previous login was recorded
    #[serde(default = "default_username")]
    pub default_username: String,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            default_username: default_username(),
        }
    }
}

/// Settings for the online verification backend.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AuthSettings {
    /// Base URL of the Yggdrasil-compatible authentication server
    #[serde(default = "default_server_url")]
    pub server_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl AuthSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Logging settings, used when `RUST_LOG` is not set.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DebugSettings {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for DebugSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_username() -> String {
    DEFAULT_USERNAME.to_string()
}

fn default_server_url() -> String {
    DEFAULT_AUTH_SERVER.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_log_level() -> String {
    "warn".to_string()
}
