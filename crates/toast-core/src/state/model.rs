//! Application state that outlives a single process.

use serde::{Deserialize, Serialize};

/// State persisted between runs.
///
/// Only the username of the last successful login is kept; passwords and
/// access tokens are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    /// Username of the last successful login
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_username: Option<String>,
}
