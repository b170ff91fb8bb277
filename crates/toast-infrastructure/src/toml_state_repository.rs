//! TOML-backed application state.
//!
//! Persists the state that should survive a restart (currently the
//! last-known username) to `~/.config/toast/app_state.toml`.

use crate::paths::ToastPaths;
use crate::toml_file::TomlFile;
use async_trait::async_trait;
use std::path::PathBuf;
use toast_core::error::Result;
use toast_core::state::{AppState, StateRepository};
use tokio::sync::Mutex;

/// A `StateRepository` that stores [`AppState`] in a single TOML file.
///
/// Writes are serialized through a mutex so concurrent updates from the same
/// process cannot interleave their read-modify-write cycles.
pub struct TomlStateRepository {
    file: TomlFile<AppState>,
    write_lock: Mutex<()>,
}

impl TomlStateRepository {
    /// Creates a repository for the default state file location.
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(ToastPaths::app_state_file()?))
    }

    /// Creates a repository at a specific path.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: TomlFile::new(path),
            write_lock: Mutex::new(()),
        }
    }

    async fn update<F>(&self, f: F) -> Result<()>
    where
        F: FnOnce(&mut AppState) + Send,
    {
        let _guard = self.write_lock.lock().await;
        let mut state = self.file.load()?.unwrap_or_default();
        f(&mut state);
        self.file.save(&state)
    }
}

#[async_trait]
impl StateRepository for TomlStateRepository {
    async fn get_last_username(&self) -> Option<String> {
        match self.file.load() {
            Ok(state) => state.and_then(|s| s.last_username),
            Err(e) => {
                tracing::warn!("[State] Failed to read app state: {}", e);
                None
            }
        }
    }

    async fn set_last_username(&self, username: String) -> Result<()> {
        tracing::debug!("[State] Remembering last username {}", username);
        self.update(|state| state.last_username = Some(username))
            .await
    }
}
