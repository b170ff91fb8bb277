//! Path management for toast configuration files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/toast/             # Config directory (dirs::config_dir)
//! ├── config.toml              # Application configuration
//! └── app_state.toml           # Last-known username
//! ```

use std::path::PathBuf;
use toast_core::ToastError;
use toast_core::error::Result;

const APP_DIR: &str = "toast";

/// Resolves toast's files under the platform config directory.
pub struct ToastPaths;

impl ToastPaths {
    /// Returns the toast configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to config directory (e.g., `~/.config/toast/`)
    /// - `Err(ToastError::Config)`: The platform has no config directory
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| ToastError::config("Cannot find config directory"))
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path to the persisted application state.
    pub fn app_state_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("app_state.toml"))
    }
}
