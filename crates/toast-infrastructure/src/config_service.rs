//! Configuration service implementation.
//!
//! This module provides a ConfigService that loads the root configuration
//! from the configuration file (~/.config/toast/config.toml).

use crate::paths::ToastPaths;
use crate::toml_file::TomlFile;
use std::path::{Path, PathBuf};
use toast_core::config::RootConfig;
use toast_core::error::Result;

/// Reads the root configuration from config.toml.
///
/// The file is read once at startup; nothing in the process writes it.
pub struct ConfigService {
    file: TomlFile<RootConfig>,
}

impl ConfigService {
    /// Creates a ConfigService for the default config file location.
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(ToastPaths::config_file()?))
    }

    /// Creates a ConfigService reading from a specific file.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: TomlFile::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Reads the configuration from disk.
    ///
    /// # Returns
    ///
    /// - `Ok(RootConfig)`: Parsed configuration, or defaults if the file is missing or empty
    /// - `Err(ToastError)`: The file exists but cannot be read or parsed
    pub fn load(&self) -> Result<RootConfig> {
        let config = self.file.load()?;
        if config.is_none() {
            tracing::debug!(
                "[Config] No config at {}, using defaults",
                self.path().display()
            );
        }
        Ok(config.unwrap_or_default())
    }
}
