//! State repository trait.

use async_trait::async_trait;

use crate::error::Result;

/// Repository for state that survives a restart.
#[async_trait]
pub trait StateRepository: Send + Sync {
    /// Username of the last successful login, if one was recorded and can
    /// still be read.
    async fn get_last_username(&self) -> Option<String>;

    async fn set_last_username(&self, username: String) -> Result<()>;
}
