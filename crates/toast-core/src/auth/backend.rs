//! Authentication backend trait.
//!
//! Defines the capability the login flow consumes to seed its session and to
//! verify credentials over the network.

use super::error::AuthResult;
use crate::session::Session;
use async_trait::async_trait;

/// An abstract credential verification service.
///
/// This trait decouples the login flow from the wire protocol used to talk
/// to the authentication server (Yggdrasil, a test double, ...).
///
/// # Implementation Notes
///
/// Implementations should:
/// - Never log or echo the password
/// - Report a rejected username/password pair as
///   [`AuthError::InvalidCredentials`](super::AuthError::InvalidCredentials)
///   and every other failure (including timeouts) as another variant
#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// Returns the session the process starts with.
    ///
    /// Called once when the session store is seeded.
    fn current_session(&self) -> Session;

    /// Verifies `username`/`password` against the authentication server.
    ///
    /// # Returns
    ///
    /// - `Ok(Session)`: A verified (online) session
    /// - `Err(AuthError)`: The attempt failed
    async fn verify_online(&self, username: &str, password: &str) -> AuthResult<Session>;
}
