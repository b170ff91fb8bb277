//! Authentication capability consumed by the login flow.
//!
//! # Module Structure
//!
//! - `backend`: The `AuthBackend` trait
//! - `error`: Verification failures (`AuthError`)

mod backend;
mod error;

// Re-export public API
pub use backend::AuthBackend;
pub use error::{AuthError, AuthResult};
