//! Core of the Toast login flow.
//!
//! Holds the live session, accepts login submissions, verifies credentials
//! through an injected [`auth::AuthBackend`] and reports a typed
//! [`login::LoginOutcome`] for every accepted submission. Everything that
//! touches the network, the file system or a terminal lives in other crates.

pub mod auth;
pub mod config;
pub mod error;
pub mod login;
pub mod render;
pub mod session;
pub mod state;

// Re-export common types
pub use error::ToastError;
pub use login::{LoginOrchestrator, LoginOutcome, LoginRequest};
pub use session::{Session, SessionMode, SessionStore};
