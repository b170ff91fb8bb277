//! Yggdrasil authentication backend.
//!
//! # Module Structure
//!
//! - `backend`: The `AuthBackend` implementation (`YggdrasilBackend`)
//! - `types`: Request/response bodies of the `/authenticate` endpoint

mod backend;
mod types;

pub use backend::YggdrasilBackend;
