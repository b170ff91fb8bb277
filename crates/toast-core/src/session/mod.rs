//! Session domain module.
//!
//! # Module Structure
//!
//! - `model`: The session value (`Session`, `SessionMode`)
//! - `store`: The process' live session slot (`SessionStore`)

mod model;
mod store;

// Re-export public API
pub use model::{Session, SessionMode};
pub use store::SessionStore;
