//! Login flow.
//!
//! This module turns form submissions into sessions: it validates the
//! request, picks the offline or online path, keeps at most one attempt in
//! flight and reports a typed [`LoginOutcome`] for each accepted submission.
//!
//! # Module Structure
//!
//! - `request`: Form input (`LoginRequest`)
//! - `outcome`: Results and their delivery (`LoginOutcome`, `OutcomeHandler`)
//! - `classifier`: Failure classification (`AuthOutcomeClassifier`)
//! - `orchestrator`: The single-flight state machine (`LoginOrchestrator`)
//!
//! # Usage
//!
//! ```ignore
//! use toast_core::login::{LoginOrchestrator, LoginRequest};
//!
//! let orchestrator = LoginOrchestrator::from_backend(backend, Handle::current());
//! orchestrator.on_outcome(|outcome| println!("{outcome:?}"));
//! orchestrator.submit(LoginRequest::new("bob", "secret"));
//! ```

mod classifier;
mod orchestrator;
mod orchestrator_test;
mod outcome;
mod request;

// Re-export public API
pub use classifier::{AuthOutcomeClassifier, GENERIC_FAILURE_MESSAGE};
pub use orchestrator::{LoginOrchestrator, LoginState, PendingLogin, Submission};
pub use outcome::{LoginOutcome, OutcomeHandler};
pub use request::LoginRequest;
