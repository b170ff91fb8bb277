//! Login outcomes and their delivery.

use crate::session::Session;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

/// The single typed result of an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum LoginOutcome {
    /// The new live session.
    Success(Session),
    /// The server rejected the credentials; the user may correct and retry.
    InvalidCredentials,
    /// Any other failure. The message is meant to be shown verbatim.
    AuthFailure(String),
}

impl LoginOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The session carried by a successful outcome.
    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Success(session) => Some(session),
            _ => None,
        }
    }
}

/// Receives delivered outcomes.
///
/// Exactly one handler is registered on an orchestrator at a time, and it is
/// invoked at most once per submission. Handlers run on whichever context
/// resolved the submission: the caller of `submit` for offline logins, the
/// runtime worker for online ones.
pub trait OutcomeHandler: Send + Sync {
    fn handle(&self, outcome: LoginOutcome);
}

impl<F> OutcomeHandler for F
where
    F: Fn(LoginOutcome) + Send + Sync,
{
    fn handle(&self, outcome: LoginOutcome) {
        self(outcome)
    }
}

impl OutcomeHandler for mpsc::UnboundedSender<LoginOutcome> {
    fn handle(&self, outcome: LoginOutcome) {
        // Receiver gone means the UI went away; nothing left to notify.
        if self.send(outcome).is_err() {
            tracing::debug!("[Login] Outcome receiver dropped, discarding outcome");
        }
    }
}
