//! Wiring between the login core, its adapters and the terminal.

use anyhow::Result;
use std::sync::Arc;
use toast_core::auth::AuthBackend;
use toast_core::config::RootConfig;
use toast_core::login::{LoginOrchestrator, LoginOutcome, LoginRequest, Submission};
use toast_core::session::Session;
use toast_core::state::StateRepository;
use toast_infrastructure::YggdrasilBackend;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

/// Owns the orchestrator and receives its outcomes for the terminal UI.
pub struct LoginApp {
    orchestrator: LoginOrchestrator,
    state_repository: Arc<dyn StateRepository>,
    outcomes: mpsc::UnboundedReceiver<LoginOutcome>,
}

impl LoginApp {
    /// Builds the app against the configured Yggdrasil server.
    ///
    /// The starting session is offline, for the last username that logged
    /// in successfully or the configured default.
    pub async fn bootstrap(
        config: &RootConfig,
        state_repository: Arc<dyn StateRepository>,
    ) -> Result<Self> {
        let initial_username = match state_repository.get_last_username().await {
            Some(username) => username,
            None => config.session.default_username.clone(),
        };
        tracing::info!("[Bootstrap] Starting as {}", initial_username);

        let backend = YggdrasilBackend::new(&config.auth, initial_username)?;
        Ok(Self::new(Arc::new(backend), state_repository))
    }

    pub fn new(backend: Arc<dyn AuthBackend>, state_repository: Arc<dyn StateRepository>) -> Self {
        let orchestrator = LoginOrchestrator::from_backend(backend, Handle::current());
        let (tx, outcomes) = mpsc::unbounded_channel();
        orchestrator.on_outcome(tx);

        Self {
            orchestrator,
            state_repository,
            outcomes,
        }
    }

    pub fn current_session(&self) -> Session {
        self.orchestrator.current_session()
    }

    pub fn can_submit(&self, request: &LoginRequest) -> bool {
        self.orchestrator.can_submit(request)
    }

    /// Submits `request` and waits for its outcome.
    ///
    /// Returns `None` if the request was not accepted or the attempt ended
    /// without delivering an outcome. Successful logins are remembered so the
    /// next start suggests the same username.
    pub async fn login(&mut self, request: LoginRequest) -> Option<LoginOutcome> {
        match self.orchestrator.submit(request) {
            Submission::Rejected | Submission::Busy => return None,
            Submission::Completed => {}
            Submission::Pending(pending) => pending.wait().await,
        }

        // Delivery happens before the attempt finishes, so the outcome, if
        // any, is already queued.
        let Ok(outcome) = self.outcomes.try_recv() else {
            tracing::warn!("[Login] Attempt ended without an outcome");
            return None;
        };

        if let Some(session) = outcome.session() {
            if let Err(e) = self
                .state_repository
                .set_last_username(session.username.clone())
                .await
            {
                tracing::warn!("[State] Failed to remember username: {}", e);
            }
        }

        Some(outcome)
    }
}
