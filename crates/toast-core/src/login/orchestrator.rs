use super::classifier::AuthOutcomeClassifier;
use super::outcome::{LoginOutcome, OutcomeHandler};
use super::request::LoginRequest;
use crate::auth::AuthBackend;
use crate::session::{Session, SessionStore};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use strum::Display;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Where the login flow currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum LoginState {
    /// Ready to accept a submission.
    Idle,
    /// An attempt is in flight; further submissions are dropped.
    Submitting,
}

/// What `submit` did with a request.
///
/// This is returned immediately and is not the outcome: outcomes are only
/// ever delivered to the registered [`OutcomeHandler`].
#[derive(Debug)]
pub enum Submission {
    /// Both username and password were empty; nothing happened.
    Rejected,
    /// Another attempt was in flight; the request was dropped.
    Busy,
    /// Offline login, already resolved and delivered.
    Completed,
    /// Online verification dispatched.
    Pending(PendingLogin),
}

impl Submission {
    /// True if the request was taken (not rejected or dropped).
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Completed | Self::Pending(_))
    }
}

/// Handle to an online attempt that has been dispatched.
///
/// Dropping it detaches the attempt; it still runs to completion.
#[derive(Debug)]
pub struct PendingLogin {
    task: JoinHandle<()>,
}

impl PendingLogin {
    /// Waits until the outcome has been delivered and the flow is idle again.
    pub async fn wait(self) {
        if let Err(err) = self.task.await {
            tracing::warn!("[Login] Verification task ended abnormally: {}", err);
        }
    }
}

/// Drives login submissions and keeps the session store current.
///
/// `LoginOrchestrator` is responsible for:
/// - Rejecting empty submissions
/// - Guaranteeing at most one attempt in flight (single-flight)
/// - Resolving offline logins synchronously
/// - Dispatching online verification onto the host runtime
/// - Delivering exactly one [`LoginOutcome`] per accepted submission
///
/// Clones share the same state.
#[derive(Clone)]
pub struct LoginOrchestrator {
    inner: Arc<Inner>,
}

struct Inner {
    store: SessionStore,
    backend: Arc<dyn AuthBackend>,
    runtime: Handle,
    in_flight: AtomicBool,
    handler: RwLock<Option<Arc<dyn OutcomeHandler>>>,
}

impl LoginOrchestrator {
    /// Creates an orchestrator over an existing session store.
    ///
    /// # Arguments
    ///
    /// * `store` - The live session slot, shared with the UI
    /// * `backend` - The credential verification capability
    /// * `runtime` - Where online verification runs; the orchestrator never
    ///   creates threads of its own
    pub fn new(store: SessionStore, backend: Arc<dyn AuthBackend>, runtime: Handle) -> Self {
        Self {
            inner: Arc::new(Inner {
                store,
                backend,
                runtime,
                in_flight: AtomicBool::new(false),
                handler: RwLock::new(None),
            }),
        }
    }

    /// Creates an orchestrator with a store seeded from `backend.current_session()`.
    pub fn from_backend(backend: Arc<dyn AuthBackend>, runtime: Handle) -> Self {
        let store = SessionStore::new(backend.current_session());
        Self::new(store, backend, runtime)
    }

    /// Returns the live session.
    pub fn current_session(&self) -> Session {
        self.inner.store.current()
    }

    pub fn state(&self) -> LoginState {
        if self.inner.in_flight.load(Ordering::Acquire) {
            LoginState::Submitting
        } else {
            LoginState::Idle
        }
    }

    /// True iff username or password is non-empty.
    pub fn can_submit(&self, request: &LoginRequest) -> bool {
        request.can_submit()
    }

    /// Registers the sole consumer of delivered outcomes, replacing any
    /// previous one.
    pub fn on_outcome<H>(&self, handler: H)
    where
        H: OutcomeHandler + 'static,
    {
        let mut slot = self
            .inner
            .handler
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *slot = Some(Arc::new(handler));
    }

    /// Submits a login request. Never blocks.
    ///
    /// An empty password logs in offline and delivers the outcome before
    /// returning. Otherwise verification is spawned and the outcome arrives
    /// later; the flow stays `Submitting` until that outcome has been handed
    /// to the handler, so a handler that submits again is dropped as busy.
    pub fn submit(&self, request: LoginRequest) -> Submission {
        if !request.can_submit() {
            tracing::debug!("[Login] Ignoring empty submission");
            return Submission::Rejected;
        }

        let Some(guard) = InFlightGuard::acquire(&self.inner) else {
            tracing::debug!("[Login] Attempt already in flight, dropping submission");
            return Submission::Busy;
        };

        let LoginRequest { username, password } = request;
        let username = if username.is_empty() {
            self.inner.store.last_username()
        } else {
            username
        };

        if password.is_empty() {
            let session = Session::offline(username);
            self.inner.store.replace(session.clone());
            tracing::info!("[Login] Playing offline as {}", session.username);
            self.inner.deliver(LoginOutcome::Success(session));
            drop(guard);
            return Submission::Completed;
        }

        tracing::info!("[Login] Verifying {} online", username);
        let inner = Arc::clone(&self.inner);
        let task = self.inner.runtime.spawn(async move {
            let _guard = guard;

            let outcome = match inner.backend.verify_online(&username, &password).await {
                Ok(session) => {
                    tracing::info!("[Login] Logged in online as {}", session.username);
                    inner.store.replace(session.clone());
                    LoginOutcome::Success(session)
                }
                Err(err) => {
                    tracing::warn!("[Login] Online login for {} failed: {}", username, err);
                    AuthOutcomeClassifier::classify(&err)
                }
            };

            inner.deliver(outcome);
        });

        Submission::Pending(PendingLogin { task })
    }
}

impl Inner {
    fn deliver(&self, outcome: LoginOutcome) {
        let handler = self
            .handler
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        match handler {
            Some(handler) => handler.handle(outcome),
            None => tracing::debug!("[Login] No outcome handler registered, dropping {:?}", outcome),
        }
    }
}

/// Owns the single-flight flag for the lifetime of one attempt.
///
/// Released on drop, so an attempt that panics or whose task is dropped by a
/// shutting-down runtime still re-arms the flow.
struct InFlightGuard {
    inner: Arc<Inner>,
}

impl InFlightGuard {
    fn acquire(inner: &Arc<Inner>) -> Option<Self> {
        inner
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self {
                inner: Arc::clone(inner),
            })
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.inner.in_flight.store(false, Ordering::Release);
    }
}
