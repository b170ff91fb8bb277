#[cfg(test)]
mod tests {
    use crate::auth::{AuthBackend, AuthError, AuthResult};
    use crate::login::{LoginOrchestrator, LoginOutcome, LoginRequest, LoginState, Submission};
    use crate::session::Session;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use tokio::runtime::Handle;
    use tokio::sync::{Barrier, Notify, mpsc};

    enum Script {
        Accept,
        Reject,
        Fail(&'static str),
        Panic,
    }

    // Mock AuthBackend for testing
    struct ScriptedBackend {
        script: Script,
        gate: Option<Arc<Notify>>,
        calls: AtomicUsize,
        usernames: Mutex<Vec<String>>,
    }

    impl ScriptedBackend {
        fn new(script: Script) -> Self {
            Self {
                script,
                gate: None,
                calls: AtomicUsize::new(0),
                usernames: Mutex::new(Vec::new()),
            }
        }

        fn gated(script: Script, gate: Arc<Notify>) -> Self {
            Self {
                gate: Some(gate),
                ..Self::new(script)
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait::async_trait]
    impl AuthBackend for ScriptedBackend {
        fn current_session(&self) -> Session {
            Session::offline("Player")
        }

        async fn verify_online(&self, username: &str, _password: &str) -> AuthResult<Session> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.usernames.lock().unwrap().push(username.to_string());

            if let Some(gate) = &self.gate {
                gate.notified().await;
            }

            match self.script {
                Script::Accept => Ok(Session::online(username)),
                Script::Reject => Err(AuthError::InvalidCredentials),
                Script::Fail(message) => Err(AuthError::other(message)),
                Script::Panic => panic!("backend exploded"),
            }
        }
    }

    fn setup(
        backend: ScriptedBackend,
    ) -> (
        LoginOrchestrator,
        Arc<ScriptedBackend>,
        mpsc::UnboundedReceiver<LoginOutcome>,
    ) {
        let backend = Arc::new(backend);
        let capability: Arc<dyn AuthBackend> = backend.clone();
        let orchestrator = LoginOrchestrator::from_backend(capability, Handle::current());
        let (tx, rx) = mpsc::unbounded_channel();
        orchestrator.on_outcome(tx);
        (orchestrator, backend, rx)
    }

    async fn settle(submission: Submission) {
        match submission {
            Submission::Pending(pending) => pending.wait().await,
            other => panic!("expected a pending submission, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_store_seeded_from_backend() {
        let (orchestrator, _, _) = setup(ScriptedBackend::new(Script::Accept));

        assert_eq!(orchestrator.current_session(), Session::offline("Player"));
        assert_eq!(orchestrator.state(), LoginState::Idle);
    }

    #[tokio::test]
    async fn test_offline_login_resolves_synchronously() {
        let (orchestrator, backend, mut rx) = setup(ScriptedBackend::new(Script::Accept));

        let submission = orchestrator.submit(LoginRequest::offline("alice"));

        assert!(matches!(submission, Submission::Completed));
        assert_eq!(
            rx.try_recv().unwrap(),
            LoginOutcome::Success(Session::offline("alice"))
        );
        assert_eq!(orchestrator.current_session(), Session::offline("alice"));
        assert_eq!(orchestrator.state(), LoginState::Idle);
        assert_eq!(backend.calls(), 0);
    }

    #[tokio::test]
    async fn test_online_login_success() {
        let (orchestrator, backend, mut rx) = setup(ScriptedBackend::new(Script::Accept));

        settle(orchestrator.submit(LoginRequest::new("bob", "secret"))).await;

        assert_eq!(
            rx.try_recv().unwrap(),
            LoginOutcome::Success(Session::online("bob"))
        );
        assert!(rx.try_recv().is_err(), "exactly one outcome per submission");
        assert_eq!(orchestrator.current_session(), Session::online("bob"));
        assert_eq!(orchestrator.state(), LoginState::Idle);
        assert_eq!(backend.calls(), 1);
    }

    #[tokio::test]
    async fn test_invalid_credentials_keeps_session_and_rearms() {
        let (orchestrator, backend, mut rx) = setup(ScriptedBackend::new(Script::Reject));
        let request = LoginRequest::new("bob", "wrong");

        settle(orchestrator.submit(request.clone())).await;

        assert_eq!(rx.try_recv().unwrap(), LoginOutcome::InvalidCredentials);
        assert_eq!(orchestrator.current_session(), Session::offline("Player"));
        assert_eq!(orchestrator.state(), LoginState::Idle);

        // The same credentials may be retried unchanged.
        settle(orchestrator.submit(request)).await;

        assert_eq!(rx.try_recv().unwrap(), LoginOutcome::InvalidCredentials);
        assert_eq!(backend.calls(), 2);
    }

    #[tokio::test]
    async fn test_generic_failure_carries_message() {
        let (orchestrator, _, mut rx) = setup(ScriptedBackend::new(Script::Fail("timeout")));

        settle(orchestrator.submit(LoginRequest::new("bob", "secret"))).await;

        assert_eq!(
            rx.try_recv().unwrap(),
            LoginOutcome::AuthFailure("timeout".to_string())
        );
        assert_eq!(orchestrator.current_session(), Session::offline("Player"));
    }

    #[tokio::test]
    async fn test_submission_while_in_flight_is_dropped() {
        let gate = Arc::new(Notify::new());
        let (orchestrator, backend, mut rx) =
            setup(ScriptedBackend::gated(Script::Accept, Arc::clone(&gate)));

        let first = orchestrator.submit(LoginRequest::new("bob", "secret"));
        assert_eq!(orchestrator.state(), LoginState::Submitting);

        assert!(matches!(
            orchestrator.submit(LoginRequest::new("carol", "other")),
            Submission::Busy
        ));
        assert!(matches!(
            orchestrator.submit(LoginRequest::offline("dave")),
            Submission::Busy
        ));

        gate.notify_one();
        settle(first).await;

        assert_eq!(backend.calls(), 1);
        assert_eq!(
            rx.try_recv().unwrap(),
            LoginOutcome::Success(Session::online("bob"))
        );
        assert!(rx.try_recv().is_err());
        assert_eq!(orchestrator.state(), LoginState::Idle);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_submissions_admit_exactly_one() {
        const SUBMITTERS: usize = 16;

        let gate = Arc::new(Notify::new());
        let (orchestrator, backend, mut rx) =
            setup(ScriptedBackend::gated(Script::Accept, Arc::clone(&gate)));
        let start = Arc::new(Barrier::new(SUBMITTERS));

        let tasks: Vec<_> = (0..SUBMITTERS)
            .map(|i| {
                let orchestrator = orchestrator.clone();
                let start = Arc::clone(&start);
                tokio::spawn(async move {
                    start.wait().await;
                    orchestrator.submit(LoginRequest::new(format!("user{i}"), "secret"))
                })
            })
            .collect();

        let mut accepted = Vec::new();
        let mut busy = 0;
        for task in tasks {
            match task.await.unwrap() {
                Submission::Pending(pending) => accepted.push(pending),
                Submission::Busy => busy += 1,
                other => panic!("unexpected submission result {other:?}"),
            }
        }

        assert_eq!(accepted.len(), 1);
        assert_eq!(busy, SUBMITTERS - 1);

        gate.notify_one();
        for pending in accepted {
            pending.wait().await;
        }

        assert_eq!(backend.calls(), 1);
        let winner = backend.usernames.lock().unwrap()[0].clone();
        assert_eq!(
            rx.try_recv().unwrap(),
            LoginOutcome::Success(Session::online(winner))
        );
        assert!(rx.try_recv().is_err());
        assert_eq!(orchestrator.state(), LoginState::Idle);
    }

    #[tokio::test]
    async fn test_empty_request_is_rejected() {
        let (orchestrator, backend, mut rx) = setup(ScriptedBackend::new(Script::Accept));

        let submission = orchestrator.submit(LoginRequest::new("", ""));

        assert!(matches!(submission, Submission::Rejected));
        assert!(!submission.is_accepted());
        assert!(rx.try_recv().is_err());
        assert_eq!(backend.calls(), 0);
        assert_eq!(orchestrator.state(), LoginState::Idle);
    }

    #[tokio::test]
    async fn test_empty_username_uses_last_known() {
        let (orchestrator, backend, mut rx) = setup(ScriptedBackend::new(Script::Accept));

        settle(orchestrator.submit(LoginRequest::new("", "secret"))).await;

        assert_eq!(backend.usernames.lock().unwrap().as_slice(), ["Player"]);
        assert_eq!(
            rx.try_recv().unwrap(),
            LoginOutcome::Success(Session::online("Player"))
        );
    }

    #[tokio::test]
    async fn test_panicking_backend_rearms_flow() {
        let (orchestrator, _, mut rx) = setup(ScriptedBackend::new(Script::Panic));

        settle(orchestrator.submit(LoginRequest::new("bob", "secret"))).await;

        assert_eq!(orchestrator.state(), LoginState::Idle);
        assert!(rx.try_recv().is_err());
        assert!(
            orchestrator
                .submit(LoginRequest::offline("bob"))
                .is_accepted()
        );
    }

    #[tokio::test]
    async fn test_registering_handler_replaces_previous() {
        let (orchestrator, _, mut rx) = setup(ScriptedBackend::new(Script::Accept));
        let replaced = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&replaced);
        orchestrator.on_outcome(move |outcome: LoginOutcome| {
            assert!(outcome.is_success());
            counter.fetch_add(1, Ordering::SeqCst);
        });

        orchestrator.submit(LoginRequest::offline("alice"));

        assert_eq!(replaced.load(Ordering::SeqCst), 1);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_submit_without_handler_still_updates_store() {
        let backend: Arc<dyn AuthBackend> = Arc::new(ScriptedBackend::new(Script::Accept));
        let orchestrator = LoginOrchestrator::from_backend(backend, Handle::current());

        orchestrator.submit(LoginRequest::offline("alice"));

        assert_eq!(orchestrator.current_session().username, "alice");
    }

    #[tokio::test]
    async fn test_current_session_has_no_side_effects() {
        let (orchestrator, _, mut rx) = setup(ScriptedBackend::new(Script::Accept));
        orchestrator.submit(LoginRequest::offline("alice"));
        let _ = rx.try_recv();

        let snapshots: Vec<Session> = (0..5).map(|_| orchestrator.current_session()).collect();

        assert!(snapshots.iter().all(|s| *s == Session::offline("alice")));
        assert!(rx.try_recv().is_err());
        assert_eq!(orchestrator.state(), LoginState::Idle);
    }

    #[tokio::test]
    async fn test_can_submit_matches_request() {
        let (orchestrator, _, _) = setup(ScriptedBackend::new(Script::Accept));

        assert!(!orchestrator.can_submit(&LoginRequest::new("", "")));
        assert!(orchestrator.can_submit(&LoginRequest::new("x", "")));
        assert!(orchestrator.can_submit(&LoginRequest::new("", "y")));
    }
}
