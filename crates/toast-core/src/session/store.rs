use super::model::Session;
use std::sync::{Arc, PoisonError, RwLock};

/// Holds the single live [`Session`].
///
/// `SessionStore` is a cheap handle: clones share the same slot, so the
/// component that composes the login flow owns one and hands clones to the
/// orchestrator and the UI. Reads and swaps are safe from any thread.
#[derive(Debug, Clone)]
pub struct SessionStore {
    current: Arc<RwLock<Session>>,
}

impl SessionStore {
    /// Creates a store seeded with the given session.
    pub fn new(initial: Session) -> Self {
        Self {
            current: Arc::new(RwLock::new(initial)),
        }
    }

    /// Returns the live session.
    ///
    /// Never fails: a lock poisoned by a panicking writer still holds a
    /// complete session value, so it is read through.
    pub fn current(&self) -> Session {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Swaps in `session` and returns the one it replaced.
    pub fn replace(&self, session: Session) -> Session {
        let mut slot = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *slot, session)
    }

    /// Username of the live session, used as the fallback for empty input.
    pub fn last_username(&self) -> String {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .username
            .clone()
    }
}
