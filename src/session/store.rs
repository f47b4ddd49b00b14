//! The session state machine and its single-writer store.
//!
//! INVARIANT
//! =========
//! "Is authenticated" is derived from `user.is_some()` and is never stored
//! as an independent flag, so the two can never disagree. The only code that
//! writes the triple is the store's own primitives; [`set_user`] keeps the
//! phase consistent in one place so no caller can produce a half-state.
//!
//! [`set_user`]: SessionStore::set_user

use std::cell::{Cell, RefCell};

use crate::auth::User;

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    /// No user; nothing in flight.
    #[default]
    Anonymous,
    /// A login exchange is in flight.
    Authenticating,
    /// A cached user was rehydrated and is being revalidated against the
    /// server. The identity may be shown provisionally but must not pass
    /// access-control checks until reconciliation settles.
    Reconciling,
    /// The server has confirmed the current cookie identifies this user.
    Authenticated,
}

/// Read-only snapshot of the session triple.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub user: Option<User>,
    pub phase: SessionPhase,
    pub loading: bool,
}

impl Session {
    /// Derived, never stored: a user is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Single-writer store for the process-wide session.
///
/// Interior-mutable (`RefCell`) because the client is single-threaded
/// event-loop code; consumers share it behind an `Rc`.
#[derive(Default)]
pub struct SessionStore {
    state: RefCell<Session>,
    mutation_in_flight: Cell<bool>,
}

impl SessionStore {
    /// Fresh store in the `Anonymous` state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clone of the current state.
    #[must_use]
    pub fn snapshot(&self) -> Session {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn user(&self) -> Option<User> {
        self.state.borrow().user.clone()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.state.borrow().phase
    }

    /// Set or clear the user. `Some` moves the phase to `Authenticated`,
    /// `None` to `Anonymous`; there is no way to set one without the other.
    pub(crate) fn set_user(&self, user: Option<User>) {
        let mut state = self.state.borrow_mut();
        state.phase = if user.is_some() {
            SessionPhase::Authenticated
        } else {
            SessionPhase::Anonymous
        };
        state.user = user;
    }

    /// Mark an authentication-affecting operation in flight.
    pub(crate) fn set_loading(&self, loading: bool) {
        self.state.borrow_mut().loading = loading;
    }

    /// Enter `Authenticating` without touching the user.
    pub(crate) fn begin_authenticating(&self) {
        self.state.borrow_mut().phase = SessionPhase::Authenticating;
    }

    /// Install a provisionally-trusted cached user and enter `Reconciling`.
    pub(crate) fn begin_rehydrated(&self, user: User) {
        let mut state = self.state.borrow_mut();
        state.user = Some(user);
        state.phase = SessionPhase::Reconciling;
    }

    /// Single-flight latch for session-mutating operations. Returns `false`
    /// if another mutation is already in flight; the caller must skip its
    /// work and report current state instead of racing.
    pub(crate) fn try_begin_mutation(&self) -> bool {
        if self.mutation_in_flight.get() {
            return false;
        }
        self.mutation_in_flight.set(true);
        true
    }

    /// Release the single-flight latch.
    pub(crate) fn end_mutation(&self) {
        self.mutation_in_flight.set(false);
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
