//! Session lifecycle operations over the store and the auth API.
//!
//! ERROR HANDLING
//! ==============
//! Every operation here resolves to a bool or a state change, never an
//! `Err`. "No session" is an expected outcome, not an exception, so
//! transport and server errors are logged and swallowed at this boundary;
//! feature-level calls that want the normalized error go through
//! [`crate::net::ApiClient`] directly.

use std::rc::Rc;

use crate::auth::{AuthApi, User, demo};
use crate::net::{ApiClient, ApiError};

use super::cache::SessionCache;
use super::store::SessionStore;

/// Dependency-injected session context: owns the store, drives the state
/// machine, and is the only writer of session state.
pub struct SessionService {
    api: AuthApi,
    store: SessionStore,
    cache: Box<dyn SessionCache>,
    allow_demo_login: bool,
}

impl SessionService {
    #[must_use]
    pub fn new(client: Rc<ApiClient>, cache: Box<dyn SessionCache>) -> Self {
        let allow_demo_login = client.config().allow_demo_login;
        Self {
            api: AuthApi::new(client),
            store: SessionStore::new(),
            cache,
            allow_demo_login,
        }
    }

    /// The session store, for reading state. All mutation goes through the
    /// operations on this service.
    #[must_use]
    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Exchange a Google id-token for a session. Returns whether the
    /// session ended up authenticated.
    ///
    /// On failure no partial user data survives; the store returns to
    /// `Anonymous`. A login issued while another session mutation is in
    /// flight is ignored rather than raced.
    pub async fn login_with_google(&self, id_token: &str) -> bool {
        if !self.store.try_begin_mutation() {
            log::warn!("session mutation in flight; ignoring concurrent login");
            return self.store.is_authenticated();
        }

        self.store.begin_authenticating();
        self.store.set_loading(true);
        let result = self.api.login_with_google(id_token).await;
        let authenticated = self.apply_session_result(result, "google login");
        self.store.set_loading(false);
        self.store.end_mutation();
        authenticated
    }

    /// Demo allow-list login. Inert unless enabled in [`crate::config::ApiConfig`];
    /// issues no cookie and talks to no server.
    pub fn login_with_password(&self, email: &str, password: &str) -> bool {
        if !self.allow_demo_login {
            log::warn!("demo login attempted but not enabled");
            return false;
        }

        match demo::verify(email, password) {
            Some(user) => {
                self.cache.store(&user);
                self.store.set_user(Some(user));
                true
            }
            None => {
                log::warn!("demo login rejected for {email}");
                self.cache.clear();
                self.store.set_user(None);
                false
            }
        }
    }

    /// End the session. Local teardown is unconditional and happens before
    /// the network call: the user asked to leave, so the UI must never stay
    /// authenticated because the server was unreachable. Server-side cookie
    /// invalidation is best-effort.
    pub async fn logout(&self) {
        self.store.set_user(None);
        self.store.set_loading(false);
        self.cache.clear();

        if let Err(e) = self.api.logout().await {
            log::warn!("server-side logout failed: {e}");
        }
    }

    /// Revalidate the session against the server's authoritative identity.
    ///
    /// Success replaces the user with the server's record; any failure —
    /// including a plain network error — clears the session, regardless of
    /// what local (possibly rehydrated) state believed. Concurrent calls
    /// collapse into the one already in flight.
    pub async fn reconcile(&self) -> bool {
        if !self.store.try_begin_mutation() {
            log::debug!("session mutation in flight; skipping reconciliation");
            return self.store.is_authenticated();
        }

        self.store.set_loading(true);
        let result = self.api.current_user().await;
        let authenticated = self.apply_session_result(result, "session reconciliation");
        self.store.set_loading(false);
        self.store.end_mutation();
        authenticated
    }

    /// Ask the server to rotate/extend the session cookie. Outcomes are
    /// interpreted exactly like [`reconcile`](Self::reconcile): inability
    /// to refresh tears the session down.
    pub async fn refresh(&self) -> bool {
        if !self.store.try_begin_mutation() {
            log::debug!("session mutation in flight; skipping refresh");
            return self.store.is_authenticated();
        }

        self.store.set_loading(true);
        let result = self.api.refresh_session().await;
        let authenticated = self.apply_session_result(result, "session refresh");
        self.store.set_loading(false);
        self.store.end_mutation();
        authenticated
    }

    /// Boot-time restore: install the cached user provisionally
    /// (`Reconciling`), then confirm it with the server. Returns the
    /// settled authentication state.
    pub async fn rehydrate(&self) -> bool {
        if let Some(user) = self.cache.load() {
            self.store.begin_rehydrated(user);
        }
        self.reconcile().await
    }

    fn apply_session_result(&self, result: Result<User, ApiError>, operation: &str) -> bool {
        match result {
            Ok(user) => {
                self.cache.store(&user);
                self.store.set_user(Some(user));
                true
            }
            Err(e) => {
                log::warn!("{operation} failed: {e}");
                self.cache.clear();
                self.store.set_user(None);
                false
            }
        }
    }
}

#[cfg(test)]
#[path = "service_test.rs"]
mod tests;
