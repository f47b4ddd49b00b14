//! Authentication service — thin, stateless operations over the API client.
//!
//! ARCHITECTURE
//! ============
//! Google sign-in exchanges a third-party identity token for a session; the
//! server answers with the user record and sets the session cookie as a
//! response-header side effect. Nothing here stores or inspects credential
//! material, and nothing here retries or caches — interpreting outcomes is
//! the session store's job.

pub mod demo;

use std::rc::Rc;

use uuid::Uuid;

use crate::net::{ApiClient, ApiError};

/// Authoritative identity fetch / session probe.
pub const ME_PATH: &str = "/api/v1/auth/me";
/// Google id-token exchange.
pub const GOOGLE_PATH: &str = "/api/v1/auth/google";
/// Cookie-based session rotation.
pub const REFRESH_PATH: &str = "/api/v1/auth/refresh";
/// Server-side session invalidation.
pub const LOGOUT_PATH: &str = "/api/v1/auth/logout";

/// Viewer role. Checks against a view's required set are membership only;
/// no ordering between roles is modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Owner,
    Team,
    ClientPremium,
    ClientBasic,
}

/// User record as the server reports it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Login email.
    pub email: String,
    /// Name shown in the UI.
    pub display_name: String,
    /// Viewer role.
    pub role: Role,
    /// Avatar image URL, if available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// Creation timestamp (RFC 3339).
    pub created_at: String,
    /// Last-update timestamp (RFC 3339).
    pub updated_at: String,
}

#[derive(Debug, serde::Deserialize)]
struct AuthEnvelope {
    user: User,
}

/// Named authentication operations. Stateless; every call is a pass-through
/// to the API client.
pub struct AuthApi {
    client: Rc<ApiClient>,
}

impl AuthApi {
    #[must_use]
    pub fn new(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    #[must_use]
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Exchange a Google id-token for a session.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the exchange is rejected or unreachable.
    pub async fn login_with_google(&self, id_token: &str) -> Result<User, ApiError> {
        let body = serde_json::json!({ "id_token": id_token });
        let envelope: AuthEnvelope = self.client.post(GOOGLE_PATH, Some(&body)).await?;
        Ok(envelope.user)
    }

    /// Rotate/extend the session riding on the current cookie.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if there is no refreshable session.
    pub async fn refresh_session(&self) -> Result<User, ApiError> {
        let envelope: AuthEnvelope = self
            .client
            .post::<AuthEnvelope, serde_json::Value>(REFRESH_PATH, None)
            .await?;
        Ok(envelope.user)
    }

    /// Ask the server to invalidate the session and its cookie.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on failure; callers ending the session
    /// locally do not need this call to succeed.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let _: serde_json::Value = self
            .client
            .post::<serde_json::Value, serde_json::Value>(LOGOUT_PATH, None)
            .await?;
        Ok(())
    }

    /// Fetch the authoritative identity for the current cookie.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if no valid session exists.
    pub async fn current_user(&self) -> Result<User, ApiError> {
        self.client.get(ME_PATH, &[]).await
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
