//! Access guard — pure pass/redirect decisions for protected views.
//!
//! DESIGN
//! ======
//! The guard is a function of a session snapshot and a view's declared role
//! requirement; it performs no I/O and runs on every navigation. Redirecting
//! an under-privileged-but-authenticated viewer goes to the landing page,
//! not the login page — "wrong role" and "not signed in" are different
//! failure modes and must not be conflated.

use crate::auth::Role;
use crate::session::{Session, SessionPhase};

/// Login entry point for unauthenticated viewers.
pub const LOGIN_PATH: &str = "/login";
/// Default landing page for authenticated viewers.
pub const HOME_PATH: &str = "/";

/// Outcome of an access check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    /// Render the requested view.
    Allow,
    /// Identity is provisional (login or reconciliation in flight); hold
    /// rendering until the session settles.
    Pending,
    /// Not authenticated: go to login, returning here afterwards.
    RedirectToLogin {
        /// Originally requested path, preserved for post-login return.
        return_to: String,
    },
    /// Authenticated but the viewer's role is not in the view's required
    /// set.
    RedirectToHome,
}

/// Decide whether the current session may see `requested_path`.
///
/// `required_roles` of `None` means any authenticated viewer is acceptable;
/// membership is the only check — roles have no ordering.
#[must_use]
pub fn evaluate(
    session: &Session,
    required_roles: Option<&[Role]>,
    requested_path: &str,
) -> AccessDecision {
    match session.phase {
        SessionPhase::Authenticating | SessionPhase::Reconciling => return AccessDecision::Pending,
        SessionPhase::Anonymous | SessionPhase::Authenticated => {}
    }

    let Some(user) = &session.user else {
        return AccessDecision::RedirectToLogin {
            return_to: requested_path.to_owned(),
        };
    };

    match required_roles {
        Some(roles) if !roles.contains(&user.role) => AccessDecision::RedirectToHome,
        _ => AccessDecision::Allow,
    }
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;
