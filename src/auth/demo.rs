//! Demo credential allow-list for local development.
//!
//! TRUST BOUNDARY
//! ==============
//! This path never touches the server and issues no cookie; it exists so the
//! dashboard can be demoed without a configured identity provider. It is
//! inert unless `ApiConfig::allow_demo_login` is set and must never be
//! enabled in a production build.

use uuid::Uuid;

use super::{Role, User};

struct DemoAccount {
    email: &'static str,
    password: &'static str,
    display_name: &'static str,
    role: Role,
}

const DEMO_ACCOUNTS: &[DemoAccount] = &[
    DemoAccount {
        email: "demo@example.com",
        password: "demo123",
        display_name: "Demo Teammate",
        role: Role::Team,
    },
    DemoAccount {
        email: "owner@example.com",
        password: "owner123",
        display_name: "Demo Owner",
        role: Role::Owner,
    },
    DemoAccount {
        email: "client@example.com",
        password: "client123",
        display_name: "Demo Client",
        role: Role::ClientPremium,
    },
];

const DEMO_TIMESTAMP: &str = "2024-01-01T00:00:00Z";

/// Check `email`/`password` against the fixed allow-list and synthesize a
/// user record on a match.
#[must_use]
pub fn verify(email: &str, password: &str) -> Option<User> {
    let account = DEMO_ACCOUNTS
        .iter()
        .find(|a| a.email == email && a.password == password)?;

    Some(User {
        id: Uuid::new_v4(),
        email: account.email.to_owned(),
        display_name: account.display_name.to_owned(),
        role: account.role,
        avatar_url: None,
        created_at: DEMO_TIMESTAMP.to_owned(),
        updated_at: DEMO_TIMESTAMP.to_owned(),
    })
}

#[cfg(test)]
#[path = "demo_test.rs"]
mod tests;
