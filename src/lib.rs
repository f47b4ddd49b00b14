//! # studio-client
//!
//! Session and API-communication layer for the studio content-production
//! dashboard. The UI crates sit on top of this one: they call [`net::ApiClient`]
//! for feature data, drive authentication through [`session::SessionService`],
//! and ask [`guard`] whether a protected view may render.
//!
//! ARCHITECTURE
//! ============
//! The session cookie is set and rotated by the server and is never readable
//! from client script. This crate's only contact with credential material is
//! asking the browser to include cookies on every request; no token is ever
//! stored, parsed, or logged here. Session state itself is a small state
//! machine ([`session::SessionStore`]) with a single-writer API surface,
//! injected into consumers rather than reached through globals.
//!
//! Browser-only pieces (the `gloo-net` transport, localStorage persistence,
//! console logging) are gated behind the `hydrate` feature so the state
//! machine and error normalization stay natively testable.

pub mod auth;
pub mod config;
pub mod guard;
pub mod net;
pub mod session;

/// Install the console logger and panic hook. Call once at hydration time.
#[cfg(feature = "hydrate")]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
}
