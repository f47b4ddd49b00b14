//! Session state — the one stateful piece of the client.
//!
//! DESIGN
//! ======
//! [`SessionStore`] owns the `{user, phase, loading}` triple with a
//! single-writer API surface; everything else in the application reads it
//! live and never holds its own copy of the user. [`SessionService`] drives
//! the state machine over the authentication API and is handed to consumers
//! explicitly rather than living in a global. [`SessionCache`] persists the
//! non-sensitive user record across reloads as a hint only — a rehydrated
//! session is provisional until reconciled against the server.

pub mod cache;
pub mod service;
pub mod store;

pub use cache::{MemoryCache, SessionCache};
pub use service::SessionService;
pub use store::{Session, SessionPhase, SessionStore};

#[cfg(feature = "hydrate")]
pub use cache::LocalStorageCache;
