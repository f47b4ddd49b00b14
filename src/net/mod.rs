//! HTTP plumbing — the single chokepoint for all outbound API calls.
//!
//! DESIGN
//! ======
//! Every feature in the application talks to the server through
//! [`ApiClient`], so request headers (`Content-Type`, cookie inclusion) and
//! error normalization live in exactly one place. The raw byte-moving is
//! behind the [`Transport`] trait so tests can inject canned responses; the
//! browser implementation (`gloo-net`) only exists under the `hydrate`
//! feature.

pub mod error;
pub mod http;
pub mod transport;

pub use error::ApiError;
pub use http::ApiClient;
pub use transport::{Method, RawResponse, Transport, TransportError};

#[cfg(feature = "hydrate")]
pub use transport::BrowserTransport;

#[cfg(test)]
pub(crate) mod mock;
