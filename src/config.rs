//! API configuration resolved at build time.
//!
//! The WASM client has no process environment at runtime, so the base URL is
//! baked in via `option_env!` when the bundle is compiled. Native consumers
//! (tests, tooling) construct [`ApiConfig`] directly instead.

/// Compile-time override for the API origin.
const BASE_URL: Option<&str> = option_env!("STUDIO_API_URL");

/// Compile-time switch for the demo credential path.
const DEMO_LOGIN: Option<&str> = option_env!("STUDIO_DEMO_LOGIN");

/// Default API origin for local development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Client-wide API configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Origin the API is served from, without a trailing slash.
    pub base_url: String,
    /// Whether the fixed-allow-list demo login is reachable. Never enabled
    /// in production builds; the demo path is a development convenience,
    /// not an authentication mechanism.
    pub allow_demo_login: bool,
}

impl ApiConfig {
    /// Build the configuration from compile-time environment variables,
    /// falling back to the local development defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            base_url: BASE_URL
                .unwrap_or(DEFAULT_BASE_URL)
                .trim_end_matches('/')
                .to_owned(),
            allow_demo_login: matches!(DEMO_LOGIN, Some("1" | "true")),
        }
    }

    /// Configuration pointing at an explicit origin, demo login off.
    #[must_use]
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            allow_demo_login: false,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
