//! The API client: request building, cookie semantics, normalization.
//!
//! DESIGN
//! ======
//! Callers name the response shape they expect (`client.get::<Project>(..)`)
//! and receive either that value or an [`ApiError`]; no raw responses leak
//! past this module. An empty success body decodes as `{}` because several
//! mutation endpoints answer `204`-style with nothing.

use std::fmt::Write as _;
use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;

use super::error::ApiError;
use super::transport::{Method, Transport, TransportRequest};

/// Single chokepoint for all outbound API calls.
pub struct ApiClient {
    config: ApiConfig,
    transport: Rc<dyn Transport>,
}

impl ApiClient {
    /// Build a client over an explicit transport.
    #[must_use]
    pub fn new(config: ApiConfig, transport: Rc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    /// Build a client over the browser transport.
    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn browser(config: ApiConfig) -> Self {
        Self::new(config, Rc::new(super::transport::BrowserTransport))
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// `GET path?params`. Params with a `None` value are omitted entirely.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on any non-2xx status, transport failure,
    /// or unexpected response shape.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, Option<String>)],
    ) -> Result<T, ApiError> {
        self.request(Method::Get, path, params, None).await
    }

    /// `POST path` with an optional JSON body.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on any non-2xx status, transport failure,
    /// or unexpected response shape.
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError> {
        let body = encode_body(body)?;
        self.request(Method::Post, path, &[], body).await
    }

    /// `PUT path` with an optional JSON body.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on any non-2xx status, transport failure,
    /// or unexpected response shape.
    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError> {
        let body = encode_body(body)?;
        self.request(Method::Put, path, &[], body).await
    }

    /// `PATCH path` with an optional JSON body.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on any non-2xx status, transport failure,
    /// or unexpected response shape.
    pub async fn patch<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError> {
        let body = encode_body(body)?;
        self.request(Method::Patch, path, &[], body).await
    }

    /// `DELETE path`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on any non-2xx status, transport failure,
    /// or unexpected response shape.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(Method::Delete, path, &[], None).await
    }

    /// Lightweight authenticated probe: does the current cookie identify a
    /// user? Reduces every outcome (network failure included) to a bool and
    /// never errors.
    pub async fn check_auth(&self) -> bool {
        self.get::<serde_json::Value>(crate::auth::ME_PATH, &[])
            .await
            .is_ok()
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        params: &[(&str, Option<String>)],
        body: Option<String>,
    ) -> Result<T, ApiError> {
        let url = build_url(&self.config.base_url, path, params);
        log::debug!("{} {url}", method.as_str());
        let raw = self
            .transport
            .send(TransportRequest { method, url, body })
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !raw.is_success() {
            return Err(ApiError::from_response(raw.status, &raw.status_text, &raw.body));
        }

        let text = if raw.body.trim().is_empty() { "{}" } else { raw.body.as_str() };
        serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

fn encode_body<B: Serialize>(body: Option<&B>) -> Result<Option<String>, ApiError> {
    body.map(|b| serde_json::to_string(b).map_err(|e| ApiError::Decode(e.to_string())))
        .transpose()
}

/// Join origin, path and query string. `None` params are dropped, not
/// serialized as empty values.
#[must_use]
pub fn build_url(base_url: &str, path: &str, params: &[(&str, Option<String>)]) -> String {
    let mut url = format!("{base_url}{path}");
    let mut sep = '?';
    for (key, value) in params {
        if let Some(value) = value {
            let _ = write!(url, "{sep}{key}={}", encode_component(value));
            sep = '&';
        }
    }
    url
}

/// Minimal percent-encoding for query values.
fn encode_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for b in value.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char);
            }
            _ => {
                let _ = write!(out, "%{b:02X}");
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;
