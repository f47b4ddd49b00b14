//! Transport seam between [`crate::net::ApiClient`] and the browser.
//!
//! The trait is `?Send` because browser futures are not `Send`; tests and
//! native consumers run on a current-thread executor anyway.

/// HTTP methods the API layer uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// A fully-built outbound request: absolute URL, optional JSON body.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<String>,
}

/// Raw response before normalization.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl RawResponse {
    /// Whether the status is in the 2xx success range.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request never produced a response.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Async byte-mover. Mockable in tests, `gloo-net` in the browser.
#[async_trait::async_trait(?Send)]
pub trait Transport {
    /// Send the request and return the raw response.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] only when no response arrived at all;
    /// non-success statuses are a successful transport outcome.
    async fn send(&self, request: TransportRequest) -> Result<RawResponse, TransportError>;
}

/// Browser transport over `gloo-net`. Cookies are always included so the
/// server-managed session cookie rides along; this crate never sees it.
#[cfg(feature = "hydrate")]
pub struct BrowserTransport;

#[cfg(feature = "hydrate")]
#[async_trait::async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn send(&self, request: TransportRequest) -> Result<RawResponse, TransportError> {
        use gloo_net::http::Request;

        let builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Patch => Request::patch(&request.url),
            Method::Delete => Request::delete(&request.url),
        }
        .header("Content-Type", "application/json")
        .credentials(web_sys::RequestCredentials::Include);

        let built = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| TransportError(e.to_string()))?;

        let resp = built
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;

        let status = resp.status();
        let status_text = resp.status_text();
        let body = resp.text().await.unwrap_or_default();

        Ok(RawResponse { status, status_text, body })
    }
}
