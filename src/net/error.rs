//! Normalized API error shape and error-body sniffing.
//!
//! ERROR HANDLING
//! ==============
//! The backend is not consistent about where it puts its human-readable
//! message (`detail` from validation layers, `message` from handlers,
//! `error.message` from the gateway). [`extract_error_message`] is the one
//! compatibility shim that knows the priority order; error reporting itself
//! must never fail, so an unparseable body falls back to the HTTP status
//! text.

use serde_json::Value;

/// Uniform error returned by every [`crate::net::ApiClient`] call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-success status.
    #[error("api error {status}: {message}")]
    Status {
        /// Exact HTTP status code, always preserved.
        status: u16,
        /// Best-effort human-readable message extracted from the body.
        message: String,
        /// Raw `detail` field from the body, when the server sent one.
        detail: Option<String>,
    },
    /// No response at all — DNS, connection, or CORS failure.
    #[error("network error: {0}")]
    Network(String),
    /// The server reported success but the body did not match the
    /// caller's expected shape.
    #[error("decode error: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status code, if the server produced a response.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// `true` for a 401 response. Callers treat this as "session ended"
    /// rather than special-casing status codes at every call site.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Build a [`ApiError::Status`] from a raw non-success response.
    #[must_use]
    pub fn from_response(status: u16, status_text: &str, body: &str) -> Self {
        let (message, detail) = extract_error_message(body, status_text);
        Self::Status { status, message, detail }
    }
}

/// Extract `(message, detail)` from an error response body.
///
/// Priority order for the message: `detail`, then `message`, then
/// `error.message`; if the body is not JSON or carries none of these,
/// the HTTP status text is used.
#[must_use]
pub fn extract_error_message(body: &str, status_text: &str) -> (String, Option<String>) {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return (status_text.to_owned(), None);
    };

    let detail = value
        .get("detail")
        .and_then(Value::as_str)
        .map(str::to_owned);

    let message = detail
        .clone()
        .or_else(|| value.get("message").and_then(Value::as_str).map(str::to_owned))
        .or_else(|| {
            value
                .get("error")
                .and_then(|e| e.get("message"))
                .and_then(Value::as_str)
                .map(str::to_owned)
        })
        .unwrap_or_else(|| status_text.to_owned());

    (message, detail)
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
