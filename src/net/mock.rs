//! Canned-response [`Transport`] for tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use super::transport::{RawResponse, Transport, TransportError, TransportRequest};

/// Queue-backed transport: each `send` pops the next canned outcome and
/// records the request it saw.
#[derive(Default)]
pub(crate) struct MockTransport {
    responses: RefCell<VecDeque<Result<RawResponse, TransportError>>>,
    requests: RefCell<Vec<TransportRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with an arbitrary status and body.
    pub fn push_response(&self, status: u16, status_text: &str, body: &str) {
        self.responses.borrow_mut().push_back(Ok(RawResponse {
            status,
            status_text: status_text.to_owned(),
            body: body.to_owned(),
        }));
    }

    /// Queue a `200 OK` JSON response.
    pub fn push_ok(&self, body: &str) {
        self.push_response(200, "OK", body);
    }

    /// Queue a transport-level failure (no response at all).
    pub fn push_network_error(&self, message: &str) {
        self.responses
            .borrow_mut()
            .push_back(Err(TransportError(message.to_owned())));
    }

    /// Requests seen so far, in order.
    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.borrow().clone()
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: TransportRequest) -> Result<RawResponse, TransportError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError("no canned response queued".to_owned())))
    }
}
