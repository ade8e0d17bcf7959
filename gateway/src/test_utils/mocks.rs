//! Mock implementations of port traits

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::entities::{OutboundRequest, RelayedResponse};
use crate::domain::ports::BackendTransport;
use crate::error::RelayError;
use crate::test_utils::fixtures::empty_ok_response;

enum MockReply {
    Respond(RelayedResponse),
    Fail(String),
}

/// In-memory backend that records every outbound request and replays canned
/// replies in order. An exhausted queue answers 200 with an empty body.
#[derive(Default)]
pub struct MockBackend {
    requests: Mutex<Vec<OutboundRequest>>,
    replies: Mutex<VecDeque<MockReply>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a canned response.
    pub fn with_response(self, response: RelayedResponse) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(MockReply::Respond(response));
        self
    }

    /// Queue a transport failure, as seen when the backend is unreachable.
    pub fn with_error(self, message: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(MockReply::Fail(message.to_string()));
        self
    }

    /// Requests the gateway issued, in order.
    pub fn requests(&self) -> Vec<OutboundRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl BackendTransport for MockBackend {
    async fn send(&self, request: OutboundRequest) -> Result<RelayedResponse, RelayError> {
        self.requests.lock().unwrap().push(request);

        match self.replies.lock().unwrap().pop_front() {
            Some(MockReply::Respond(response)) => Ok(response),
            Some(MockReply::Fail(message)) => Err(RelayError::Connection(message)),
            None => Ok(empty_ok_response()),
        }
    }
}
