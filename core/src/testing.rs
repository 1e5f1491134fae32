//! Recording transport for unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::client::PocketSmithClient;
use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::http::{HttpRequest, HttpResponse, Transport};

/// Replays queued responses in order and records every request it sees.
#[derive(Default)]
pub(crate) struct StubTransport {
    responses: Mutex<VecDeque<Result<HttpResponse>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl StubTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond(self, status: u16, body: &str) -> Self {
        self.responses.lock().unwrap().push_back(Ok(HttpResponse {
            status,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: body.as_bytes().to_vec(),
        }));
        self
    }

    pub(crate) fn fail(self, message: &str) -> Self {
        let err = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, message.to_string());
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(ClientError::Transport(Box::new(err))));
        self
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn last_request(&self) -> HttpRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

impl Transport for StubTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected request: {} {}", request.method, request.url))
    }
}

pub(crate) fn stub_client(transport: StubTransport) -> PocketSmithClient<StubTransport> {
    PocketSmithClient::with_transport(ClientConfig::new("test-key"), transport)
}
