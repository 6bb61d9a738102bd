#![allow(dead_code)]

// A recording transport for exercising the client without a network

use addresscheck::{AddressCheck, RawResponse, Transport, TransportFailure};
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Method, Request};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// What the client handed to the transport
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub timeout: Option<Duration>,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// URL path without the query string
    pub fn path(&self) -> String {
        reqwest::Url::parse(&self.url)
            .map(|url| url.path().to_string())
            .unwrap_or_default()
    }
}

/// Replays queued outcomes in order and records every request.
///
/// When the queue runs dry it answers `200 application/json {}`.
#[derive(Clone, Default)]
pub struct MockTransport {
    outcomes: Arc<Mutex<VecDeque<Result<RawResponse, TransportFailure>>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond_with(self, response: RawResponse) -> Self {
        self.outcomes.lock().unwrap().push_back(Ok(response));
        self
    }

    pub fn respond_json(self, status: u16, body: &str) -> Self {
        self.respond_with(RawResponse::with_body(status, "application/json", body))
    }

    pub fn fail_with(self, failure: TransportFailure) -> Self {
        self.outcomes.lock().unwrap().push_back(Err(failure));
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.requests.lock().unwrap().last().cloned()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: Request) -> Result<RawResponse, TransportFailure> {
        self.requests.lock().unwrap().push(RecordedRequest {
            method: request.method().clone(),
            url: request.url().to_string(),
            headers: request.headers().clone(),
            timeout: request.timeout().copied(),
        });

        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(RawResponse::with_body(200, "application/json", "{}")))
    }
}

/// A client with test credentials wired to a fresh mock transport
pub fn mock_client(transport: MockTransport) -> AddressCheck {
    AddressCheck::new("user", "pass")
        .expect("client should build")
        .with_transport(transport)
}
