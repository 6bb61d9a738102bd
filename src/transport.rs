// Transport seam between request construction and normalization

use crate::response::RawResponse;
use crate::types::*;
use async_trait::async_trait;
use reqwest::{header, Client as HttpClient, Request};

/// A connection-level failure: nothing usable came back from the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportFailure {
    pub kind: TransportErrorKind,
    pub code: u32,
    pub message: String,
    /// Status of a partial response seen before the failure, if any
    pub status: Option<u16>,
}

impl TransportFailure {
    pub fn new(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            code: kind.code(),
            message: message.into(),
            status: None,
        }
    }

    /// Override the numeric code, e.g. with one reported by a foreign HTTP stack
    pub fn with_code(mut self, code: u32) -> Self {
        self.code = code;
        self
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }
}

impl From<reqwest::Error> for TransportFailure {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            TransportErrorKind::Timeout
        } else if err.is_connect() {
            TransportErrorKind::Connect
        } else if err.is_redirect() {
            TransportErrorKind::Redirect
        } else if err.is_body() || err.is_decode() {
            TransportErrorKind::Body
        } else if err.is_request() || err.is_builder() {
            TransportErrorKind::Request
        } else {
            TransportErrorKind::Other
        };

        let failure = TransportFailure::new(kind, err.to_string());
        match err.status() {
            Some(status) => failure.with_status(status.as_u16()),
            None => failure,
        }
    }
}

impl From<TransportFailure> for AddressCheckError {
    fn from(failure: TransportFailure) -> Self {
        AddressCheckError::transport_error(failure.kind, failure.code, failure.message, failure.status)
    }
}

/// Executes one fully built request and reports what came back.
///
/// Implementations must not retry and must not interpret the status code.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: Request) -> Result<RawResponse, TransportFailure>;
}

/// Default transport backed by a shared reqwest client
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    http_client: HttpClient,
}

impl ReqwestTransport {
    pub fn new(http_client: HttpClient) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: Request) -> Result<RawResponse, TransportFailure> {
        let response = self.http_client.execute(request).await?;

        let status_code = response.status().as_u16();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();

        let body = response
            .bytes()
            .await
            .map_err(|e| TransportFailure::from(e).with_status(status_code))?;

        Ok(RawResponse::new(
            status_code,
            content_type,
            if body.is_empty() { None } else { Some(body) },
        ))
    }
}
