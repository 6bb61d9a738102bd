// Core types and errors

use bytes::Bytes;
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// The result type used throughout the AddressCheck client
pub type AddressCheckResult<T> = Result<T, AddressCheckError>;

/// Body formats the normalizer knows how to decode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyFormat {
    Json,
    Xml,
}

impl BodyFormat {
    /// Pick a decoder by substring match on the content type.
    ///
    /// `json` wins over `xml` when both appear, e.g. `application/json+xml`.
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        let content_type = content_type.to_ascii_lowercase();
        if content_type.contains("json") {
            Some(BodyFormat::Json)
        } else if content_type.contains("xml") {
            Some(BodyFormat::Xml)
        } else {
            None
        }
    }
}

impl fmt::Display for BodyFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BodyFormat::Json => f.write_str("JSON"),
            BodyFormat::Xml => f.write_str("XML"),
        }
    }
}

/// Classification of connection-level failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportErrorKind {
    Connect,
    Timeout,
    Redirect,
    Request,
    Body,
    Other,
}

impl TransportErrorKind {
    /// Numeric code for this kind, following libcurl's error numbering.
    pub fn code(&self) -> u32 {
        match self {
            TransportErrorKind::Connect => 7,
            TransportErrorKind::Timeout => 28,
            TransportErrorKind::Redirect => 47,
            TransportErrorKind::Request => 3,
            TransportErrorKind::Body => 56,
            TransportErrorKind::Other => 1,
        }
    }
}

impl fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransportErrorKind::Connect => "connect",
            TransportErrorKind::Timeout => "timeout",
            TransportErrorKind::Redirect => "redirect",
            TransportErrorKind::Request => "request",
            TransportErrorKind::Body => "body",
            TransportErrorKind::Other => "other",
        };
        f.write_str(name)
    }
}

/// Username and password for basic authentication.
///
/// The password is zeroed when dropped and never shows up in `Debug` or `Display` output.
pub struct SecureCredentials {
    username: String,
    password: String,
}

impl SecureCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Both parts must be non-empty before a request may be sent
    pub fn is_complete(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}

// Implement Drop to zero memory when the credentials are dropped
impl Drop for SecureCredentials {
    fn drop(&mut self) {
        unsafe {
            let bytes = self.password.as_bytes_mut();
            bytes.iter_mut().for_each(|b| *b = 0);
        }
    }
}

impl fmt::Debug for SecureCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecureCredentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl fmt::Display for SecureCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:[REDACTED]", self.username)
    }
}

impl Clone for SecureCredentials {
    fn clone(&self) -> Self {
        Self {
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }
}

#[derive(Debug, Error, Clone)]
pub enum AddressCheckError {
    #[error("An error occurred in the connection to the REST API: {message} (code {code})")]
    TransportError {
        kind: TransportErrorKind,
        code: u32,
        message: String,
        status: Option<u16>,
    },

    #[error("A server error occurred in the REST API (HTTP status code {status})")]
    ServerError {
        status: u16,
        body: Option<Bytes>,
    },

    #[error("Failed to decode {format} response body: {message}")]
    DecodeError {
        format: BodyFormat,
        message: String,
        body: Option<Bytes>,
        source: Option<Arc<dyn std::error::Error + Send + Sync>>,
    },

    #[error("ID of syntax warning not valid: {code}")]
    UnknownWarningCode {
        code: String,
    },

    #[error("Authorization not set: username and password are required")]
    MissingCredentials,

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to build request: {message}")]
    RequestError {
        message: String,
        source: Option<Arc<dyn std::error::Error + Send + Sync>>,
    },
}

impl AddressCheckError {
    pub fn transport_error(
        kind: TransportErrorKind,
        code: u32,
        message: impl Into<String>,
        status: Option<u16>,
    ) -> Self {
        let error = Self::TransportError {
            kind,
            code,
            message: message.into(),
            status,
        };
        log::error!("{}", error);
        error
    }

    pub fn server_error(status: u16, body: Option<Bytes>) -> Self {
        let error = Self::ServerError { status, body };
        log::error!("{}", error);
        error
    }

    pub fn decode_error(
        format: BodyFormat,
        message: impl Into<String>,
        body: Option<Bytes>,
        source: Option<impl std::error::Error + Send + Sync + 'static>,
    ) -> Self {
        let error = Self::DecodeError {
            format,
            message: message.into(),
            body,
            source: source.map(|e| Arc::new(e) as Arc<dyn std::error::Error + Send + Sync>),
        };
        log::error!("{}", error);
        error
    }

    pub fn unknown_warning_code(code: impl Into<String>) -> Self {
        let error = Self::UnknownWarningCode { code: code.into() };
        log::error!("{}", error);
        error
    }

    pub fn request_error(
        message: impl Into<String>,
        source: Option<impl std::error::Error + Send + Sync + 'static>,
    ) -> Self {
        let error = Self::RequestError {
            message: message.into(),
            source: source.map(|e| Arc::new(e) as Arc<dyn std::error::Error + Send + Sync>),
        };
        log::error!("{}", error);
        error
    }

    /// Transport and server errors may succeed on a later attempt; everything else is permanent.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::TransportError { .. } | Self::ServerError { .. })
    }

    /// HTTP status code carried by the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::TransportError { status, .. } => *status,
            Self::ServerError { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Response body kept for diagnostics
    pub fn body(&self) -> Option<&Bytes> {
        match self {
            Self::ServerError { body, .. } => body.as_ref(),
            Self::DecodeError { body, .. } => body.as_ref(),
            _ => None,
        }
    }

    pub fn source_error(&self) -> Option<&(dyn std::error::Error + Send + Sync)> {
        match self {
            Self::DecodeError { source, .. } => source.as_ref().map(|s| s.as_ref()),
            Self::RequestError { source, .. } => source.as_ref().map(|s| s.as_ref()),
            _ => None,
        }
    }
}

lazy_static! {
    static ref AUTHORIZATION_LINE: Regex = Regex::new(r"(?mi)^(authorization:).*$")
        .unwrap_or_else(|_| Regex::new(r"$^").unwrap());
}

/// Replace the value of every `Authorization:` line so request logs never carry credentials
pub fn redact_authorization(text: &str) -> String {
    AUTHORIZATION_LINE
        .replace_all(text, "$1 ***redacted***")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_authorization() {
        let log = "GET /svc/2.0/address/syntax/a@b.de\nAuthorization: Basic dXNlcjpwYXNz\naccept: application/json";
        let redacted = redact_authorization(log);
        assert!(!redacted.contains("dXNlcjpwYXNz"));
        assert!(redacted.contains("Authorization: ***redacted***"));
        assert!(redacted.contains("accept: application/json"));
    }

    #[test]
    fn test_redact_is_case_insensitive() {
        let redacted = redact_authorization("authorization: Basic secret");
        assert_eq!(redacted, "authorization: ***redacted***");
    }

    #[test]
    fn test_body_format_detection() {
        assert_eq!(BodyFormat::from_content_type("application/json; charset=utf-8"), Some(BodyFormat::Json));
        assert_eq!(BodyFormat::from_content_type("Application/JSON"), Some(BodyFormat::Json));
        assert_eq!(BodyFormat::from_content_type("text/xml"), Some(BodyFormat::Xml));
        assert_eq!(BodyFormat::from_content_type("text/plain"), None);
        assert_eq!(BodyFormat::from_content_type(""), None);
    }

    #[test]
    fn test_retryable_classification() {
        let transport = AddressCheckError::transport_error(TransportErrorKind::Timeout, 28, "timed out", None);
        let server = AddressCheckError::server_error(503, None);
        let unknown = AddressCheckError::unknown_warning_code("synm999");

        assert!(transport.is_retryable());
        assert!(server.is_retryable());
        assert!(!unknown.is_retryable());
        assert!(!AddressCheckError::MissingCredentials.is_retryable());
        assert_eq!(server.status(), Some(503));
    }

    #[test]
    fn test_credentials_are_redacted() {
        let credentials = SecureCredentials::new("user", "hunter2");
        assert!(!format!("{:?}", credentials).contains("hunter2"));
        assert!(!credentials.to_string().contains("hunter2"));
        assert!(credentials.is_complete());
        assert!(!SecureCredentials::new("user", "").is_complete());
    }
}
