// Raw and normalized response types

use crate::types::*;
use crate::warnings::SYNTAX_WARNINGS_KEY;
use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::fmt;

/// What the transport saw on the wire for one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status_code: u16,
    /// Value of the `Content-Type` header, empty when the server sent none
    pub content_type: String,
    pub body: Option<Bytes>,
}

impl RawResponse {
    pub fn new(status_code: u16, content_type: impl Into<String>, body: Option<Bytes>) -> Self {
        Self {
            status_code,
            content_type: content_type.into(),
            body,
        }
    }

    /// Convenience constructor for a response with a text body
    pub fn with_body(status_code: u16, content_type: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(status_code, content_type, Some(Bytes::from(body.into())))
    }

    pub fn empty(status_code: u16, content_type: impl Into<String>) -> Self {
        Self::new(status_code, content_type, None)
    }
}

/// Decoded form of a response body
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    /// No body was returned
    Empty,
    /// JSON, or XML converted to the same tree shape
    Structured(Value),
    /// Any other content type, passed through untouched
    Raw(Bytes),
}

impl ResponseBody {
    pub fn is_empty(&self) -> bool {
        matches!(self, ResponseBody::Empty)
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ResponseBody::Structured(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_raw(&self) -> Option<&Bytes> {
        match self {
            ResponseBody::Raw(bytes) => Some(bytes),
            _ => None,
        }
    }

    fn type_name(&self) -> &'static str {
        match self {
            ResponseBody::Empty => "empty",
            ResponseBody::Structured(Value::Object(_)) => "object",
            ResponseBody::Structured(Value::Array(_)) => "array",
            ResponseBody::Structured(_) => "scalar",
            ResponseBody::Raw(_) => "raw",
        }
    }
}

/// The outcome of one API call after normalization
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedResult {
    status_code: u16,
    content_type: String,
    body: ResponseBody,
    raw_body: Option<Bytes>,
}

impl NormalizedResult {
    pub(crate) fn new(status_code: u16, content_type: String, body: ResponseBody, raw_body: Option<Bytes>) -> Self {
        Self {
            status_code,
            content_type,
            body,
            raw_body,
        }
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// True for HTTP status codes 200-299
    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status_code)
    }

    /// True for HTTP status codes 400-499
    pub fn is_client_error(&self) -> bool {
        (400..=499).contains(&self.status_code)
    }

    pub fn body(&self) -> &ResponseBody {
        &self.body
    }

    pub fn into_body(self) -> ResponseBody {
        self.body
    }

    /// The unprocessed body as received
    pub fn raw_body(&self) -> Option<&Bytes> {
        self.raw_body.as_ref()
    }

    pub fn raw_text(&self) -> Option<Cow<'_, str>> {
        self.raw_body.as_ref().map(|b| String::from_utf8_lossy(b))
    }

    pub fn json(&self) -> Option<&Value> {
        self.body.as_json()
    }

    /// Decorated warnings, `code -> message`, when the response reported any
    pub fn syntax_warnings(&self) -> Option<&Map<String, Value>> {
        self.json()?.get(SYNTAX_WARNINGS_KEY)?.as_object()
    }

    /// Deserialize a structured body into a typed value
    pub fn deserialize<T: DeserializeOwned>(&self) -> AddressCheckResult<T> {
        let format = BodyFormat::from_content_type(&self.content_type).unwrap_or(BodyFormat::Json);
        let value = self.json().ok_or_else(|| {
            AddressCheckError::decode_error(
                format,
                format!("response body is {}, not structured data", self.body.type_name()),
                self.raw_body.clone(),
                None::<serde_json::Error>,
            )
        })?;

        T::deserialize(value).map_err(|e| {
            AddressCheckError::decode_error(format, e.to_string(), self.raw_body.clone(), Some(e))
        })
    }
}

impl fmt::Display for NormalizedResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "status code: {}", self.status_code)?;
        writeln!(f, "is success: {}", self.is_success())?;
        writeln!(f, "is client error: {}", self.is_client_error())?;

        match self.raw_text() {
            Some(text) if !text.is_empty() => {
                writeln!(f)?;
                writeln!(f, "body data:")?;
                writeln!(f, "{}", text)?;
                writeln!(f)?;
            }
            _ => writeln!(f, "No body data.")?,
        }

        writeln!(f, "result type: {}", self.body.type_name())
    }
}
