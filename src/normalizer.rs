//! Turns a raw HTTP outcome into a [`NormalizedResult`].
//!
//! Order of checks: transport failure, then 5xx, then body decoding, then
//! warning decoration. Each step aborts on the first error. Nothing here does
//! I/O, so the normalizer can be shared freely between tasks.

use crate::response::*;
use crate::transport::TransportFailure;
use crate::types::*;
use crate::warnings::{WarningTable, SYNTAX_WARNINGS_KEY};
use crate::xml;
use bytes::Bytes;
use serde_json::{Map, Value};

// `syntaxWarnings` -> `warning` -> repeated `warning` tags
const MAX_WARNING_DEPTH: usize = 2;

pub struct ResponseNormalizer;

impl ResponseNormalizer {
    /// Normalize the outcome of a transport call
    pub fn normalize(outcome: Result<RawResponse, TransportFailure>) -> AddressCheckResult<NormalizedResult> {
        match outcome {
            Ok(raw) => Self::normalize_response(raw),
            Err(failure) => Err(failure.into()),
        }
    }

    /// Normalize a response that made it off the wire
    pub fn normalize_response(raw: RawResponse) -> AddressCheckResult<NormalizedResult> {
        let RawResponse {
            status_code,
            content_type,
            body,
        } = raw;

        if (500..=599).contains(&status_code) {
            return Err(AddressCheckError::server_error(status_code, body));
        }

        let decoded = match body.as_ref().filter(|b| !b.is_empty()) {
            Some(bytes) => decode_body(&content_type, bytes)?,
            None => ResponseBody::Empty,
        };
        log::trace!("normalized {} response as {}", status_code, decoded_kind(&decoded));

        Ok(NormalizedResult::new(status_code, content_type, decoded, body))
    }
}

fn decoded_kind(body: &ResponseBody) -> &'static str {
    match body {
        ResponseBody::Empty => "empty",
        ResponseBody::Structured(_) => "structured",
        ResponseBody::Raw(_) => "raw",
    }
}

fn decode_body(content_type: &str, body: &Bytes) -> AddressCheckResult<ResponseBody> {
    let format = match BodyFormat::from_content_type(content_type) {
        Some(format) => format,
        None => return Ok(ResponseBody::Raw(body.clone())),
    };

    let value = match format {
        BodyFormat::Json => serde_json::from_slice(body).map_err(|e| {
            AddressCheckError::decode_error(BodyFormat::Json, e.to_string(), Some(body.clone()), Some(e))
        })?,
        BodyFormat::Xml => xml::to_value(body)?,
    };

    Ok(ResponseBody::Structured(decorate_syntax_warnings(value, format)?))
}

/// Replace a top-level `syntaxWarnings` list with an ordered `code -> message` object.
///
/// Any other key, and any non-object tree, passes through unchanged.
pub fn decorate_syntax_warnings(value: Value, format: BodyFormat) -> AddressCheckResult<Value> {
    let mut map = match value {
        Value::Object(map) => map,
        other => return Ok(other),
    };

    if let Some(warnings) = map.get_mut(SYNTAX_WARNINGS_KEY) {
        let mut codes = Vec::new();
        collect_codes(warnings.take(), format, 0, &mut codes)?;
        *warnings = Value::Object(expand_codes(codes)?);
    }

    Ok(Value::Object(map))
}

fn collect_codes(value: Value, format: BodyFormat, depth: usize, codes: &mut Vec<String>) -> AddressCheckResult<()> {
    match value {
        Value::Null => Ok(()),
        Value::String(code) => {
            codes.push(code);
            Ok(())
        }
        Value::Array(items) if depth < MAX_WARNING_DEPTH => items
            .into_iter()
            .try_for_each(|item| collect_codes(item, format, depth + 1, codes)),
        Value::Object(entries) if depth < MAX_WARNING_DEPTH => entries
            .into_iter()
            .filter(|(key, _)| key != xml::ATTRIBUTES_KEY)
            .try_for_each(|(_, item)| collect_codes(item, format, depth + 1, codes)),
        other => Err(AddressCheckError::decode_error(
            format,
            format!("unexpected value in {}: {}", SYNTAX_WARNINGS_KEY, other),
            None,
            None::<serde_json::Error>,
        )),
    }
}

fn expand_codes(codes: Vec<String>) -> AddressCheckResult<Map<String, Value>> {
    let mut expanded = Map::new();
    for code in codes {
        let message = WarningTable::lookup(&code)?;
        expanded.insert(code, Value::String(message.to_string()));
    }
    Ok(expanded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decorate_passes_through_without_warnings() {
        let value = json!({"result": "ok", "score": 3});
        assert_eq!(decorate_syntax_warnings(value.clone(), BodyFormat::Json).unwrap(), value);
    }

    #[test]
    fn test_decorate_non_object_tree() {
        let value = json!(["synm001"]);
        assert_eq!(decorate_syntax_warnings(value.clone(), BodyFormat::Json).unwrap(), value);
    }

    #[test]
    fn test_decorate_keeps_key_order() {
        let value = json!({"a": 1, "syntaxWarnings": ["synm002", "synm001"], "z": 2});
        let decorated = decorate_syntax_warnings(value, BodyFormat::Json).unwrap();
        let keys: Vec<_> = decorated.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["a", "syntaxWarnings", "z"]);

        let warning_keys: Vec<_> = decorated["syntaxWarnings"].as_object().unwrap().keys().cloned().collect();
        assert_eq!(warning_keys, vec!["synm002", "synm001"]);
    }

    #[test]
    fn test_decorate_null_is_empty_mapping() {
        let decorated = decorate_syntax_warnings(json!({"syntaxWarnings": null}), BodyFormat::Json).unwrap();
        assert_eq!(decorated, json!({"syntaxWarnings": {}}));
    }

    #[test]
    fn test_decorate_rejects_numeric_code() {
        let result = decorate_syntax_warnings(json!({"syntaxWarnings": [1]}), BodyFormat::Json);
        assert!(matches!(result, Err(AddressCheckError::DecodeError { .. })));
    }

    #[test]
    fn test_decorate_rejects_deep_nesting() {
        let result = decorate_syntax_warnings(json!({"syntaxWarnings": [[["synm001"]]]}), BodyFormat::Json);
        assert!(matches!(result, Err(AddressCheckError::DecodeError { .. })));
    }
}
