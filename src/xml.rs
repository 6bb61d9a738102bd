//! XML to JSON-shaped tree conversion.
//!
//! The root element's name is dropped and its content becomes the tree. Child
//! elements become keys, repeated siblings collapse into an array in document
//! order, attributes are gathered under `@attributes`, and a text-only element
//! becomes a plain string.

use crate::types::*;
use bytes::Bytes;
use roxmltree::{Document, Node};
use serde_json::{Map, Value};

pub const ATTRIBUTES_KEY: &str = "@attributes";
pub const TEXT_KEY: &str = "#text";

/// Parse an XML body into a JSON-shaped tree
pub fn to_value(body: &Bytes) -> AddressCheckResult<Value> {
    let text = std::str::from_utf8(body).map_err(|e| {
        AddressCheckError::decode_error(BodyFormat::Xml, "body is not valid UTF-8", Some(body.clone()), Some(e))
    })?;

    let document = Document::parse(text).map_err(|e| {
        AddressCheckError::decode_error(BodyFormat::Xml, e.to_string(), Some(body.clone()), Some(e))
    })?;

    Ok(element_to_value(document.root_element()))
}

fn element_to_value(node: Node<'_, '_>) -> Value {
    let mut map = Map::new();

    let attributes: Map<String, Value> = node
        .attributes()
        .map(|attr| (attr.name().to_string(), Value::String(attr.value().to_string())))
        .collect();
    let has_attributes = !attributes.is_empty();
    if has_attributes {
        map.insert(ATTRIBUTES_KEY.to_string(), Value::Object(attributes));
    }

    let mut has_children = false;
    for child in node.children().filter(|c| c.is_element()) {
        has_children = true;
        let name = child.tag_name().name().to_string();
        let value = element_to_value(child);

        // Element values are never arrays, so an existing array marks a repeated tag
        match map.get_mut(&name) {
            Some(Value::Array(items)) => items.push(value),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, value]);
            }
            None => {
                map.insert(name, value);
            }
        }
    }

    if has_children {
        return Value::Object(map);
    }

    let text: String = node
        .children()
        .filter(|c| c.is_text())
        .filter_map(|c| c.text())
        .collect();
    if text.trim().is_empty() {
        return Value::Object(map);
    }

    if has_attributes {
        map.insert(TEXT_KEY.to_string(), Value::String(text));
        Value::Object(map)
    } else {
        Value::String(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(xml: &str) -> Value {
        to_value(&Bytes::from(xml.to_string())).unwrap()
    }

    #[test]
    fn test_root_name_is_dropped() {
        assert_eq!(parse("<result><status>valid</status></result>"), json!({"status": "valid"}));
    }

    #[test]
    fn test_repeated_siblings_become_array() {
        let value = parse("<r><w>synm001</w><w>synm003</w><w>synm011</w></r>");
        assert_eq!(value, json!({"w": ["synm001", "synm003", "synm011"]}));
    }

    #[test]
    fn test_attributes_and_text() {
        let value = parse(r#"<r><score unit="percent">87</score><flag set="yes"/></r>"#);
        assert_eq!(
            value,
            json!({
                "score": {"@attributes": {"unit": "percent"}, "#text": "87"},
                "flag": {"@attributes": {"set": "yes"}}
            })
        );
    }

    #[test]
    fn test_empty_element_is_empty_object() {
        assert_eq!(parse("<r><syntaxWarnings/></r>"), json!({"syntaxWarnings": {}}));
    }

    #[test]
    fn test_malformed_xml() {
        let result = to_value(&Bytes::from_static(b"<r><open></r>"));
        assert!(matches!(result, Err(AddressCheckError::DecodeError { format: BodyFormat::Xml, .. })));
    }
}
