//! Parameter schema validation.
//!
//! Every facade method declares its parameters as a const [`Field`] table
//! and runs the actual values through [`validate`] before building a
//! request. Validation is fail-fast: missing required parameters are
//! reported first, then kind mismatches, in declaration order. Keys that
//! are present in the values but absent from the schema are ignored so
//! that callers can pass forward-compatible payloads.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Runtime kind of a declared parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    String,
    Number,
    Boolean,
    Array,
    Object,
}

impl Kind {
    fn name(self) -> &'static str {
        match self {
            Kind::String => "string",
            Kind::Number => "number",
            Kind::Boolean => "boolean",
            Kind::Array => "array",
            Kind::Object => "object",
        }
    }

    fn matches(self, value: &Value) -> bool {
        match self {
            Kind::String => value.is_string(),
            Kind::Number => value.is_number(),
            Kind::Boolean => value.is_boolean(),
            Kind::Array => value.is_array(),
            Kind::Object => value.is_object(),
        }
    }
}

/// One declared parameter of an operation.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub name: &'static str,
    pub kind: Kind,
    pub required: bool,
}

impl Field {
    pub const fn required(name: &'static str, kind: Kind) -> Self {
        Field {
            name,
            kind,
            required: true,
        }
    }

    pub const fn optional(name: &'static str, kind: Kind) -> Self {
        Field {
            name,
            kind,
            required: false,
        }
    }
}

/// Validate actual values against a declared schema.
///
/// A required parameter counts as missing when it is absent, `null`, or an
/// empty string.
pub fn validate(values: &Map<String, Value>, schema: &[Field]) -> Result<()> {
    for field in schema.iter().filter(|f| f.required) {
        let missing = match values.get(field.name) {
            None | Some(Value::Null) => true,
            Some(Value::String(s)) => s.is_empty(),
            Some(_) => false,
        };
        if missing {
            return Err(Error::missing(field.name));
        }
    }

    for field in schema {
        if let Some(value) = values.get(field.name) {
            if value.is_null() {
                continue;
            }
            if !field.kind.matches(value) {
                return Err(Error::wrong_kind(field.name, field.kind.name()));
            }
        }
    }

    Ok(())
}

/// Serialize a request struct into the JSON object it will be sent as.
///
/// Serde-level `skip_serializing_if` attributes have already dropped absent
/// optional fields at this point, so the returned map contains exactly the
/// keys that will appear on the wire.
pub(crate) fn body_of<T: Serialize>(request: &T) -> Result<Map<String, Value>> {
    match serde_json::to_value(request)? {
        Value::Object(map) => Ok(map),
        _ => Err(Error::Config(
            "request payload did not serialize to an object".to_string(),
        )),
    }
}

/// Require a caller-supplied free-form document to be a JSON object.
pub(crate) fn object_body(name: &'static str, value: Value) -> Result<Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(Error::wrong_kind(name, "object")),
    }
}

/// Validate a path-interpolated parameter such as an id.
pub(crate) fn require_path_param(name: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::missing(name));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SCHEMA: &[Field] = &[
        Field::required("method", Kind::String),
        Field::optional("temperature", Kind::Number),
        Field::optional("stream", Kind::Boolean),
        Field::optional("messages", Kind::Array),
        Field::optional("settings", Kind::Object),
    ];

    fn values(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn accepts_matching_values() {
        let v = values(json!({
            "method": "gpt",
            "temperature": 0.2,
            "stream": false,
            "messages": [{"role": "user"}],
            "settings": {"a": 1},
        }));
        assert!(validate(&v, SCHEMA).is_ok());
    }

    #[test]
    fn reports_missing_required() {
        let v = values(json!({"temperature": 0.2}));
        match validate(&v, SCHEMA).unwrap_err() {
            Error::InvalidArgument { name, reason } => {
                assert_eq!(name, "method");
                assert!(reason.contains("missing"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_string_counts_as_missing() {
        let v = values(json!({"method": ""}));
        assert!(validate(&v, SCHEMA).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn null_counts_as_missing() {
        let v = values(json!({"method": null}));
        assert!(validate(&v, SCHEMA).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn reports_kind_mismatch() {
        let v = values(json!({"method": "gpt", "temperature": "warm"}));
        match validate(&v, SCHEMA).unwrap_err() {
            Error::InvalidArgument { name, reason } => {
                assert_eq!(name, "temperature");
                assert!(reason.contains("number"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_required_wins_over_kind_mismatch() {
        // The required pass runs before the kind pass.
        let v = values(json!({"temperature": "warm"}));
        match validate(&v, SCHEMA).unwrap_err() {
            Error::InvalidArgument { name, .. } => assert_eq!(name, "method"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn extra_keys_are_ignored() {
        let v = values(json!({"method": "gpt", "futureFlag": true}));
        assert!(validate(&v, SCHEMA).is_ok());
    }

    #[test]
    fn null_optional_is_skipped() {
        let v = values(json!({"method": "gpt", "stream": null}));
        assert!(validate(&v, SCHEMA).is_ok());
    }

    #[test]
    fn path_param_must_be_non_empty() {
        assert!(require_path_param("id", "abc").is_ok());
        assert!(require_path_param("id", "").is_err());
    }
}
