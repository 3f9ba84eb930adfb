//! Conversion of untyped JSON values at the API boundary.
//!
//! Arrays become sequences and objects become mappings. Every other JSON
//! value is rejected here with a declared error instead of failing later
//! inside an operation.

use super::Collection;
use crate::error::KitError;
use serde_json::Value;

impl<'a> TryFrom<&'a Value> for Collection<'a, Value> {
    type Error = KitError;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(items) => Ok(Collection::Sequence(items)),
            Value::Object(mapping) => Ok(Collection::Mapping(mapping)),
            other => Err(KitError::unsupported_shape(json_kind(other))),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
