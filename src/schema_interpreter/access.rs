//! Checked access to the keys of a schema node.

use crate::schema::types::SchemaError;
use serde_json::{Map, Value};

pub(crate) type Node = Map<String, Value>;

pub(crate) fn as_node<'a>(json: &'a Value, context: &str) -> Result<&'a Node, SchemaError> {
    json.as_object()
        .ok_or_else(|| SchemaError::NotAnObject(context.to_string()))
}

/// Looks up `key`, reporting the keys that were present when it is missing.
pub(crate) fn require<'a>(node: &'a Node, key: &str) -> Result<&'a Value, SchemaError> {
    node.get(key).ok_or_else(|| SchemaError::MissingKey {
        key: key.to_string(),
        present: node.keys().cloned().collect(),
    })
}

pub(crate) fn require_str<'a>(node: &'a Node, key: &str) -> Result<&'a str, SchemaError> {
    require(node, key)?
        .as_str()
        .ok_or_else(|| SchemaError::InvalidKeyType {
            key: key.to_string(),
            expected: "a string",
        })
}

pub(crate) fn require_array<'a>(node: &'a Node, key: &str) -> Result<&'a [Value], SchemaError> {
    require(node, key)?
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| SchemaError::InvalidKeyType {
            key: key.to_string(),
            expected: "an array",
        })
}
