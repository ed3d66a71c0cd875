use crate::schema::types::{SchemaError, StructureSymbol};
use crate::schema_interpreter::access::{as_node, require_str};
use crate::schema_interpreter::function::add_functions;
use crate::schema_interpreter::iterable::add_iterable;
use crate::schema_interpreter::structure::build_or_merge;
use crate::schema_interpreter::value::add_value;
use log::debug;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// The `kind` discriminant of an attribute node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    Struct,
    Function,
    Value,
    Array,
    Dictionary,
}

impl AttributeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Struct => "struct",
            Self::Function => "function",
            Self::Value => "value",
            Self::Array => "array",
            Self::Dictionary => "dictionary",
        }
    }
}

impl FromStr for AttributeKind {
    type Err = SchemaError;

    fn from_str(kind: &str) -> Result<Self, Self::Err> {
        match kind {
            "struct" => Ok(Self::Struct),
            "function" => Ok(Self::Function),
            "value" => Ok(Self::Value),
            "array" => Ok(Self::Array),
            "dictionary" => Ok(Self::Dictionary),
            other => Err(SchemaError::UnknownKind(other.to_string())),
        }
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Routes one attribute node of a structure to the builder for its kind.
///
/// `base` is the structure receiving the new or merged attribute.
pub fn dispatch(base: &mut StructureSymbol, json: &Value) -> Result<(), SchemaError> {
    let node = as_node(json, "structure attribute")?;
    let kind: AttributeKind = require_str(node, "kind")?.parse()?;
    debug!("Adding {} attribute to '{}'", kind, base.name());

    match kind {
        AttributeKind::Struct => build_or_merge(Some(base), json).map(|_| ()),
        AttributeKind::Function => add_functions(base, node),
        AttributeKind::Value => add_value(base, node),
        AttributeKind::Array => add_iterable(base, node, false),
        AttributeKind::Dictionary => add_iterable(base, node, true),
    }
}
