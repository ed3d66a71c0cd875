use crate::schema::types::{ScalarType, SchemaError, StructureSymbol, Symbol, ValueSymbol};
use crate::schema_interpreter::access::{require_str, Node};
use log::debug;

/// Adds a scalar value attribute to `base`.
///
/// Re-declaring a value with the same type is accepted and leaves `base`
/// unchanged.
///
/// # Errors
/// Returns a `SchemaError` if:
/// - `name` or `type` is missing, or `type` names no known scalar type
/// - `base` binds the name to something other than a value
/// - `base` binds the name to a value of a different type
pub fn add_value(base: &mut StructureSymbol, node: &Node) -> Result<(), SchemaError> {
    let name = require_str(node, "name")?;
    let value_type = parse_value_type(require_str(node, "type")?)?;

    match base.get(name) {
        None => {
            debug!("Adding value '{}: {}' to '{}'", name, value_type, base.name());
            base.add_attribute(Symbol::Value(ValueSymbol::new(name, value_type)))
        }
        Some(Symbol::Value(existing)) if existing.value_type() == value_type => Ok(()),
        Some(Symbol::Value(_)) => Err(SchemaError::TypeCollision(name.to_string())),
        Some(_) => Err(SchemaError::KindCollision(name.to_string())),
    }
}

pub(crate) fn parse_value_type(type_name: &str) -> Result<ScalarType, SchemaError> {
    ScalarType::parse_value(type_name)
        .ok_or_else(|| SchemaError::UnknownValueType(type_name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema_interpreter::access::as_node;
    use serde_json::json;

    fn add(base: &mut StructureSymbol, json: serde_json::Value) -> Result<(), SchemaError> {
        add_value(base, as_node(&json, "test").unwrap())
    }

    #[test]
    fn test_add_value() {
        let mut base = StructureSymbol::new("m");
        add(&mut base, json!({"kind": "value", "name": "x", "type": "regexp"})).unwrap();

        let value = base.get("x").and_then(Symbol::as_value).unwrap();
        assert_eq!(value.value_type(), ScalarType::Regexp);
    }

    #[test]
    fn test_same_declaration_is_idempotent() {
        let mut base = StructureSymbol::new("m");
        let json = json!({"kind": "value", "name": "x", "type": "int"});
        add(&mut base, json.clone()).unwrap();
        add(&mut base, json).unwrap();

        assert_eq!(base.len(), 1);
        assert_eq!(base.attributes().next().map(|(_, symbols)| symbols.len()), Some(1));
    }

    #[test]
    fn test_conflicting_type_is_rejected() {
        let mut base = StructureSymbol::new("m");
        add(&mut base, json!({"kind": "value", "name": "x", "type": "int"})).unwrap();
        let err =
            add(&mut base, json!({"kind": "value", "name": "x", "type": "string"})).unwrap_err();

        assert_eq!(err, SchemaError::TypeCollision("x".to_string()));
        assert_eq!(err.to_string(), "Colliding definitions of x: conflicting types");
    }

    #[test]
    fn test_conflicting_kind_is_rejected() {
        let mut base = StructureSymbol::new("m");
        base.add_attribute(Symbol::Structure(StructureSymbol::new("x")))
            .unwrap();
        let err = add(&mut base, json!({"kind": "value", "name": "x", "type": "int"})).unwrap_err();

        assert_eq!(err, SchemaError::KindCollision("x".to_string()));
    }

    #[test]
    fn test_unknown_type() {
        let mut base = StructureSymbol::new("m");
        let err =
            add(&mut base, json!({"kind": "value", "name": "x", "type": "integer"})).unwrap_err();
        assert_eq!(err, SchemaError::UnknownValueType("integer".to_string()));
    }
}
