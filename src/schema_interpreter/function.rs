use crate::schema::types::{FunctionSymbol, ScalarType, SchemaError, StructureSymbol, Symbol};
use crate::schema_interpreter::access::{require_array, require_str, Node};
use log::debug;

/// Adds one function overload to `base` per entry of the node's `arguments`.
///
/// Each entry of `arguments` is the ordered list of parameter type names of
/// one overload. Overloads accumulate under the function name, so the same
/// function may be extended from several nodes; identical signatures are
/// kept as they are.
pub fn add_functions(base: &mut StructureSymbol, node: &Node) -> Result<(), SchemaError> {
    let name = require_str(node, "name")?;
    let arguments = require_array(node, "arguments")?;

    for overload in arguments {
        let type_names = overload.as_array().ok_or_else(|| SchemaError::InvalidKeyType {
            key: "arguments".to_string(),
            expected: "an array of type name arrays",
        })?;

        let parameter_types = type_names
            .iter()
            .map(parse_parameter_type)
            .collect::<Result<Vec<_>, _>>()?;

        let function = FunctionSymbol::new(name, parameter_types);
        debug!("Adding overload {} to '{}'", function, base.name());
        base.add_attribute(Symbol::Function(function))?;
    }
    Ok(())
}

fn parse_parameter_type(type_name: &serde_json::Value) -> Result<ScalarType, SchemaError> {
    let type_name = type_name.as_str().ok_or_else(|| SchemaError::InvalidKeyType {
        key: "arguments".to_string(),
        expected: "an array of type name arrays",
    })?;
    ScalarType::parse_parameter(type_name)
        .ok_or_else(|| SchemaError::UnknownFunctionParameterType(type_name.to_string()))
}
