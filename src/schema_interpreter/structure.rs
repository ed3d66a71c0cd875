use crate::schema::types::{SchemaError, StructureSymbol, Symbol};
use crate::schema_interpreter::access::{as_node, require_array, require_str, Node};
use crate::schema_interpreter::dispatch::dispatch;
use log::debug;
use serde_json::Value;

/// Creates a structure from a `struct` node, or merges the node into `base`.
///
/// Without a `base` the freshly built structure is returned to the caller.
/// With a `base` the structure is either attached to it under its name or,
/// when `base` already holds a structure of that name, extended in place;
/// in both cases `base` keeps ownership and `None` is returned.
/// Struct attributes reach this through [`dispatch`] with a `base`.
///
/// # Errors
/// Returns a `SchemaError` if:
/// - The node is not a `struct` node or lacks `name`/`attributes`
/// - `base` already binds the name to something other than a structure
/// - Any attribute, at any depth, is invalid or collides with an existing one
pub fn build_or_merge(
    base: Option<&mut StructureSymbol>,
    json: &Value,
) -> Result<Option<StructureSymbol>, SchemaError> {
    let node = as_node(json, "struct node")?;
    match base {
        None => build_structure(node).map(Some),
        Some(base) => merge_into(base, node).map(|()| None),
    }
}

pub(crate) fn build_structure(node: &Node) -> Result<StructureSymbol, SchemaError> {
    let (name, attributes) = struct_parts(node)?;
    let mut structure = StructureSymbol::new(name);
    extend_structure(&mut structure, attributes)?;
    Ok(structure)
}

fn merge_into(base: &mut StructureSymbol, node: &Node) -> Result<(), SchemaError> {
    let (name, attributes) = struct_parts(node)?;

    match base.get_mut(name) {
        Some(Symbol::Structure(existing)) => {
            debug!("Merging into existing struct '{}'", name);
            extend_structure(existing, attributes)
        }
        Some(other) => Err(SchemaError::ExpectedStruct {
            name: name.to_string(),
            found: other.kind(),
        }),
        None => {
            let mut structure = StructureSymbol::new(name);
            extend_structure(&mut structure, attributes)?;
            debug!("Attaching struct '{}' to '{}'", name, base.name());
            base.add_attribute(Symbol::Structure(structure))
        }
    }
}

/// Dispatches every attribute node into `structure`, stopping at the first failure.
pub fn extend_structure(
    structure: &mut StructureSymbol,
    attributes: &[Value],
) -> Result<(), SchemaError> {
    for attribute in attributes {
        dispatch(structure, attribute)?;
    }
    Ok(())
}

pub(crate) fn struct_parts(node: &Node) -> Result<(&str, &[Value]), SchemaError> {
    let kind = require_str(node, "kind")?;
    if kind != "struct" {
        return Err(SchemaError::NotAStruct(kind.to_string()));
    }
    Ok((require_str(node, "name")?, require_array(node, "attributes")?))
}
