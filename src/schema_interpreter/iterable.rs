use crate::schema::types::{IterableElement, IterableSymbol, SchemaError, StructureSymbol, Symbol};
use crate::schema_interpreter::access::{as_node, require_str, Node};
use crate::schema_interpreter::structure::build_structure;
use crate::schema_interpreter::value::parse_value_type;
use log::debug;

/// Adds an array or dictionary attribute to `base`.
///
/// The element is either a scalar (`type`) or a structure built from the
/// nested `structure` node; exactly one of the two keys must be present.
/// An identical re-declaration is accepted, the first declaration is kept.
pub fn add_iterable(
    base: &mut StructureSymbol,
    node: &Node,
    is_dictionary: bool,
) -> Result<(), SchemaError> {
    let name = require_str(node, "name")?;

    let element = match (node.get("type"), node.get("structure")) {
        (Some(_), None) => IterableElement::Scalar(parse_value_type(require_str(node, "type")?)?),
        (None, Some(structure)) => {
            let structure = build_structure(as_node(structure, "iterable structure")?)?;
            IterableElement::Structure(structure)
        }
        _ => return Err(SchemaError::MalformedIterable(name.to_string())),
    };
    let iterable = IterableSymbol::new(name, is_dictionary, element);

    match base.get(name) {
        None => {
            debug!(
                "Adding {} '{}' to '{}'",
                if is_dictionary { "dictionary" } else { "array" },
                name,
                base.name()
            );
            base.add_attribute(Symbol::Iterable(iterable))
        }
        Some(Symbol::Iterable(existing)) if *existing == iterable => Ok(()),
        Some(Symbol::Iterable(_)) => Err(SchemaError::TypeCollision(name.to_string())),
        Some(_) => Err(SchemaError::KindCollision(name.to_string())),
    }
}
