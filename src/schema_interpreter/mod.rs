//! Schema interpreter turning JSON schema nodes into module symbols.
//!
//! Every attribute node passes through [`dispatch`], which routes it by its
//! `kind` to the builder for structures, functions, values or iterables.
//! Builders either attach a new symbol to the receiving structure or merge
//! with the symbol already bound to the same name.

mod access;
mod dispatch;
mod function;
mod iterable;
mod structure;
mod value;

pub use dispatch::{dispatch, AttributeKind};
pub use function::add_functions;
pub use iterable::add_iterable;
pub use structure::{build_or_merge, extend_structure};
pub use value::add_value;

pub(crate) use access::as_node;
pub(crate) use structure::{build_structure, struct_parts};
