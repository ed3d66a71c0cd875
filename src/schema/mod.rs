pub mod loader;
pub mod types;

pub use loader::read_schema_document;

// Re-export all types at the schema module level
pub use types::{
    FunctionSymbol, IterableElement, IterableSymbol, ScalarType, SchemaError, StructureSymbol,
    Symbol, SymbolKind, ValueSymbol,
};
