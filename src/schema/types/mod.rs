pub mod errors;
pub mod scalar;
pub mod symbol;

pub use errors::SchemaError;
pub use scalar::ScalarType;
pub use symbol::{
    FunctionSymbol, IterableElement, IterableSymbol, StructureSymbol, Symbol, SymbolKind,
    ValueSymbol,
};
