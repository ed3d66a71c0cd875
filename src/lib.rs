//! Loads JSON module schema files into typed symbol trees.
//!
//! A module (a named bundle of structures, values, iterables and overloaded
//! functions exposed to rule authors) may be described by several schema
//! documents. [`ModuleSchemaBuilder`] reads them in order and merges them
//! into one [`StructureSymbol`] tree, rejecting documents that disagree on
//! the module name or on the kind or type of an attribute.
//! [`ModulesPool`] discovers modules in a directory and builds them lazily.

pub mod config;
pub mod error;
pub mod logging;
pub mod module;
pub mod schema;
pub mod schema_interpreter;

pub use config::{ConfigError, LoaderConfig};
pub use error::{ModuleError, ModuleResult};
pub use logging::{LoggingError, LoggingSystem};
pub use module::{ImportFeatures, Module, ModuleSchema, ModuleSchemaBuilder, ModulesPool};
pub use schema::{
    FunctionSymbol, IterableElement, IterableSymbol, ScalarType, SchemaError, StructureSymbol,
    Symbol, SymbolKind, ValueSymbol,
};
