use crate::schema::types::symbol::SymbolKind;

/// Structural or semantic violation found while interpreting schema nodes.
///
/// These errors never carry file paths themselves; the module builder wraps
/// them together with the source paths of the module being built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("The key '{key}' not found among provided keys {}", quote_keys(.present))]
    MissingKey { key: String, present: Vec<String> },

    #[error("The key '{key}' must be {expected}")]
    InvalidKeyType { key: String, expected: &'static str },

    #[error("Expected a JSON object for {0}")]
    NotAnObject(String),

    #[error("Unknown kind '{0}'")]
    UnknownKind(String),

    #[error("Unknown value type '{0}'")]
    UnknownValueType(String),

    #[error("Unknown function parameter type '{0}'")]
    UnknownFunctionParameterType(String),

    #[error("Expected struct for '{name}', found {found}")]
    ExpectedStruct { name: String, found: SymbolKind },

    #[error("Colliding definitions of {0} with different kind")]
    KindCollision(String),

    #[error("Colliding definitions of {0}: conflicting types")]
    TypeCollision(String),

    #[error("Array/dictionary '{0}' must specify exactly one of type or structure")]
    MalformedIterable(String),

    #[error("The 'kind' entry must be 'struct', found '{0}'")]
    NotAStruct(String),

    #[error("Module name must not be empty")]
    EmptyModuleName,

    #[error("No schema file supplied")]
    NoSchemaFile,

    #[error("Module name mismatch: {name} != {expected}")]
    ModuleNameMismatch { name: String, expected: String },
}

fn quote_keys(keys: &[String]) -> String {
    if keys.is_empty() {
        return "(none)".to_string();
    }
    keys.iter()
        .map(|key| format!("'{key}'"))
        .collect::<Vec<_>>()
        .join(", ")
}
