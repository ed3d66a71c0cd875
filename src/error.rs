use crate::config::ConfigError;
use crate::module::ImportFeatures;
use crate::schema::types::SchemaError;
use std::io;
use std::path::PathBuf;

/// Unified error type for loading and registering modules.
///
/// I/O and parse failures name the document that caused them; schema
/// violations are tagged with every source path of the module being built.
#[derive(Debug, thiserror::Error)]
pub enum ModuleError {
    /// A schema document is missing or unreadable
    #[error("Could not open '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A schema document is not well-formed JSON
    #[error("Failed to parse JSON from '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A schema document violates the module schema rules
    #[error("{source} (module files: {paths})")]
    Schema {
        paths: String,
        #[source]
        source: SchemaError,
    },

    #[error("Module '{0}' has already been initialized")]
    AlreadyInitialized(String),

    #[error("The module '{0}' has already been created")]
    DuplicateModule(String),

    #[error("Module '{name}' is not available with import features {requested}")]
    FeaturesNotSupported {
        name: String,
        requested: ImportFeatures,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ModuleError {
    /// Tags a schema violation with the joined source paths of its module.
    pub fn schema<S: Into<String>>(paths: S, source: SchemaError) -> Self {
        Self::Schema {
            paths: paths.into(),
            source,
        }
    }

    /// Returns the underlying schema violation, if that is what this is.
    pub fn as_schema_error(&self) -> Option<&SchemaError> {
        match self {
            Self::Schema { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Result type alias for module loading operations
pub type ModuleResult<T> = Result<T, ModuleError>;
