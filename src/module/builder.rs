use crate::error::{ModuleError, ModuleResult};
use crate::module::{join_paths, ImportFeatures, Module};
use crate::schema::read_schema_document;
use crate::schema::types::{SchemaError, StructureSymbol};
use crate::schema_interpreter::{as_node, build_structure, extend_structure, struct_parts};
use log::{debug, info};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// The finished product of a module build: its fixed name and symbol tree.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleSchema {
    pub name: String,
    pub root: StructureSymbol,
}

/// Whether the first document has been applied yet.
enum BuildState {
    Unbuilt,
    Built { name: String, root: StructureSymbol },
}

/// Assembles one module from its ordered list of schema documents.
///
/// The first document creates the root structure and fixes the module name.
/// Every later document must carry the same name and has its attributes
/// merged into the existing root. Documents are applied strictly in the
/// order given.
pub struct ModuleSchemaBuilder {
    state: BuildState,
}

impl ModuleSchemaBuilder {
    fn new() -> Self {
        Self {
            state: BuildState::Unbuilt,
        }
    }

    /// Builds a module from `paths` and initializes it with basic features.
    pub fn build<P: AsRef<Path>>(paths: &[P]) -> ModuleResult<Module> {
        let mut module = Module::with_paths(paths.iter().map(|p| p.as_ref().to_path_buf()));
        module.initialize(ImportFeatures::BASIC)?;
        Ok(module)
    }

    /// Reads every document in order and returns the merged module schema.
    ///
    /// Any failure aborts the whole build; nothing built so far is returned.
    ///
    /// # Errors
    /// Returns a `ModuleError` if:
    /// - `paths` is empty
    /// - A document cannot be read or is not valid JSON
    /// - A document violates the schema rules or disagrees with an earlier one
    pub fn build_schema(paths: &[PathBuf]) -> ModuleResult<ModuleSchema> {
        let joined = join_paths(paths);
        if paths.is_empty() {
            return Err(ModuleError::schema(joined, SchemaError::NoSchemaFile));
        }

        let mut builder = Self::new();
        for path in paths {
            info!("Loading module schema from {}", path.display());
            let json = read_schema_document(path)?;
            builder
                .apply_document(&json)
                .map_err(|e| ModuleError::schema(joined.clone(), e))?;
        }

        let schema = builder
            .finish()
            .map_err(|e| ModuleError::schema(joined.clone(), e))?;
        info!(
            "Built module '{}' with {} attributes from {}",
            schema.name,
            schema.root.len(),
            joined
        );
        Ok(schema)
    }

    fn apply_document(&mut self, json: &Value) -> Result<(), SchemaError> {
        let node = as_node(json, "schema document")?;
        let (name, attributes) = struct_parts(node)?;
        if name.is_empty() {
            return Err(SchemaError::EmptyModuleName);
        }

        match &mut self.state {
            BuildState::Unbuilt => {
                debug!("Creating root of module '{}'", name);
                let root = build_structure(node)?;
                self.state = BuildState::Built {
                    name: name.to_string(),
                    root,
                };
                Ok(())
            }
            BuildState::Built { name: fixed, .. } if fixed.as_str() != name => {
                Err(SchemaError::ModuleNameMismatch {
                    name: name.to_string(),
                    expected: fixed.clone(),
                })
            }
            BuildState::Built { root, .. } => {
                debug!("Extending root of module '{}'", name);
                extend_structure(root, attributes)
            }
        }
    }

    fn finish(self) -> Result<ModuleSchema, SchemaError> {
        match self.state {
            BuildState::Built { name, root } => Ok(ModuleSchema { name, root }),
            BuildState::Unbuilt => Err(SchemaError::NoSchemaFile),
        }
    }
}
