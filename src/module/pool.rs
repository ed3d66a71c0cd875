use crate::error::{ModuleError, ModuleResult};
use crate::module::{ImportFeatures, Module, ModuleSchemaBuilder};
use crate::schema::read_schema_document;
use log::{debug, info, warn};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Registry of importable modules, keyed by module name.
#[derive(Debug, Default)]
pub struct ModulesPool {
    known_modules: HashMap<String, Module>,
}

impl ModulesPool {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers every module described by the `*.json` files in `directory`.
    ///
    /// Files are visited in file name order and grouped by the `name` of
    /// their top-level struct, so a module may be split over several files.
    /// Modules are only built when first loaded. Files whose top level is not
    /// a named struct are skipped.
    pub fn from_directory<P: AsRef<Path>>(directory: P) -> ModuleResult<Self> {
        let directory = directory.as_ref();
        info!("Discovering module schemas in {}", directory.display());

        let mut pool = Self::new();
        for path in Self::schema_files(directory)? {
            let json = read_schema_document(&path)?;
            let is_struct = json.get("kind").and_then(|k| k.as_str()) == Some("struct");
            let name = json.get("name").and_then(|n| n.as_str()).unwrap_or_default();
            if !is_struct || name.is_empty() {
                warn!(
                    "Skipping {}: top level is not a named struct",
                    path.display()
                );
                continue;
            }

            debug!("Assigning {} to module '{}'", path.display(), name);
            pool.known_modules
                .entry(name.to_string())
                .or_default()
                .add_path(&path)?;
        }

        info!("Discovered {} modules", pool.len());
        Ok(pool)
    }

    fn schema_files(directory: &Path) -> ModuleResult<Vec<PathBuf>> {
        let io_error = |source: std::io::Error| ModuleError::Io {
            path: directory.to_path_buf(),
            source,
        };

        let mut paths = Vec::new();
        for entry in std::fs::read_dir(directory).map_err(io_error)? {
            let path = entry.map_err(io_error)?.path();
            if path.is_file() && path.extension().map(|e| e == "json").unwrap_or(false) {
                paths.push(path);
            }
        }
        paths.sort();
        Ok(paths)
    }

    /// Builds a module from `paths` right away and registers it.
    pub fn create<P: AsRef<Path>>(&mut self, paths: &[P]) -> ModuleResult<&Module> {
        let module = ModuleSchemaBuilder::build(paths)?;
        match self.known_modules.entry(module.name().to_string()) {
            Entry::Occupied(entry) => Err(ModuleError::DuplicateModule(entry.key().clone())),
            Entry::Vacant(entry) => {
                info!("Created module '{}'", entry.key());
                Ok(&*entry.insert(module))
            }
        }
    }

    /// Looks up a module, initializing it on first use.
    ///
    /// Returns `None` when no module of that name exists or when it cannot be
    /// imported under `features`.
    pub fn load(&mut self, name: &str, features: ImportFeatures) -> ModuleResult<Option<&Module>> {
        let Some(module) = self.known_modules.get_mut(name) else {
            debug!("Module '{}' is unknown", name);
            return Ok(None);
        };
        if !module.features().intersects(features) {
            debug!("Module '{}' is not available with features {}", name, features);
            return Ok(None);
        }

        if !module.is_initialized() {
            module.initialize(features)?;
        }
        Ok(Some(&*module))
    }

    pub fn get(&self, name: &str) -> Option<&Module> {
        self.known_modules.get(name)
    }

    /// Names of all registered modules, sorted.
    pub fn module_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.known_modules.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.known_modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.known_modules.is_empty()
    }
}
