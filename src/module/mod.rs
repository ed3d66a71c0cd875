//! Modules assembled from JSON schema documents.
//!
//! A [`Module`] collects the paths of its schema documents, is initialized
//! exactly once through [`ModuleSchemaBuilder`], and from then on owns a
//! read-only symbol tree. [`ModulesPool`] is the registry handing modules out
//! by name.

pub mod builder;
pub mod pool;

pub use builder::{ModuleSchema, ModuleSchemaBuilder};
pub use pool::ModulesPool;

use crate::error::{ModuleError, ModuleResult};
use crate::schema::types::StructureSymbol;
use log::{debug, info};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::path::{Path, PathBuf};

/// Feature set under which a module may be imported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImportFeatures(u8);

impl ImportFeatures {
    pub const BASIC: Self = Self(0x01);
    pub const AVAST_ONLY: Self = Self(0x02);
    pub const VIRUS_TOTAL_ONLY: Self = Self(0x04);
    pub const DEPRECATED: Self = Self(0x08);

    pub const AVAST: Self = Self(Self::BASIC.0 | Self::AVAST_ONLY.0);
    pub const VIRUS_TOTAL: Self = Self(Self::BASIC.0 | Self::VIRUS_TOTAL_ONLY.0);
    pub const ALL_CURRENT: Self = Self(Self::AVAST.0 | Self::VIRUS_TOTAL.0);
    pub const EVERYTHING: Self = Self(Self::ALL_CURRENT.0 | Self::DEPRECATED.0);

    const NAMED_FLAGS: [(&'static str, Self); 4] = [
        ("basic", Self::BASIC),
        ("avast_only", Self::AVAST_ONLY),
        ("virus_total_only", Self::VIRUS_TOTAL_ONLY),
        ("deprecated", Self::DEPRECATED),
    ];

    /// Parses a feature name as written in configuration files.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "basic" => Some(Self::BASIC),
            "avast_only" => Some(Self::AVAST_ONLY),
            "virus_total_only" => Some(Self::VIRUS_TOTAL_ONLY),
            "deprecated" => Some(Self::DEPRECATED),
            "avast" => Some(Self::AVAST),
            "virus_total" => Some(Self::VIRUS_TOTAL),
            "all_current" => Some(Self::ALL_CURRENT),
            "everything" => Some(Self::EVERYTHING),
            _ => None,
        }
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for ImportFeatures {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for ImportFeatures {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for ImportFeatures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = Self::NAMED_FLAGS
            .iter()
            .filter(|(_, flag)| self.contains(*flag))
            .map(|(name, _)| *name)
            .collect();
        if names.is_empty() {
            f.write_str("none")
        } else {
            f.write_str(&names.join("|"))
        }
    }
}

/// Joins source paths for diagnostics.
pub(crate) fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug)]
enum ModuleState {
    Unbuilt,
    Built(ModuleSchema),
}

/// A module whose shape is described by one or more schema documents.
#[derive(Debug)]
pub struct Module {
    paths: Vec<PathBuf>,
    features: ImportFeatures,
    state: ModuleState,
}

impl Module {
    /// Creates an unbuilt module without any schema documents.
    #[must_use]
    pub fn new() -> Self {
        Self {
            paths: Vec::new(),
            features: ImportFeatures::BASIC,
            state: ModuleState::Unbuilt,
        }
    }

    #[must_use]
    pub fn with_paths<I: IntoIterator<Item = PathBuf>>(paths: I) -> Self {
        let mut module = Self::new();
        module.paths.extend(paths);
        module
    }

    /// Registers another schema document to be applied after the existing ones.
    pub fn add_path<P: AsRef<Path>>(&mut self, path: P) -> ModuleResult<()> {
        if let ModuleState::Built(schema) = &self.state {
            return Err(ModuleError::AlreadyInitialized(schema.name.clone()));
        }
        self.paths.push(path.as_ref().to_path_buf());
        Ok(())
    }

    /// Name fixed by the first schema document; empty until initialized.
    pub fn name(&self) -> &str {
        match &self.state {
            ModuleState::Built(schema) => &schema.name,
            ModuleState::Unbuilt => "",
        }
    }

    pub fn source_paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn paths_as_string(&self) -> String {
        join_paths(&self.paths)
    }

    pub fn features(&self) -> ImportFeatures {
        self.features
    }

    pub fn is_initialized(&self) -> bool {
        matches!(self.state, ModuleState::Built(_))
    }

    /// The module's symbol tree, available once initialized.
    pub fn root_symbol(&self) -> Option<&StructureSymbol> {
        match &self.state {
            ModuleState::Built(schema) => Some(&schema.root),
            ModuleState::Unbuilt => None,
        }
    }

    /// Builds the symbol tree from every registered path, in order.
    ///
    /// Calling this again after a successful build does nothing. A failed
    /// build leaves the module unbuilt.
    pub fn initialize(&mut self, features: ImportFeatures) -> ModuleResult<()> {
        if !self.features.intersects(features) {
            return Err(ModuleError::FeaturesNotSupported {
                name: self.display_name(),
                requested: features,
            });
        }
        if self.is_initialized() {
            debug!("Module '{}' is already initialized", self.name());
            return Ok(());
        }

        let schema = ModuleSchemaBuilder::build_schema(&self.paths)?;
        info!("Initialized module '{}'", schema.name);
        self.state = ModuleState::Built(schema);
        Ok(())
    }

    fn display_name(&self) -> String {
        match &self.state {
            ModuleState::Built(schema) => schema.name.clone(),
            ModuleState::Unbuilt => self.paths_as_string(),
        }
    }
}

impl Default for Module {
    fn default() -> Self {
        Self::new()
    }
}
