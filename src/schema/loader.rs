use crate::error::{ModuleError, ModuleResult};
use log::debug;
use serde_json::Value;
use std::path::Path;

/// Reads a schema document from disk and parses it into a generic JSON tree.
///
/// This is the only place where the engine touches the file system.
pub fn read_schema_document<P: AsRef<Path>>(path: P) -> ModuleResult<Value> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ModuleError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Read {} bytes from {}", content.len(), path.display());

    serde_json::from_str(&content).map_err(|source| ModuleError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_read_valid_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("module.json");
        std::fs::write(&path, r#"{"kind": "struct", "name": "m", "attributes": []}"#).unwrap();

        let json = read_schema_document(&path).unwrap();
        assert_eq!(json["name"], "m");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let result = read_schema_document(dir.path().join("absent.json"));
        assert!(matches!(result, Err(ModuleError::Io { .. })));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, r#"{"kind": "struct", "name": "#).unwrap();

        let err = read_schema_document(&path).unwrap_err();
        assert!(matches!(err, ModuleError::Parse { .. }));
        assert!(err.to_string().contains("broken.json"));
    }
}
