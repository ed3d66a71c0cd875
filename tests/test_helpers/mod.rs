use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tempfile::TempDir;

static INIT: Once = Once::new();

/// Initialize logging for tests
pub fn init_test_logging() {
    INIT.call_once(|| {
        env_logger::builder()
            .filter_level(log::LevelFilter::Debug)
            .is_test(true)
            .try_init()
            .unwrap_or(()); // Ignore if already initialized
    });
}

/// Create a temporary directory for schema documents
pub fn create_test_dir(name: &str) -> TempDir {
    tempfile::Builder::new()
        .prefix(&format!("module_schema_test_{}_", name))
        .tempdir()
        .expect("Failed to create test directory")
}

/// Write a schema document into `dir` and return its path
pub fn write_document(dir: &Path, file_name: &str, document: &Value) -> PathBuf {
    let path = dir.join(file_name);
    let content = serde_json::to_string_pretty(document).expect("Failed to serialize document");
    std::fs::write(&path, content).expect("Failed to write schema document");
    path
}
