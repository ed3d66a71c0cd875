use module_schema::{ImportFeatures, ModuleError, ModulesPool, SchemaError, Symbol};
use serde_json::json;

mod test_helpers;
use test_helpers::{create_test_dir, init_test_logging, write_document};

#[test]
fn test_directory_groups_documents_by_module_name() {
    init_test_logging();
    let dir = create_test_dir("pool_grouping");
    write_document(
        dir.path(),
        "cuckoo_1.json",
        &json!({"kind": "struct", "name": "cuckoo", "attributes": [
            {"kind": "value", "name": "a", "type": "int"}
        ]}),
    );
    write_document(
        dir.path(),
        "cuckoo_2.json",
        &json!({"kind": "struct", "name": "cuckoo", "attributes": [
            {"kind": "function", "name": "f", "arguments": [["string"]]}
        ]}),
    );
    write_document(
        dir.path(),
        "pe.json",
        &json!({"kind": "struct", "name": "pe", "attributes": []}),
    );

    let pool = ModulesPool::from_directory(dir.path()).unwrap();

    assert_eq!(pool.len(), 2);
    assert_eq!(pool.module_names(), vec!["cuckoo", "pe"]);

    let cuckoo = pool.get("cuckoo").unwrap();
    assert_eq!(cuckoo.source_paths().len(), 2);
    assert!(cuckoo.source_paths()[0].ends_with("cuckoo_1.json"));
    assert!(!cuckoo.is_initialized());
}

#[test]
fn test_directory_skips_foreign_files() {
    init_test_logging();
    let dir = create_test_dir("pool_skipping");
    write_document(
        dir.path(),
        "value.json",
        &json!({"kind": "value", "name": "x", "type": "int"}),
    );
    write_document(
        dir.path(),
        "unnamed.json",
        &json!({"kind": "struct", "attributes": []}),
    );
    std::fs::write(dir.path().join("notes.txt"), "not a schema").unwrap();

    let pool = ModulesPool::from_directory(dir.path()).unwrap();
    assert!(pool.is_empty());
}

#[test]
fn test_missing_directory() {
    init_test_logging();
    let dir = create_test_dir("pool_missing");
    let err = ModulesPool::from_directory(dir.path().join("absent")).err().unwrap();
    assert!(matches!(err, ModuleError::Io { .. }));
}

#[test]
fn test_load_builds_on_first_use() {
    init_test_logging();
    let dir = create_test_dir("pool_load");
    write_document(
        dir.path(),
        "m_a.json",
        &json!({"kind": "struct", "name": "m", "attributes": [
            {"kind": "dictionary", "name": "headers", "type": "string"}
        ]}),
    );
    write_document(
        dir.path(),
        "m_b.json",
        &json!({"kind": "struct", "name": "m", "attributes": [
            {"kind": "value", "name": "size", "type": "int"}
        ]}),
    );

    let mut pool = ModulesPool::from_directory(dir.path()).unwrap();
    let module = pool.load("m", ImportFeatures::BASIC).unwrap().unwrap();

    assert!(module.is_initialized());
    assert_eq!(module.name(), "m");
    let root = module.root_symbol().unwrap();
    let headers = root.get("headers").and_then(Symbol::as_iterable).unwrap();
    assert!(headers.is_dictionary());
    assert!(root.contains("size"));

    assert!(pool.get("m").unwrap().is_initialized());
}

#[test]
fn test_load_unknown_or_unavailable_module() {
    init_test_logging();
    let dir = create_test_dir("pool_unavailable");
    write_document(
        dir.path(),
        "m.json",
        &json!({"kind": "struct", "name": "m", "attributes": []}),
    );

    let mut pool = ModulesPool::from_directory(dir.path()).unwrap();
    assert!(pool.load("other", ImportFeatures::BASIC).unwrap().is_none());
    assert!(pool
        .load("m", ImportFeatures::AVAST_ONLY)
        .unwrap()
        .is_none());
    assert!(!pool.get("m").unwrap().is_initialized());
}

#[test]
fn test_load_reports_merge_failures() {
    init_test_logging();
    let dir = create_test_dir("pool_failure");
    write_document(
        dir.path(),
        "m_a.json",
        &json!({"kind": "struct", "name": "m", "attributes": [
            {"kind": "value", "name": "x", "type": "int"}
        ]}),
    );
    write_document(
        dir.path(),
        "m_b.json",
        &json!({"kind": "struct", "name": "m", "attributes": [
            {"kind": "value", "name": "x", "type": "float"}
        ]}),
    );

    let mut pool = ModulesPool::from_directory(dir.path()).unwrap();
    let err = pool.load("m", ImportFeatures::BASIC).err().unwrap();

    assert_eq!(
        err.as_schema_error(),
        Some(&SchemaError::TypeCollision("x".to_string()))
    );
    assert!(!pool.get("m").unwrap().is_initialized());
}

#[test]
fn test_create_rejects_duplicate_names() {
    init_test_logging();
    let dir = create_test_dir("pool_create");
    let path = write_document(
        dir.path(),
        "m.json",
        &json!({"kind": "struct", "name": "m", "attributes": [
            {"kind": "value", "name": "x", "type": "bool"}
        ]}),
    );

    let mut pool = ModulesPool::new();
    let module = pool.create(&[path.clone()]).unwrap();
    assert_eq!(module.name(), "m");
    assert!(module.is_initialized());

    let err = pool.create(&[path]).err().unwrap();
    assert!(matches!(err, ModuleError::DuplicateModule(ref name) if name == "m"));
    assert_eq!(pool.len(), 1);
}
