//! Tests for the static inventory lister

use std::io::Write;

use podferry::cluster::{ClusterError, ResourceLister, StaticLister};
use tempfile::NamedTempFile;

fn write_inventory(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_inventory_file_lists_sorted_namespaces() {
    let file = write_inventory(r#"{ "staging": ["web-0"], "default": ["api-1", "api-0"] }"#);

    let lister = StaticLister::from_file(file.path()).unwrap();

    assert_eq!(lister.list_namespaces().unwrap(), vec!["default", "staging"]);
    assert_eq!(lister.list_pods("default").unwrap(), vec!["api-1", "api-0"]);
}

#[test]
fn test_inventory_empty_namespace() {
    let file = write_inventory(r#"{ "idle": [] }"#);

    let lister = StaticLister::from_file(file.path()).unwrap();

    assert!(lister.list_pods("idle").unwrap().is_empty());
}

#[test]
fn test_inventory_unknown_namespace_errors() {
    let lister = StaticLister::default().with_namespace("default", ["api-0"]);

    let err = lister.list_pods("kube-system").unwrap_err();

    assert!(matches!(err, ClusterError::UnknownNamespace(ref ns) if ns == "kube-system"));
}

#[test]
fn test_inventory_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");

    let err = StaticLister::from_file(&path).unwrap_err();

    assert!(matches!(err, ClusterError::InventoryRead { .. }));
    assert!(err.to_string().contains("missing.json"));
}

#[test]
fn test_inventory_malformed_json() {
    let file = write_inventory(r#"{ "default": "api-0" }"#);

    let err = StaticLister::from_file(file.path()).unwrap_err();

    assert!(matches!(err, ClusterError::InventoryParse { .. }));
    assert!(err.to_string().starts_with("invalid inventory file"));
}

#[test]
fn test_empty_inventory_has_no_namespaces() {
    let lister = StaticLister::default();
    assert!(lister.list_namespaces().unwrap().is_empty());
}
