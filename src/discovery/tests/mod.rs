//! Unit tests for spec discovery.

#![allow(clippy::panic, clippy::unwrap_used)]

use std::{fs, path::Path};

use tempfile::TempDir;

use super::{RelativePath, SpecExtension, SpecFile, collect_spec_files};
use crate::SpecdocsError;

fn touch(root: &Path, relative: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, "openapi: 3.0.0\n").unwrap();
}

fn relative_paths(root: &Path) -> Vec<String> {
    let mut paths: Vec<String> = collect_spec_files(root)
        .unwrap()
        .iter()
        .map(|spec| spec.relative_path().to_string())
        .collect();
    paths.sort();
    paths
}

#[test]
fn extension_matching_is_exact() {
    assert_eq!(
        SpecExtension::from_file_name("petstore.yaml"),
        Some(SpecExtension::Yaml)
    );
    assert_eq!(
        SpecExtension::from_file_name("petstore.yml"),
        Some(SpecExtension::Yml)
    );
    assert_eq!(SpecExtension::from_file_name("petstore.YAML"), None);
    assert_eq!(SpecExtension::from_file_name("petstore.Yml"), None);
    assert_eq!(SpecExtension::from_file_name("petstore.yamlx"), None);
    assert_eq!(SpecExtension::from_file_name("petstore.json"), None);
    assert_eq!(SpecExtension::from_file_name("yaml"), None);
}

#[test]
fn os_name_matching_agrees_with_str_matching() {
    use std::ffi::OsStr;

    assert_eq!(
        SpecExtension::from_os_name(OsStr::new("petstore.yaml")),
        Some(SpecExtension::Yaml)
    );
    assert_eq!(
        SpecExtension::from_os_name(OsStr::new("petstore.yml")),
        Some(SpecExtension::Yml)
    );
    assert_eq!(SpecExtension::from_os_name(OsStr::new("petstore.YAML")), None);
    assert_eq!(SpecExtension::from_os_name(OsStr::new("notes.md")), None);
}

#[test]
fn relative_path_parent_and_file_name() {
    let nested = RelativePath::parse("a/b/petstore.yml").unwrap();
    assert_eq!(nested.parent(), Some("a/b"));
    assert_eq!(nested.file_name(), "petstore.yml");

    let top = RelativePath::parse("petstore.yaml").unwrap();
    assert_eq!(top.parent(), None);
    assert_eq!(top.file_name(), "petstore.yaml");
}

#[test]
fn relative_path_rejects_malformed_input() {
    assert!(RelativePath::parse("").is_err());
    assert!(RelativePath::parse("/abs.yaml").is_err());
    assert!(RelativePath::parse("a//b.yaml").is_err());
    assert!(RelativePath::parse("../escape.yaml").is_err());
    assert!(RelativePath::parse("a/./b.yaml").is_err());
}

#[test]
fn relative_path_from_native_path_uses_forward_slashes() {
    let native = Path::new("Description").join("API Bank").join("bank.yaml");
    let relative = RelativePath::from_path(&native).unwrap();

    assert_eq!(relative.as_str(), "Description/API Bank/bank.yaml");
}

#[test]
fn base_name_strips_only_matched_extension() {
    let spec = SpecFile::new(RelativePath::parse("v1/pets.api.yaml").unwrap()).unwrap();
    assert_eq!(spec.base_name(), "pets.api");
    assert_eq!(spec.extension(), SpecExtension::Yaml);

    let spec = SpecFile::new(RelativePath::parse("pets.yml").unwrap()).unwrap();
    assert_eq!(spec.base_name(), "pets");
}

#[test]
fn base_name_of_dot_file_keeps_whole_name() {
    let spec = SpecFile::new(RelativePath::parse("hidden/.yaml").unwrap()).unwrap();
    assert_eq!(spec.base_name(), ".yaml");
}

#[test]
fn spec_file_requires_spec_extension() {
    assert!(SpecFile::new(RelativePath::parse("README.md").unwrap()).is_none());
}

#[test]
fn missing_root_yields_no_files() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("does-not-exist");

    let files = collect_spec_files(&missing).unwrap();

    assert!(files.is_empty());
}

#[test]
fn finds_specs_at_every_depth() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "petstore.yaml");
    touch(temp.path(), "Description/API Bank/bank.yml");
    touch(temp.path(), "OMG/Something weird/pupupupu/petstore.yaml");

    assert_eq!(
        relative_paths(temp.path()),
        vec![
            "Description/API Bank/bank.yml",
            "OMG/Something weird/pupupupu/petstore.yaml",
            "petstore.yaml",
        ]
    );
}

#[test]
fn ignores_other_files_and_directories() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "api.yaml");
    touch(temp.path(), "notes.md");
    touch(temp.path(), "nested/schema.json");
    touch(temp.path(), "nested/UPPER.YAML");
    touch(temp.path(), "nested/deeper/readme.txt");
    fs::create_dir_all(temp.path().join("empty/dir.yaml")).unwrap();

    assert_eq!(relative_paths(temp.path()), vec!["api.yaml"]);
}

#[cfg(unix)]
#[test]
fn follows_symlinked_directories() {
    let temp = TempDir::new().unwrap();
    let outside = TempDir::new().unwrap();
    touch(outside.path(), "linked.yaml");
    std::os::unix::fs::symlink(outside.path(), temp.path().join("shared")).unwrap();

    assert_eq!(relative_paths(temp.path()), vec!["shared/linked.yaml"]);
}

#[test]
fn root_that_is_a_file_is_rejected() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "petstore.yaml");
    let root = temp.path().join("petstore.yaml");

    let result = collect_spec_files(&root);

    assert!(matches!(
        result,
        Err(SpecdocsError::Traversal { path, .. }) if path == root
    ));
}

/// Creates a file whose name is not valid UTF-8. Returns `false` when the
/// file system refuses such names.
#[cfg(unix)]
fn touch_raw(root: &Path, name: &[u8]) -> bool {
    use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

    fs::write(root.join(OsStr::from_bytes(name)), "openapi: 3.0.0\n").is_ok()
}

#[cfg(unix)]
#[test]
fn non_utf8_spec_name_is_an_error() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "ok.yaml");
    if !touch_raw(temp.path(), b"bad\xff.yaml") {
        return;
    }

    let result = collect_spec_files(temp.path());

    assert!(matches!(result, Err(SpecdocsError::InvalidPath { .. })));
}

#[cfg(unix)]
#[test]
fn non_utf8_non_spec_name_is_skipped() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "ok.yaml");
    if !touch_raw(temp.path(), b"bad\xff.txt") {
        return;
    }

    assert_eq!(relative_paths(temp.path()), vec!["ok.yaml"]);
}
