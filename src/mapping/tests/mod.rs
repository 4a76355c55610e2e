//! Unit tests for spec-to-entry mapping.
//!
//! Pure functions only; file-system behavior is covered in `tests/`.

#![allow(clippy::panic, clippy::unwrap_used)]

use std::collections::BTreeSet;

use proptest::prelude::*;

use super::{ConfigMap, GroupPathsBy, MappingEntry, MappingOptions, map_spec_file};
use crate::{
    SpecdocsError,
    discovery::{RelativePath, SpecFile},
};

fn spec(relative: &str) -> SpecFile {
    SpecFile::new(RelativePath::parse(relative).unwrap()).unwrap()
}

#[test]
fn root_level_spec_has_no_duplicated_root_segment() {
    let (key, entry) = map_spec_file(&spec("petstore.yaml"), &MappingOptions::default());

    assert_eq!(key, "petstore.yaml#petstore");
    assert_eq!(entry.spec_path, "specs/petstore.yaml");
    assert_eq!(entry.output_dir, "docs/open-api/petstore");
    assert_eq!(entry.sidebar_options.group_paths_by, GroupPathsBy::Tag);
}

#[test]
fn nested_spec_keeps_its_directory() {
    let (key, entry) = map_spec_file(&spec("a/b/X.yml"), &MappingOptions::default());

    assert_eq!(key, "a/b/X.yml#X");
    assert_eq!(entry.spec_path, "specs/a/b/X.yml");
    assert_eq!(entry.output_dir, "docs/open-api/a/b/X");
}

#[test]
fn directories_with_spaces_pass_through_unchanged() {
    let (key, entry) = map_spec_file(
        &spec("OMG/Something weird/pupupupu/petstore.yaml"),
        &MappingOptions::default(),
    );

    assert_eq!(key, "OMG/Something weird/pupupupu/petstore.yaml#petstore");
    assert_eq!(
        entry.output_dir,
        "docs/open-api/OMG/Something weird/pupupupu/petstore"
    );
}

#[test]
fn custom_prefixes_are_applied() {
    let options = MappingOptions {
        spec_prefix: "api/specs".to_string(),
        output_root: "docs/reference".to_string(),
        group_paths_by: GroupPathsBy::Tag,
    };

    let (_, entry) = map_spec_file(&spec("v2/users.yaml"), &options);

    assert_eq!(entry.spec_path, "api/specs/v2/users.yaml");
    assert_eq!(entry.output_dir, "docs/reference/v2/users");
}

#[test]
fn empty_spec_prefix_leaves_relative_path_alone() {
    let options = MappingOptions {
        spec_prefix: String::new(),
        ..MappingOptions::default()
    };

    let (_, entry) = map_spec_file(&spec("users.yaml"), &options);

    assert_eq!(entry.spec_path, "users.yaml");
}

#[test]
fn same_base_name_in_different_directories_does_not_collide() {
    let specs = vec![spec("a/X.yaml"), spec("b/X.yaml")];

    let map = ConfigMap::from_spec_files(&specs, &MappingOptions::default()).unwrap();

    assert_eq!(map.len(), 2);
    let a = map.get("a/X.yaml#X").unwrap();
    let b = map.get("b/X.yaml#X").unwrap();
    assert_eq!(a.output_dir, "docs/open-api/a/X");
    assert_eq!(b.output_dir, "docs/open-api/b/X");
}

#[test]
fn yaml_and_yml_with_same_stem_get_distinct_keys() {
    let specs = vec![spec("pets.yaml"), spec("pets.yml")];

    let map = ConfigMap::from_spec_files(&specs, &MappingOptions::default()).unwrap();

    assert_eq!(map.len(), 2);
    assert!(map.get("pets.yaml#pets").is_some());
    assert!(map.get("pets.yml#pets").is_some());
}

#[test]
fn duplicate_key_is_rejected() {
    let (key, entry) = map_spec_file(&spec("pets.yaml"), &MappingOptions::default());
    let mut map = ConfigMap::new();
    map.insert(key.clone(), entry.clone()).unwrap();

    let result = map.insert(key, entry);

    assert!(matches!(
        result,
        Err(SpecdocsError::DuplicateMappingKey { key }) if key == "pets.yaml#pets"
    ));
    assert_eq!(map.len(), 1);
}

#[test]
fn entry_serializes_to_plugin_shape() {
    let (_, entry) = map_spec_file(&spec("a/pets.yml"), &MappingOptions::default());

    let json = serde_json::to_value(&entry).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "specPath": "specs/a/pets.yml",
            "outputDir": "docs/open-api/a/pets",
            "sidebarOptions": { "groupPathsBy": "tag" }
        })
    );
}

#[test]
fn config_map_serializes_as_plain_object() {
    let map =
        ConfigMap::from_spec_files(&[spec("pets.yaml")], &MappingOptions::default()).unwrap();

    let json = serde_json::to_value(&map).unwrap();
    let parsed: ConfigMap = serde_json::from_value(json.clone()).unwrap();

    assert!(json.get("pets.yaml#pets").is_some());
    assert_eq!(parsed, map);
}

fn relative_path_strategy() -> impl Strategy<Value = String> {
    (
        prop::collection::vec("[a-zA-Z0-9_-]{1,8}", 0..4),
        "[a-z]{1,8}",
        prop_oneof![Just("yaml"), Just("yml")],
    )
        .prop_map(|(dirs, name, extension)| {
            let mut segments = dirs;
            segments.push(format!("{name}.{extension}"));
            segments.join("/")
        })
}

proptest! {
    #[test]
    fn every_spec_gets_exactly_one_unique_entry(
        paths in prop::collection::btree_set(relative_path_strategy(), 0..24)
    ) {
        let specs: Vec<SpecFile> = paths.iter().map(|p| spec(p)).collect();

        let map = ConfigMap::from_spec_files(&specs, &MappingOptions::default()).unwrap();

        prop_assert_eq!(map.len(), paths.len());
        let keys: BTreeSet<&str> = map.keys().collect();
        prop_assert_eq!(keys.len(), paths.len());
        for path in &paths {
            let key = map.keys().find(|key| key.starts_with(&format!("{path}#")));
            prop_assert!(key.is_some());
        }
    }

    #[test]
    fn output_dir_mirrors_relative_directory(path in relative_path_strategy()) {
        let spec = spec(&path);
        let (key, MappingEntry { spec_path, output_dir, .. }) =
            map_spec_file(&spec, &MappingOptions::default());

        let expected_dir = match spec.relative_path().parent() {
            Some(parent) => format!("docs/open-api/{parent}/{}", spec.base_name()),
            None => format!("docs/open-api/{}", spec.base_name()),
        };

        prop_assert_eq!(key, format!("{path}#{}", spec.base_name()));
        prop_assert_eq!(spec_path, format!("specs/{path}"));
        prop_assert!(!output_dir.starts_with("docs/open-api/docs/open-api"));
        prop_assert_eq!(output_dir, expected_dir);
    }
}
