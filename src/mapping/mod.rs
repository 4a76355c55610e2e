//! Mapping from discovered spec files to documentation plugin entries.
//!
//! [`map_spec_file`] is a pure function of one spec file; [`ConfigMap::build`]
//! composes it with [`crate::discovery::collect_spec_files`].

mod entry;

#[cfg(test)]
mod tests;

use std::{
    collections::{BTreeMap, btree_map},
    path::Path,
};

pub use entry::{
    DEFAULT_OUTPUT_ROOT, DEFAULT_SPEC_PREFIX, GroupPathsBy, MappingEntry, MappingOptions,
    SidebarOptions, map_spec_file,
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::{
    Result, SpecdocsError,
    discovery::{SpecFile, collect_spec_files},
};

/// Plugin configuration keyed by `"<relative path>#<base name>"`.
///
/// Backed by a `BTreeMap` so the rendered JSON is stable between runs.
/// Consumers must not rely on the order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigMap(BTreeMap<String, MappingEntry>);

impl ConfigMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discovers every spec file under `root` and maps it.
    ///
    /// A missing root is not an error and produces an empty map. Whenever
    /// the result is empty a single warning is logged so a misconfigured
    /// spec directory gets noticed.
    ///
    /// # Errors
    ///
    /// Returns `SpecdocsError::Traversal` if any part of the tree cannot be
    /// read, and `SpecdocsError::DuplicateMappingKey` if two specs map to
    /// the same key.
    #[instrument(skip_all, fields(root = %root.display()))]
    pub fn build(root: &Path, options: &MappingOptions) -> Result<Self> {
        let specs = collect_spec_files(root)?;
        let map = Self::from_spec_files(&specs, options)?;

        if map.is_empty() {
            warn!(
                "no OpenAPI spec files found in '{}'; check the path and extensions (.yaml, .yml)",
                root.display()
            );
        } else {
            info!(count = map.len(), "mapped OpenAPI spec files");
        }

        Ok(map)
    }

    /// Maps already discovered spec files.
    ///
    /// # Errors
    ///
    /// Returns `SpecdocsError::DuplicateMappingKey` on a key collision.
    pub fn from_spec_files(specs: &[SpecFile], options: &MappingOptions) -> Result<Self> {
        let mut map = Self::new();
        for spec in specs {
            let (key, entry) = map_spec_file(spec, options);
            map.insert(key, entry)?;
        }
        Ok(map)
    }

    /// Inserts an entry, refusing to overwrite an existing key.
    ///
    /// # Errors
    ///
    /// Returns `SpecdocsError::DuplicateMappingKey` if `key` is present.
    pub fn insert(&mut self, key: String, entry: MappingEntry) -> Result<()> {
        match self.0.entry(key) {
            btree_map::Entry::Occupied(occupied) => Err(SpecdocsError::DuplicateMappingKey {
                key: occupied.key().clone(),
            }),
            btree_map::Entry::Vacant(vacant) => {
                vacant.insert(entry);
                Ok(())
            }
        }
    }

    /// Looks up an entry by key.
    pub fn get(&self, key: &str) -> Option<&MappingEntry> {
        self.0.get(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no spec was mapped.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Iterates over `(key, entry)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MappingEntry)> {
        self.0.iter().map(|(key, entry)| (key.as_str(), entry))
    }
}
