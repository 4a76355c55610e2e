use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::mapping::{DEFAULT_OUTPUT_ROOT, DEFAULT_SPEC_PREFIX};

/// Where spec files are found and where their pages are generated.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Directory scanned for OpenAPI spec files, relative to the working directory.
    pub spec_dir: PathBuf,

    /// Prefix written in front of each spec's relative path in `specPath`.
    pub spec_prefix: String,

    /// Directory the documentation plugin generates pages into.
    pub output_root: String,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            spec_dir: PathBuf::from(DEFAULT_SPEC_PREFIX),
            spec_prefix: DEFAULT_SPEC_PREFIX.to_string(),
            output_root: DEFAULT_OUTPUT_ROOT.to_string(),
        }
    }
}
