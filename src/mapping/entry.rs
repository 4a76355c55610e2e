use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::discovery::SpecFile;

/// Default prefix written in front of every `specPath`.
pub const DEFAULT_SPEC_PREFIX: &str = "specs";

/// Default directory the documentation plugin generates pages into.
pub const DEFAULT_OUTPUT_ROOT: &str = "docs/open-api";

/// How the plugin groups generated endpoint pages in the sidebar.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum GroupPathsBy {
    /// Group endpoints by their declared OpenAPI tag.
    #[default]
    Tag,
}

impl fmt::Display for GroupPathsBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupPathsBy::Tag => write!(f, "tag"),
        }
    }
}

/// Sidebar settings attached to each generated page group.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SidebarOptions {
    /// Grouping applied to endpoint pages.
    pub group_paths_by: GroupPathsBy,
}

/// Plugin configuration for a single spec file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MappingEntry {
    /// Spec location relative to the site's working directory.
    pub spec_path: String,
    /// Directory the plugin writes generated pages into.
    pub output_dir: String,
    /// Sidebar grouping for the generated pages.
    pub sidebar_options: SidebarOptions,
}

/// Values that shape every mapping entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingOptions {
    /// Prefix joined in front of the relative path to form `specPath`.
    pub spec_prefix: String,
    /// Root of all generated output directories.
    pub output_root: String,
    /// Grouping written into every entry.
    pub group_paths_by: GroupPathsBy,
}

impl Default for MappingOptions {
    fn default() -> Self {
        Self {
            spec_prefix: DEFAULT_SPEC_PREFIX.to_string(),
            output_root: DEFAULT_OUTPUT_ROOT.to_string(),
            group_paths_by: GroupPathsBy::default(),
        }
    }
}

/// Maps a discovered spec file to its plugin key and entry.
///
/// The key is `"<relative path>#<base name>"`. A file directly under the
/// root gets `<output root>/<base name>`; nested files keep their directory
/// between the two.
pub fn map_spec_file(spec: &SpecFile, options: &MappingOptions) -> (String, MappingEntry) {
    let relative_path = spec.relative_path();
    let base_name = spec.base_name();

    let key = format!("{relative_path}#{base_name}");

    let output_base = match relative_path.parent() {
        Some(parent) => join(&options.output_root, parent),
        None => options.output_root.clone(),
    };

    let entry = MappingEntry {
        spec_path: join(&options.spec_prefix, relative_path.as_str()),
        output_dir: join(&output_base, base_name),
        sidebar_options: SidebarOptions {
            group_paths_by: options.group_paths_by,
        },
    };

    (key, entry)
}

fn join(base: &str, rest: &str) -> String {
    if base.is_empty() {
        rest.to_string()
    } else {
        format!("{base}/{rest}")
    }
}
