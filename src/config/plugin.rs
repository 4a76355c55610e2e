use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::mapping::GroupPathsBy;

/// Settings for the OpenAPI documentation plugin entry.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct PluginConfig {
    /// Plugin instance id.
    pub id: String,

    /// Id of the docs plugin instance the generated pages belong to.
    pub docs_plugin_id: String,

    /// Sidebar grouping for generated endpoint pages.
    pub group_paths_by: GroupPathsBy,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            id: "api".to_string(),
            docs_plugin_id: "classic".to_string(),
            group_paths_by: GroupPathsBy::default(),
        }
    }
}
