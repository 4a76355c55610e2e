//! Site configuration for specdocs.
//!
//! Read from a TOML file (`specdocs.toml` by default). Every section and
//! field is optional and falls back to the defaults of the original
//! documentation site layout.

mod discovery;
mod general;
mod loading;
mod paths;
mod plugin;


pub use discovery::DiscoveryConfig;
pub use general::{GeneralConfig, LogLevel};
pub use paths::ConfigPaths;
pub use plugin::PluginConfig;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::mapping::MappingOptions;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Default)]
#[serde(default)]
pub struct SiteConfig {
    /// General settings.
    pub general: GeneralConfig,

    /// Spec discovery and output layout.
    pub discovery: DiscoveryConfig,

    /// Documentation plugin entry.
    pub plugin: PluginConfig,
}

impl SiteConfig {
    /// Options handed to the mapping builder.
    ///
    /// Trailing slashes are trimmed from the prefixes so joined paths never
    /// contain `//`.
    pub fn mapping_options(&self) -> MappingOptions {
        MappingOptions {
            spec_prefix: self.discovery.spec_prefix.trim_end_matches('/').to_string(),
            output_root: self.discovery.output_root.trim_end_matches('/').to_string(),
            group_paths_by: self.plugin.group_paths_by,
        }
    }
}
