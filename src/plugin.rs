//! Options block for the OpenAPI documentation plugin.
//!
//! The generated map is passed in explicitly and rendered as
//! `{ "id", "docsPluginId", "config" }`, the shape the plugin entry of the
//! site configuration expects.

use std::{fs, path::Path};

use serde::Serialize;
use tracing::{info, instrument};

use crate::{Result, SpecdocsError, config::PluginConfig, mapping::ConfigMap};

/// Plugin options with the generated per-spec configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginOptions {
    /// Plugin instance id.
    pub id: String,
    /// Docs plugin instance the pages are attached to.
    pub docs_plugin_id: String,
    /// Per-spec entries.
    pub config: ConfigMap,
}

impl PluginOptions {
    /// Combines plugin settings with a generated map.
    pub fn new(plugin: &PluginConfig, config: ConfigMap) -> Self {
        Self {
            id: plugin.id.clone(),
            docs_plugin_id: plugin.docs_plugin_id.clone(),
            config,
        }
    }

    /// Renders the options as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `SpecdocsError::Serialization` if rendering fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| SpecdocsError::Serialization {
            what: "plugin options".to_string(),
            details: e.to_string(),
        })
    }

    /// Writes the JSON rendering to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns `SpecdocsError::IoError` if a directory or the file cannot be
    /// written.
    #[instrument(skip_all, fields(path = %path.display(), entries = self.config.len()))]
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let mut json = self.to_json_pretty()?;
        json.push('\n');

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| SpecdocsError::io_at(e, parent))?;
        }

        fs::write(path, json).map_err(|e| SpecdocsError::io_at(e, path))?;

        info!("wrote plugin options");
        Ok(())
    }
}
