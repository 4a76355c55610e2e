use std::{fs, io::ErrorKind, path::Path};

use tracing::{debug, instrument};

use super::SiteConfig;
use crate::{Result, SpecdocsError};

impl SiteConfig {
    /// Loads the configuration file at `path`.
    ///
    /// A missing file is not an error: every setting falls back to its
    /// default, which matches the standard site layout (`specs/` scanned,
    /// pages generated into `docs/open-api`).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file exists but cannot be read
    /// - The TOML content is invalid
    /// - A value fails validation
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<SiteConfig> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("config file not found, using defaults");
                return Ok(SiteConfig::default());
            }
            Err(e) => return Err(SpecdocsError::io_at(e, path)),
        };

        let config: SiteConfig =
            toml::from_str(&content).map_err(|e| SpecdocsError::toml_parse(e, Some(path)))?;

        config.validate()?;
        debug!(?config, "loaded config");
        Ok(config)
    }

    /// Parses and validates configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns `SpecdocsError::TomlParseError` for invalid TOML and
    /// `SpecdocsError::ConfigValidation` for invalid values.
    pub fn from_toml_str(content: &str) -> Result<SiteConfig> {
        let config: SiteConfig =
            toml::from_str(content).map_err(|e| SpecdocsError::toml_parse(e, None))?;

        config.validate()?;
        Ok(config)
    }

    /// Checks values serde cannot reject on its own.
    ///
    /// # Errors
    ///
    /// Returns `SpecdocsError::ConfigValidation` naming the offending field.
    pub fn validate(&self) -> Result<()> {
        if self.discovery.spec_dir.as_os_str().is_empty() {
            return Err(invalid("discovery", "spec_dir must not be empty"));
        }

        if self.discovery.output_root.trim_end_matches('/').is_empty() {
            return Err(invalid("discovery", "output_root must not be empty"));
        }

        if self.plugin.id.trim().is_empty() {
            return Err(invalid("plugin", "id must not be empty"));
        }

        if self.plugin.docs_plugin_id.trim().is_empty() {
            return Err(invalid("plugin", "docs_plugin_id must not be empty"));
        }

        Ok(())
    }
}

fn invalid(component: &str, details: &str) -> SpecdocsError {
    SpecdocsError::ConfigValidation {
        component: component.to_string(),
        details: details.to_string(),
    }
}
