use std::{
    fs,
    path::{Path, PathBuf},
};

use schemars::schema_for;
use tracing::info;

use super::{config_sections, generate_reference_page};
use crate::{Result, SpecdocsError, config::SiteConfig};

/// Writes the configuration reference for `specdocs.toml`.
pub struct DocsGenerator {
    output_dir: PathBuf,
}

impl Default for DocsGenerator {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("docs/specdocs"),
        }
    }
}

impl DocsGenerator {
    /// File name of the generated page.
    pub const PAGE_FILE: &'static str = "configuration.md";

    /// Creates a new documentation generator with default output directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom output directory for generated documentation.
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Generates the reference page and returns its path.
    ///
    /// # Errors
    ///
    /// Returns `SpecdocsError::IoError` if the directory or file cannot be
    /// written, or `SpecdocsError::Serialization` if a schema cannot be
    /// rendered.
    pub fn generate(&self) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir)
            .map_err(|e| SpecdocsError::io_at(e, &self.output_dir))?;

        let content = generate_reference_page(&config_sections())?;
        let filepath = Path::new(&self.output_dir).join(Self::PAGE_FILE);

        fs::write(&filepath, content).map_err(|e| SpecdocsError::io_at(e, &filepath))?;

        info!("Generated {}", filepath.display());
        Ok(filepath)
    }
}

/// JSON schema of the whole configuration file, pretty-printed.
///
/// # Errors
///
/// Returns `SpecdocsError::Serialization` if the schema cannot be rendered.
pub fn site_schema_json() -> Result<String> {
    serde_json::to_string_pretty(&schema_for!(SiteConfig)).map_err(|e| {
        SpecdocsError::Serialization {
            what: "configuration schema".to_string(),
            details: e.to_string(),
        }
    })
}
