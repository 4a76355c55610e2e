//! Command implementations.
//!
//! Every command takes the loaded configuration explicitly and returns the
//! text destined for stdout.

use std::path::{Path, PathBuf};

use super::formatting::{format_detail, format_header, format_key};
use crate::{
    Result,
    config::SiteConfig,
    docs::{DocsGenerator, site_schema_json},
    mapping::ConfigMap,
    plugin::PluginOptions,
};

/// Spec directory to scan: the override if given, else the configured one.
pub fn spec_root(config: &SiteConfig, root: Option<&Path>) -> PathBuf {
    root.map_or_else(|| config.discovery.spec_dir.clone(), Path::to_path_buf)
}

/// Builds the plugin options.
///
/// Without `output` the JSON itself is returned for printing; with it the
/// JSON is written to the file and a short summary is returned.
///
/// # Errors
/// Propagates discovery, serialization and write failures.
pub fn build(config: &SiteConfig, root: &Path, output: Option<&Path>) -> Result<String> {
    let map = ConfigMap::build(root, &config.mapping_options())?;
    let count = map.len();
    let options = PluginOptions::new(&config.plugin, map);

    match output {
        Some(path) => {
            options.write_to(path)?;
            Ok(format!(
                "Wrote {count} spec entries to {}",
                path.display()
            ))
        }
        None => options.to_json_pretty(),
    }
}

/// Lists every mapping key with its spec path and output directory.
///
/// # Errors
/// Propagates discovery failures.
pub fn list(config: &SiteConfig, root: &Path) -> Result<String> {
    let map = ConfigMap::build(root, &config.mapping_options())?;

    let mut lines = vec![format_header(&format!(
        "{} spec files in {}",
        map.len(),
        root.display()
    ))];

    for (key, entry) in map.iter() {
        lines.push(format!("  {}", format_key(key)));
        lines.push(format!(
            "    {}",
            format_detail(&format!("{} -> {}", entry.spec_path, entry.output_dir))
        ));
    }

    Ok(lines.join("\n"))
}

/// Returns the JSON schema of the configuration file.
///
/// # Errors
/// Returns an error if the schema cannot be serialized.
pub fn schema() -> Result<String> {
    site_schema_json()
}

/// Generates the configuration reference page into `output`.
///
/// # Errors
/// Propagates write failures.
pub fn docs(output: &Path) -> Result<String> {
    let path = DocsGenerator::new().with_output_dir(output).generate()?;
    Ok(format!("Generated {}", path.display()))
}
