//! Documentation generation for the configuration file.
//!
//! Builds a markdown reference for `specdocs.toml` from the `schemars`
//! schema of each configuration section.

mod generator;
mod markdown;
mod schema;

pub use generator::{DocsGenerator, site_schema_json};
pub use markdown::{generate_property_table, generate_reference_page};
pub use schema::{PropertyInfo, extract_property_info};

use schemars::{Schema, schema_for};

use crate::config::{DiscoveryConfig, GeneralConfig, PluginConfig};

/// Produces the schema of one configuration section.
pub type SchemaFn = fn() -> Schema;

/// A top-level table of `specdocs.toml`.
pub struct ConfigSection {
    /// Table name, e.g. `discovery`.
    pub name: &'static str,
    /// Schema generator for the table's struct.
    pub schema: SchemaFn,
}

/// All documented sections, in page order.
pub fn config_sections() -> Vec<ConfigSection> {
    vec![
        ConfigSection {
            name: "general",
            schema: || schema_for!(GeneralConfig),
        },
        ConfigSection {
            name: "discovery",
            schema: || schema_for!(DiscoveryConfig),
        },
        ConfigSection {
            name: "plugin",
            schema: || schema_for!(PluginConfig),
        },
    ]
}
