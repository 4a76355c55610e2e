//! specdocs - OpenAPI spec discovery for documentation sites.
//!
//! Walks a directory of OpenAPI spec files and produces the configuration
//! the OpenAPI docs plugin needs: one entry per spec, keyed by
//! `"<relative path>#<base name>"`, telling the plugin where the spec lives
//! and where to generate its pages.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use specdocs::mapping::{ConfigMap, MappingOptions};
//!
//! let map = ConfigMap::build(Path::new("specs"), &MappingOptions::default())?;
//! for (key, entry) in map.iter() {
//!     println!("{key} -> {}", entry.output_dir);
//! }
//! # Ok::<(), specdocs::SpecdocsError>(())
//! ```

/// Command-line interface.
pub mod cli;

/// Site configuration loading and validation.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// Spec file discovery.
pub mod discovery;

/// Configuration reference generation.
pub mod docs;

/// Spec-to-plugin-entry mapping.
pub mod mapping;

/// Plugin options rendering.
pub mod plugin;

/// Logging setup.
pub mod tracing_config;

/// Regeneration on spec changes.
pub mod watch;

pub use crate::core::{Result, SpecdocsError};
