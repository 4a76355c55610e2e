//! Command-line interface.
//!
//! Parses arguments with clap and dispatches to the command functions in
//! [`commands`]. Each command returns the text to print on stdout.

pub mod commands;
pub mod formatting;


use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::ConfigPaths;

/// specdocs command line.
#[derive(Debug, Parser)]
#[command(name = "specdocs")]
#[command(about = "Generate OpenAPI docs plugin config from a directory of spec files")]
pub struct Cli {
    /// Path to the configuration file.
    #[arg(short, long, global = true, default_value = ConfigPaths::CONFIG_FILE)]
    pub config: PathBuf,

    /// Command to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build the plugin options and print or write them as JSON.
    Build {
        /// Spec directory, overriding `discovery.spec_dir`.
        #[arg(short, long)]
        root: Option<PathBuf>,

        /// Write to this file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List discovered specs with their keys and output directories.
    List {
        /// Spec directory, overriding `discovery.spec_dir`.
        #[arg(short, long)]
        root: Option<PathBuf>,
    },

    /// Print the JSON schema of the configuration file.
    Schema,

    /// Generate the configuration reference page.
    Docs {
        /// Directory to write `configuration.md` into.
        #[arg(short, long, default_value = "docs/specdocs")]
        output: PathBuf,
    },

    /// Rebuild the plugin options file whenever specs change.
    Watch {
        /// Spec directory, overriding `discovery.spec_dir`.
        #[arg(short, long)]
        root: Option<PathBuf>,

        /// File the plugin options are written to.
        #[arg(short, long)]
        output: PathBuf,
    },
}
