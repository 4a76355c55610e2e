//! specdocs - OpenAPI spec discovery for documentation sites
//!
//! Scans the spec directory and produces the options block for the OpenAPI
//! docs plugin, or one of the supporting outputs.

use std::{error::Error, process};

use clap::Parser;
use specdocs::{
    Result as SpecdocsResult,
    cli::{
        Cli, Commands,
        commands::{self, spec_root},
        formatting::format_error,
    },
    config::{ConfigPaths, SiteConfig},
    tracing_config, watch,
};
use tracing::{error, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let config = match SiteConfig::load(&cli.config) {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    if let Commands::Watch { root, output } = &cli.command {
        let guard = match ConfigPaths::log_dir() {
            Ok(log_dir) => Some(tracing_config::init_with_file(
                config.general.log_level,
                &log_dir,
            )?),
            Err(e) => {
                tracing_config::init(config.general.log_level)?;
                warn!(error = %e, "file logging unavailable");
                None
            }
        };

        let root = spec_root(&config, root.as_deref());
        let result = watch::run(&config, &root, output).await;
        if let Err(e) = &result {
            error!(error = %e, "watch stopped");
        }

        // process::exit skips destructors; flush the file writer first.
        drop(guard);
        if let Err(e) = result {
            exit_with(&e);
        }
        return Ok(());
    }

    tracing_config::init(config.general.log_level)?;

    match run_command(&config, &cli.command) {
        Ok(output) => {
            if !output.trim().is_empty() {
                println!("{output}");
            }
            Ok(())
        }
        Err(e) => exit_with(&e),
    }
}

fn run_command(config: &SiteConfig, command: &Commands) -> SpecdocsResult<String> {
    match command {
        Commands::Build { root, output } => {
            let root = spec_root(config, root.as_deref());
            commands::build(config, &root, output.as_deref())
        }
        Commands::List { root } => {
            let root = spec_root(config, root.as_deref());
            commands::list(config, &root)
        }
        Commands::Schema => commands::schema(),
        Commands::Docs { output } => commands::docs(output),
        Commands::Watch { .. } => Ok(String::new()),
    }
}

fn exit_with(error: &dyn Error) -> ! {
    eprintln!("{}", format_error(&error.to_string()));
    process::exit(1);
}
