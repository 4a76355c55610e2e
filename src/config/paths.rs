use std::{
    env, fs,
    io::{Error, ErrorKind},
    path::PathBuf,
};

/// Utility struct for locating specdocs files
pub struct ConfigPaths;

impl ConfigPaths {
    /// File name of the site configuration.
    pub const CONFIG_FILE: &'static str = "specdocs.toml";

    /// Returns the default configuration file path
    ///
    /// Relative to the working directory, which is the documentation site
    /// root when run from a build script.
    pub fn main_config() -> PathBuf {
        PathBuf::from(Self::CONFIG_FILE)
    }

    /// Returns the state directory path for the application
    ///
    /// Follows the XDG Base Directory specification:
    /// - First checks `XDG_STATE_HOME`
    /// - Falls back to `$HOME/.local/state`
    /// - Appends "specdocs" to the base state directory
    ///
    /// # Errors
    /// Returns an error if neither `XDG_STATE_HOME` nor `HOME` environment variables are set
    pub fn state_dir() -> Result<PathBuf, Error> {
        let state_home = env::var("XDG_STATE_HOME")
            .or_else(|_| env::var("HOME").map(|home| format!("{home}/.local/state")))
            .map_err(|_| {
                Error::new(
                    ErrorKind::NotFound,
                    "Neither XDG_STATE_HOME nor HOME environment variable found",
                )
            })?;

        Ok(PathBuf::from(state_home).join("specdocs"))
    }

    /// Get the application log directory
    ///
    /// Creates the directory if it doesn't exist.
    ///
    /// # Errors
    /// Returns error if the state directory cannot be resolved or created
    pub fn log_dir() -> Result<PathBuf, Error> {
        let log_dir = Self::state_dir()?.join("logs");

        if !log_dir.exists() {
            fs::create_dir_all(&log_dir)?;
        }

        Ok(log_dir)
    }
}
