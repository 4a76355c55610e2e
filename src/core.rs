use std::{
    fmt, io,
    path::{Path, PathBuf},
    result,
};

use thiserror::Error;

/// Error types for specdocs.
///
/// Covers configuration loading, spec discovery, and writing the
/// generated plugin options.
#[derive(Error, Debug)]
pub enum SpecdocsError {
    /// Configuration validation error
    #[error("configuration validation failed for '{component}': {details}")]
    ConfigValidation {
        /// Component that failed validation
        component: String,
        /// Validation error details
        details: String,
    },

    /// I/O operation error
    #[error("I/O error on '{path}': {details}")]
    IoError {
        /// Path where I/O error occurred
        path: PathBuf,
        /// I/O error details
        details: String,
    },

    /// Standard I/O operation error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// TOML parsing error with location context
    #[error("failed to parse TOML at '{location}': {details}")]
    TomlParseError {
        /// Location of TOML being parsed (file path or "string")
        location: String,
        /// Parse error details
        details: String,
    },

    /// A directory or entry under the spec root could not be read
    #[error("failed to traverse '{path}': {details}")]
    Traversal {
        /// Path that could not be read
        path: PathBuf,
        /// Underlying error details
        details: String,
    },

    /// A spec file path that cannot be expressed as a mapping key
    #[error("invalid spec path '{path}': {reason}")]
    InvalidPath {
        /// Offending path
        path: PathBuf,
        /// Why the path was rejected
        reason: String,
    },

    /// Two spec files produced the same mapping key
    #[error("duplicate mapping key '{key}'")]
    DuplicateMappingKey {
        /// The colliding key
        key: String,
    },

    /// JSON serialization of generated output failed
    #[error("failed to serialize {what}: {details}")]
    Serialization {
        /// What was being serialized
        what: String,
        /// Serializer error details
        details: String,
    },

    /// File system watcher error
    #[error("watch error: {0}")]
    Watch(String),
}

/// A specialized `Result` type for specdocs operations.
pub type Result<T> = result::Result<T, SpecdocsError>;

impl SpecdocsError {
    /// Creates a TOML parsing error with optional file path context.
    ///
    /// # Arguments
    ///
    /// * `error` - The underlying parsing error
    /// * `path` - Optional path to the file that failed to parse
    pub fn toml_parse(error: impl fmt::Display, path: Option<&Path>) -> Self {
        let location = match path {
            Some(p) => {
                let clean_path = p.canonicalize().unwrap_or_else(|_| p.to_path_buf());
                clean_path.to_string_lossy().to_string()
            }
            None => "string".to_string(),
        };

        SpecdocsError::TomlParseError {
            location,
            details: error.to_string(),
        }
    }

    /// Creates an I/O error carrying the path it happened on.
    pub fn io_at(error: impl fmt::Display, path: &Path) -> Self {
        SpecdocsError::IoError {
            path: path.to_path_buf(),
            details: error.to_string(),
        }
    }

    /// Converts a `walkdir` failure into a traversal error.
    ///
    /// Falls back to `root` when the failing entry has no path of its own.
    pub fn traversal(error: walkdir::Error, root: &Path) -> Self {
        let path = error
            .path()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| root.to_path_buf());

        SpecdocsError::Traversal {
            path,
            details: error.to_string(),
        }
    }
}
