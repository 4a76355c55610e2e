use std::{
    ffi::OsStr,
    fmt,
    path::{Component, Path},
};

use crate::{Result, SpecdocsError};

/// Recognized spec file extensions.
///
/// Matching is exact and case-sensitive: `.YAML` or `.Yml` are not specs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecExtension {
    /// `.yaml`
    Yaml,
    /// `.yml`
    Yml,
}

impl SpecExtension {
    /// Returns the extension a file name ends with, if it is a spec file.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        if file_name.ends_with(Self::Yaml.suffix()) {
            Some(Self::Yaml)
        } else if file_name.ends_with(Self::Yml.suffix()) {
            Some(Self::Yml)
        } else {
            None
        }
    }

    /// Same as [`Self::from_file_name`], but on a raw file-system name.
    ///
    /// The comparison runs on the encoded bytes, so a name that is not
    /// valid UTF-8 is still recognized by its extension.
    pub fn from_os_name(file_name: &OsStr) -> Option<Self> {
        let bytes = file_name.as_encoded_bytes();
        if bytes.ends_with(Self::Yaml.suffix().as_bytes()) {
            Some(Self::Yaml)
        } else if bytes.ends_with(Self::Yml.suffix().as_bytes()) {
            Some(Self::Yml)
        } else {
            None
        }
    }

    /// The suffix including the leading dot.
    pub fn suffix(self) -> &'static str {
        match self {
            SpecExtension::Yaml => ".yaml",
            SpecExtension::Yml => ".yml",
        }
    }
}

/// Path of a spec file relative to the discovery root.
///
/// Always uses `/` as separator, whatever the host convention is, since it
/// ends up inside plugin keys and output directories.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RelativePath(String);

impl RelativePath {
    /// Builds a relative path from a file-system path below the root.
    ///
    /// # Errors
    ///
    /// Returns `SpecdocsError::InvalidPath` if the path is empty, contains
    /// anything other than plain name components, or is not valid UTF-8.
    pub fn from_path(path: &Path) -> Result<Self> {
        let mut segments = Vec::new();

        for component in path.components() {
            let Component::Normal(segment) = component else {
                return Err(SpecdocsError::InvalidPath {
                    path: path.to_path_buf(),
                    reason: "expected a path relative to the spec root".to_string(),
                });
            };

            let segment = segment.to_str().ok_or_else(|| SpecdocsError::InvalidPath {
                path: path.to_path_buf(),
                reason: "path is not valid UTF-8".to_string(),
            })?;

            segments.push(segment);
        }

        if segments.is_empty() {
            return Err(SpecdocsError::InvalidPath {
                path: path.to_path_buf(),
                reason: "path is empty".to_string(),
            });
        }

        Ok(Self(segments.join("/")))
    }

    /// Parses an already `/`-separated relative path.
    ///
    /// # Errors
    ///
    /// Returns `SpecdocsError::InvalidPath` for empty, absolute, or
    /// dot-segment paths.
    pub fn parse(value: &str) -> Result<Self> {
        let valid = !value.is_empty()
            && value
                .split('/')
                .all(|segment| !segment.is_empty() && segment != "." && segment != "..");

        if !valid {
            return Err(SpecdocsError::InvalidPath {
                path: value.into(),
                reason: "expected '/'-separated name segments".to_string(),
            });
        }

        Ok(Self(value.to_string()))
    }

    /// The full relative path.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Directory portion, or `None` when the file sits directly under the root.
    pub fn parent(&self) -> Option<&str> {
        self.0.rsplit_once('/').map(|(parent, _)| parent)
    }

    /// Final segment.
    pub fn file_name(&self) -> &str {
        self.0
            .rsplit_once('/')
            .map_or(self.0.as_str(), |(_, name)| name)
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A discovered spec file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecFile {
    relative_path: RelativePath,
    extension: SpecExtension,
}

impl SpecFile {
    /// Creates a spec file from its relative path.
    ///
    /// Returns `None` when the file name does not carry a spec extension.
    pub fn new(relative_path: RelativePath) -> Option<Self> {
        let extension = SpecExtension::from_file_name(relative_path.file_name())?;
        Some(Self {
            relative_path,
            extension,
        })
    }

    /// Path relative to the discovery root.
    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    /// The matched extension.
    pub fn extension(&self) -> SpecExtension {
        self.extension
    }

    /// File name with the matched extension stripped.
    ///
    /// A dot-file such as `.yaml` has no extension to strip and keeps its
    /// whole name.
    pub fn base_name(&self) -> &str {
        let file_name = self.relative_path.file_name();
        match file_name.strip_suffix(self.extension.suffix()) {
            Some(stem) if !stem.is_empty() => stem,
            _ => file_name,
        }
    }
}
