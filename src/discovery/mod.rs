//! Spec file discovery.
//!
//! Walks the spec root depth-first and yields every `.yaml`/`.yml` file as a
//! root-relative path. Nothing here knows about plugin keys or output
//! directories; see [`crate::mapping`] for that.

mod path;

#[cfg(test)]
mod tests;

use std::path::Path;

pub use path::{RelativePath, SpecExtension, SpecFile};
use tracing::{debug, instrument};
use walkdir::WalkDir;

use crate::{Result, SpecdocsError};

/// Collects every spec file below `root`.
///
/// Symlinks are followed. A missing root yields an empty list; any read
/// failure below an existing root aborts the whole walk. Files without a
/// spec extension are skipped whatever their name's encoding.
///
/// # Errors
///
/// Returns `SpecdocsError::Traversal` if the root is not a directory or if a
/// directory or entry cannot be read (including symlink loops), and
/// `SpecdocsError::InvalidPath` if a spec file's path is not valid UTF-8.
#[instrument(skip_all, fields(root = %root.display()))]
pub fn collect_spec_files(root: &Path) -> Result<Vec<SpecFile>> {
    if !root.exists() {
        debug!("spec root does not exist");
        return Ok(Vec::new());
    }

    if !root.is_dir() {
        return Err(SpecdocsError::Traversal {
            path: root.to_path_buf(),
            details: "spec root is not a directory".to_string(),
        });
    }

    let mut files = Vec::new();

    let walker = WalkDir::new(root)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry.map_err(|e| SpecdocsError::traversal(e, root))?;

        if entry.file_type().is_dir() {
            continue;
        }

        if SpecExtension::from_os_name(entry.file_name()).is_none() {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(root)
            .map_err(|e| SpecdocsError::InvalidPath {
                path: entry.path().to_path_buf(),
                reason: e.to_string(),
            })?;

        let relative_path = RelativePath::from_path(relative)?;
        if let Some(spec) = SpecFile::new(relative_path) {
            debug!(spec = %spec.relative_path(), "found spec file");
            files.push(spec);
        }
    }

    Ok(files)
}
