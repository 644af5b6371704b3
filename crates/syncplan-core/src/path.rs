//! Relative path normalisation
//!
//! Manifest keys and plan candidates are compared as values, so `./a.txt`
//! and `a.txt` must become the same path before they meet.

use std::path::{Component, Path, PathBuf};

use crate::error::Result;

/// Normalise a path relative to a sync root
///
/// `.` components are dropped. Absolute paths and `..` components are
/// rejected, so the result always stays under the root.
///
/// # Errors
///
/// Returns an error for absolute paths, paths containing `..`, and paths
/// that are empty after normalisation.
pub fn normalize_relative(path: &Path) -> Result<PathBuf> {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::Normal(part) => normalized.push(part),
            Component::ParentDir => {
                anyhow::bail!("Path must not contain '..': {}", path.display())
            }
            Component::RootDir | Component::Prefix(_) => {
                anyhow::bail!("Path must be relative: {}", path.display())
            }
        }
    }

    if normalized.as_os_str().is_empty() {
        anyhow::bail!("Path does not name a file: {:?}", path.display().to_string());
    }

    Ok(normalized)
}
