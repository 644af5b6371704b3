//! Configuration types and structures

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::file_utils::DEFAULT_BUFFER_SIZE;

/// Main configuration structure
///
/// Every field is optional so that a higher-precedence file only overrides
/// what it actually sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Read buffer used when hashing local files, in bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash_buffer_size: Option<usize>,

    /// Default remote manifest for `plan`
    ///
    /// A relative path in a config file is relative to that file's directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_manifest: Option<PathBuf>,
}

impl Config {
    /// Effective hash buffer size
    #[must_use]
    pub fn hash_buffer_size(&self) -> usize {
        self.hash_buffer_size.unwrap_or(DEFAULT_BUFFER_SIZE)
    }

    /// Configured remote manifest, if any
    #[must_use]
    pub fn remote_manifest(&self) -> Option<&Path> {
        self.remote_manifest.as_deref()
    }
}
