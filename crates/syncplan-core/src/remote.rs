//! File-backed remote listing
//!
//! Stands in for a remote lister: a manifest mapping relative file paths to
//! the content hash the remote side holds for them.
//!
//! TOML:
//!
//! ```toml
//! [files]
//! "notes/todo.md" = "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
//! ```
//!
//! JSON (`.json` extension): `{"files": {"notes/todo.md": "2cf2..."}}`

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::path::normalize_relative;

/// Remote content hashes keyed by relative path
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RemoteManifest {
    #[serde(default)]
    files: BTreeMap<PathBuf, String>,
}

impl RemoteManifest {
    /// Create an empty manifest
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a manifest from TOML, or JSON when the extension is `.json`
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if an entry
    /// is rejected by [`RemoteManifest::insert`].
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read remote manifest: {}", path.display()))?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let manifest: Self = if is_json {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse remote manifest: {}", path.display()))?
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse remote manifest: {}", path.display()))?
        };

        let mut normalized = Self::new();
        for (file, hash) in manifest.files {
            normalized
                .insert(&file, hash)
                .with_context(|| format!("Invalid remote manifest: {}", path.display()))?;
        }
        Ok(normalized)
    }

    /// Record `hash` as the remote content hash of `path`
    ///
    /// `path` is normalised relative to the sync root (`./a.txt` is stored
    /// as `a.txt`).
    ///
    /// # Errors
    ///
    /// Returns an error if `hash` is empty, if `path` is absolute or contains
    /// `..`, or if the normalised path is already listed.
    pub fn insert(&mut self, path: impl AsRef<Path>, hash: impl Into<String>) -> Result<()> {
        let path = path.as_ref();
        let hash = hash.into();
        if hash.trim().is_empty() {
            anyhow::bail!("Remote manifest entry {} has an empty hash", path.display());
        }

        let rel = normalize_relative(path)?;
        if self.files.contains_key(&rel) {
            anyhow::bail!("Remote manifest lists {} more than once", rel.display());
        }
        self.files.insert(rel, hash);
        Ok(())
    }

    /// Remote hash of an already normalised `path`, if the remote holds it
    #[must_use]
    pub fn get(&self, path: &Path) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    /// Paths listed by the remote, in order
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.files.keys().map(PathBuf::as_path)
    }

    /// Number of listed files
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the remote lists no files
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
