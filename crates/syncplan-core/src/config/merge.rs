//! Configuration merging with precedence rules
//!
//! Files are applied from lowest to highest precedence; any field a file sets
//! replaces the value from the files before it. Relative paths inside a file
//! are resolved against that file's directory.

use std::fs;
use std::path::Path;

use anyhow::Context;

use super::discovery::ConfigFiles;
use super::types::Config;
use crate::error::Result;

/// Configuration merger
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple config files with precedence rules
    ///
    /// Precedence order (highest to lowest):
    /// 1. CLI config
    /// 2. .syncplan.local.toml
    /// 3. .syncplan.toml
    /// 4. Global config
    ///
    /// # Errors
    ///
    /// Returns an error if config files cannot be read or parsed.
    pub fn merge(files: &ConfigFiles) -> Result<Config> {
        let mut merged = Config::default();

        // Lowest to highest
        for path in [&files.global, &files.project, &files.local, &files.cli]
            .into_iter()
            .flatten()
        {
            Self::merge_into(&mut merged, path)?;
        }

        Ok(merged)
    }

    /// Load and merge a single config file into the existing config
    fn merge_into(base: &mut Config, path: &Path) -> Result<()> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        if let Some(manifest) = &config.remote_manifest
            && manifest.is_relative()
            && let Some(dir) = path.parent()
        {
            config.remote_manifest = Some(dir.join(manifest));
        }

        Self::apply(base, config);
        Ok(())
    }

    fn apply(base: &mut Config, over: Config) {
        if over.hash_buffer_size.is_some() {
            base.hash_buffer_size = over.hash_buffer_size;
        }
        if over.remote_manifest.is_some() {
            base.remote_manifest = over.remote_manifest;
        }
    }
}
