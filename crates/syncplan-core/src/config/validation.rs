//! Configuration validation and error reporting

use super::types::Config;
use crate::error::Result;

/// Largest accepted hash read buffer
pub const MAX_HASH_BUFFER_SIZE: usize = 16 * 1024 * 1024;

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(size) = config.hash_buffer_size
            && !(1..=MAX_HASH_BUFFER_SIZE).contains(&size)
        {
            anyhow::bail!(
                "hash_buffer_size must be between 1 and {MAX_HASH_BUFFER_SIZE} bytes, got {size}"
            );
        }

        if let Some(manifest) = &config.remote_manifest
            && manifest.as_os_str().is_empty()
        {
            anyhow::bail!("remote_manifest cannot be empty");
        }

        Ok(())
    }
}
