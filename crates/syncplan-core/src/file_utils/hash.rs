//! File hashing for content comparison using SHA-256

use std::path::Path;

use anyhow::Context;
use sha2::{Digest, Sha256};
use tokio::fs::File;
use tokio::io::AsyncReadExt;

use crate::error::Result;

/// File hash result
pub type FileHash = [u8; 32];

/// Default read buffer for streaming hashes
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Streaming file hasher
#[derive(Debug, Clone, Copy)]
pub struct FileHasher {
    buffer_size: usize,
}

impl Default for FileHasher {
    fn default() -> Self {
        Self::new(DEFAULT_BUFFER_SIZE)
    }
}

impl FileHasher {
    /// Create a hasher reading `buffer_size` bytes at a time
    #[must_use]
    pub const fn new(buffer_size: usize) -> Self {
        Self { buffer_size }
    }

    /// Compute SHA-256 hash of a file by streaming its contents
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or read.
    pub async fn hash(&self, path: &Path) -> Result<FileHash> {
        let mut file = File::open(path)
            .await
            .with_context(|| format!("Failed to open file for hashing: {}", path.display()))?;

        let mut hasher = Sha256::new();
        let mut buffer = vec![0; self.buffer_size.max(1)];

        loop {
            let bytes_read = file
                .read(&mut buffer)
                .await
                .with_context(|| format!("Failed to read file: {}", path.display()))?;

            if bytes_read == 0 {
                break;
            }

            hasher.update(&buffer[..bytes_read]);
        }

        Ok(hasher.finalize().into())
    }

    /// Compute the lowercase hex SHA-256 digest of a file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or read.
    pub async fn hash_hex(&self, path: &Path) -> Result<String> {
        self.hash(path).await.map(hex::encode)
    }
}
