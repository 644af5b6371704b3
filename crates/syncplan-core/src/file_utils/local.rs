//! Filesystem-backed [`FileUtils`]

use std::path::Path;

use anyhow::Context;
use futures::FutureExt;
use futures::future::BoxFuture;

use super::FileUtils;
use super::hash::{DEFAULT_BUFFER_SIZE, FileHasher};
use crate::error::Result;

/// [`FileUtils`] over the local filesystem, hashing with SHA-256
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileUtils {
    hasher: FileHasher,
}

impl LocalFileUtils {
    /// Create file utilities with the default hash buffer
    #[must_use]
    pub const fn new() -> Self {
        Self::with_buffer_size(DEFAULT_BUFFER_SIZE)
    }

    /// Create file utilities reading `buffer_size` bytes per hash step
    #[must_use]
    pub const fn with_buffer_size(buffer_size: usize) -> Self {
        Self {
            hasher: FileHasher::new(buffer_size),
        }
    }
}

impl FileUtils for LocalFileUtils {
    fn exists(&self, path: &Path) -> BoxFuture<'static, Result<bool>> {
        let path = path.to_path_buf();
        async move {
            tokio::fs::try_exists(&path)
                .await
                .with_context(|| format!("Failed to check existence: {}", path.display()))
        }
        .boxed()
    }

    fn content_hash(&self, path: &Path) -> BoxFuture<'static, Result<String>> {
        let path = path.to_path_buf();
        let hasher = self.hasher;
        async move { hasher.hash_hex(&path).await }.boxed()
    }
}
