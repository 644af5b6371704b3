//! File-utilities collaborator
//!
//! The reconciler never touches the filesystem itself. Everything it needs to
//! know about a local file (whether it exists, what its content hash is) goes
//! through the [`FileUtils`] port, shared read-only by every reconciler.

mod hash;
mod local;

use std::path::Path;

use futures::future::BoxFuture;

pub use hash::{DEFAULT_BUFFER_SIZE, FileHash, FileHasher};
pub use local::LocalFileUtils;

use crate::error::Result;

/// Asynchronous file probes consumed by reconcilers and plan sessions.
///
/// Both methods return `'static` boxed futures: the call itself is the request,
/// and the returned future may be moved onto another task and awaited later.
pub trait FileUtils: Send + Sync {
    /// Whether a local file exists at `path`.
    fn exists(&self, path: &Path) -> BoxFuture<'static, Result<bool>>;

    /// Opaque content-hash token of the local file at `path`.
    ///
    /// Implementations must fail (not return a placeholder) when the file
    /// cannot be read.
    fn content_hash(&self, path: &Path) -> BoxFuture<'static, Result<String>>;
}
