//! Reconciler error types

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// One of the two independent pieces of knowledge a reconciler waits for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Local file enumeration
    Local,
    /// Remote listing
    Remote,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => f.write_str("local"),
            Self::Remote => f.write_str("remote"),
        }
    }
}

/// Shared collaborator failure, cloneable so every observer sees the same error
pub type SharedError = Arc<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised by event methods or carried by a rejected [`ActionHandle`]
///
/// [`ActionHandle`]: super::ActionHandle
#[derive(Debug, Clone, thiserror::Error)]
pub enum ReconcileError {
    /// An event arrived for an axis that was already resolved
    #[error("{axis} state of {} is already resolved", path.display())]
    AlreadyResolved {
        /// File the reconciler governs
        path: PathBuf,
        /// Axis that received the extra event
        axis: Axis,
    },

    /// `found_remote` was given an empty hash
    #[error("remote hash for {} must not be empty", path.display())]
    EmptyRemoteHash {
        /// File the reconciler governs
        path: PathBuf,
    },

    /// The local content hash could not be fetched
    #[error("failed to fetch content hash of {}", path.display())]
    HashFetch {
        /// File the reconciler governs
        path: PathBuf,
        /// Error reported by the file utilities
        #[source]
        source: SharedError,
    },

    /// A hash comparison was required outside a Tokio runtime
    #[error("no async runtime available to hash {}", path.display())]
    NoRuntime {
        /// File the reconciler governs
        path: PathBuf,
    },

    /// The resolving side went away without settling
    #[error("reconciliation of {} was abandoned before it settled", path.display())]
    Abandoned {
        /// File the reconciler governs
        path: PathBuf,
    },
}

impl ReconcileError {
    pub(crate) fn hash_fetch(path: PathBuf, err: anyhow::Error) -> Self {
        let source: Box<dyn std::error::Error + Send + Sync + 'static> = err.into();
        Self::HashFetch {
            path,
            source: Arc::from(source),
        }
    }
}
