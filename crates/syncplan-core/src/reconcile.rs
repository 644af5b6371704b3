//! Per-file reconciliation
//!
//! A [`FileReconciler`] tracks two independent axes of knowledge about one
//! file path:
//! - local: has local enumeration found the file, or finished without it?
//! - remote: has the remote listing reported the file (with its hash), or
//!   finished without it?
//!
//! Events may arrive in any order. As soon as both axes are known the
//! reconciler settles its [`ActionHandle`] exactly once:
//!
//! | local   | remote        | action                       |
//! |---------|---------------|------------------------------|
//! | absent  | absent        | `nothing`                    |
//! | absent  | present       | `delete`                     |
//! | present | absent        | `upload`                     |
//! | present | present(hash) | compare local hash to `hash` |
//!
//! The local content hash is requested from [`FileUtils`] only in the last
//! row, and only once.

mod action;
mod error;
mod handle;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, warn};

pub use action::Action;
pub use error::{Axis, ReconcileError, SharedError};
pub use handle::{ActionHandle, Outcome};

use crate::file_utils::FileUtils;
use handle::Resolver;

/// What to do when an axis that is already resolved receives another event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicateEventPolicy {
    /// Reject the event with [`ReconcileError::AlreadyResolved`]
    #[default]
    Fail,
    /// Log a warning and keep the first value
    Ignore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LocalState {
    Absent,
    Present,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum RemoteState {
    Absent,
    Present(String),
}

/// What the table says once both axes are known
enum Decision {
    Settle(Action),
    CompareHash(String),
}

/// Decides `upload`, `delete` or `nothing` for a single file
pub struct FileReconciler {
    path: PathBuf,
    local: Option<LocalState>,
    remote: Option<RemoteState>,
    file_utils: Arc<dyn FileUtils>,
    policy: DuplicateEventPolicy,
    resolver: Option<Resolver>,
    handle: ActionHandle,
}

impl FileReconciler {
    /// Create a reconciler with both axes unknown
    ///
    /// Does not contact `file_utils`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, file_utils: Arc<dyn FileUtils>) -> Self {
        let path = path.into();
        let (resolver, handle) = handle::channel(&path);
        Self {
            path,
            local: None,
            remote: None,
            file_utils,
            policy: DuplicateEventPolicy::default(),
            resolver: Some(resolver),
            handle,
        }
    }

    /// Choose how repeated events on a resolved axis are handled
    #[must_use]
    pub fn with_policy(mut self, policy: DuplicateEventPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// File this reconciler governs
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Handle to the (eventual) outcome
    #[must_use]
    pub fn action(&self) -> ActionHandle {
        self.handle.clone()
    }

    /// Whether the outcome has been settled
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.handle.is_settled()
    }

    /// Local enumeration found the file
    ///
    /// # Errors
    ///
    /// Returns [`ReconcileError::AlreadyResolved`] if the local axis is
    /// already known and the policy is [`DuplicateEventPolicy::Fail`].
    pub fn found_file(&mut self) -> Result<(), ReconcileError> {
        self.set_local(LocalState::Present)
    }

    /// Local enumeration finished without finding the file
    ///
    /// # Errors
    ///
    /// Same as [`FileReconciler::found_file`].
    pub fn glob_done(&mut self) -> Result<(), ReconcileError> {
        self.set_local(LocalState::Absent)
    }

    /// Remote listing found the file with content hash `remote_hash`
    ///
    /// # Errors
    ///
    /// Returns [`ReconcileError::EmptyRemoteHash`] for an empty hash, or
    /// [`ReconcileError::AlreadyResolved`] as for [`FileReconciler::found_file`].
    pub fn found_remote(&mut self, remote_hash: impl Into<String>) -> Result<(), ReconcileError> {
        let remote_hash = remote_hash.into();
        if remote_hash.is_empty() {
            return Err(ReconcileError::EmptyRemoteHash {
                path: self.path.clone(),
            });
        }
        self.set_remote(RemoteState::Present(remote_hash))
    }

    /// Remote listing finished without finding the file
    ///
    /// # Errors
    ///
    /// Same as [`FileReconciler::found_file`].
    pub fn remote_done(&mut self) -> Result<(), ReconcileError> {
        self.set_remote(RemoteState::Absent)
    }

    fn set_local(&mut self, state: LocalState) -> Result<(), ReconcileError> {
        if self.local.is_some() {
            return self.duplicate(Axis::Local);
        }
        debug!(path = %self.path.display(), ?state, "local state resolved");
        self.local = Some(state);
        self.try_decide();
        Ok(())
    }

    fn set_remote(&mut self, state: RemoteState) -> Result<(), ReconcileError> {
        if self.remote.is_some() {
            return self.duplicate(Axis::Remote);
        }
        debug!(path = %self.path.display(), ?state, "remote state resolved");
        self.remote = Some(state);
        self.try_decide();
        Ok(())
    }

    fn duplicate(&self, axis: Axis) -> Result<(), ReconcileError> {
        match self.policy {
            DuplicateEventPolicy::Fail => Err(ReconcileError::AlreadyResolved {
                path: self.path.clone(),
                axis,
            }),
            DuplicateEventPolicy::Ignore => {
                warn!(path = %self.path.display(), %axis, "ignoring repeated event");
                Ok(())
            }
        }
    }

    fn decision(&self) -> Option<Decision> {
        let decision = match (self.local?, self.remote.as_ref()?) {
            (LocalState::Absent, RemoteState::Absent) => Decision::Settle(Action::Nothing),
            (LocalState::Absent, RemoteState::Present(_)) => Decision::Settle(Action::Delete),
            (LocalState::Present, RemoteState::Absent) => Decision::Settle(Action::Upload),
            (LocalState::Present, RemoteState::Present(hash)) => {
                Decision::CompareHash(hash.clone())
            }
        };
        Some(decision)
    }

    fn try_decide(&mut self) {
        let Some(decision) = self.decision() else {
            return;
        };
        let Some(resolver) = self.resolver.take() else {
            return;
        };

        match decision {
            Decision::Settle(action) => {
                debug!(path = %self.path.display(), %action, "action settled");
                resolver.settle(Ok(action));
            }
            Decision::CompareHash(remote_hash) => self.compare_hash(resolver, remote_hash),
        }
    }

    fn compare_hash(&self, resolver: Resolver, remote_hash: String) {
        let path = self.path.clone();
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            warn!(path = %path.display(), "hash comparison needed outside a runtime");
            resolver.settle(Err(ReconcileError::NoRuntime { path }));
            return;
        };

        debug!(path = %path.display(), "requesting local content hash");
        let fetch = self.file_utils.content_hash(&path);

        runtime.spawn(async move {
            let outcome = match fetch.await {
                Ok(local_hash) if local_hash == remote_hash => Ok(Action::Nothing),
                Ok(_) => Ok(Action::Upload),
                Err(err) => {
                    warn!(path = %path.display(), error = %format!("{err:#}"), "hash fetch failed");
                    Err(ReconcileError::hash_fetch(path.clone(), err))
                }
            };
            if let Ok(action) = &outcome {
                debug!(path = %path.display(), %action, "action settled");
            }
            resolver.settle(outcome);
        });
    }
}

impl std::fmt::Debug for FileReconciler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileReconciler")
            .field("path", &self.path)
            .field("local", &self.local)
            .field("remote", &self.remote)
            .field("policy", &self.policy)
            .field("settled", &self.is_settled())
            .finish_non_exhaustive()
    }
}
