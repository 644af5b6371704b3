//! Planning over many files
//!
//! Each file gets its own [`FileReconciler`]; the session only feeds them
//! events and collects their outcomes. Remote events come from a
//! [`RemoteManifest`], local events from probing [`FileUtils::exists`] for
//! every candidate path. Nothing is uploaded or deleted here.

mod reporting;

use std::collections::BTreeSet;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use futures::future::join_all;
use serde::Serialize;
use tracing::{debug, info};

pub use reporting::PlanReporter;

use crate::file_utils::FileUtils;
use crate::path::normalize_relative;
use crate::reconcile::{Action, FileReconciler};
use crate::remote::RemoteManifest;

/// Action decided for one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedAction {
    /// Path relative to the plan root
    pub path: PathBuf,
    /// Decided action
    pub action: Action,
}

/// Outcome of a planning session
#[derive(Debug, Clone, Default, Serialize)]
pub struct PlanResult {
    /// Decided actions, ordered by path
    pub entries: Vec<PlannedAction>,
    /// Files that could not be decided
    pub errors: Vec<String>,
}

impl PlanResult {
    fn count(&self, action: Action) -> usize {
        self.entries.iter().filter(|e| e.action == action).count()
    }

    /// Files to upload
    #[must_use]
    pub fn uploads(&self) -> usize {
        self.count(Action::Upload)
    }

    /// Files to delete remotely
    #[must_use]
    pub fn deletes(&self) -> usize {
        self.count(Action::Delete)
    }

    /// Files needing no action
    #[must_use]
    pub fn unchanged(&self) -> usize {
        self.count(Action::Nothing)
    }

    /// Whether every file was decided (no errors)
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Drives one reconciler per candidate file
///
/// Every reconciler receives exactly one remote and one local event.
pub struct PlanSession {
    file_utils: Arc<dyn FileUtils>,
}

impl PlanSession {
    /// Create a session sharing `file_utils` across all reconcilers
    #[must_use]
    pub fn new(file_utils: Arc<dyn FileUtils>) -> Self {
        Self { file_utils }
    }

    /// Decide an action for every candidate file under `root`
    ///
    /// Candidates are the union of `local_candidates` and the manifest's
    /// paths, all relative to `root` and normalised first, so each file is
    /// reconciled exactly once. Candidates that are absolute or contain `..`
    /// are reported in [`PlanResult::errors`] along with any other per-file
    /// failure.
    pub async fn plan(
        &self,
        root: &Path,
        local_candidates: &[PathBuf],
        manifest: &RemoteManifest,
    ) -> PlanResult {
        let mut result = PlanResult::default();

        let mut candidates: BTreeSet<PathBuf> = manifest.paths().map(Path::to_path_buf).collect();
        for candidate in local_candidates {
            match normalize_relative(candidate) {
                Ok(rel) => {
                    candidates.insert(rel);
                }
                Err(e) => result.errors.push(format!("{e:#}")),
            }
        }

        info!(
            root = %root.display(),
            candidates = candidates.len(),
            remote = manifest.len(),
            "planning"
        );

        let mut reconcilers = Vec::with_capacity(candidates.len());
        for rel in candidates {
            let mut reconciler = FileReconciler::new(root.join(&rel), self.file_utils.clone());
            let remote_event = match manifest.get(&rel) {
                Some(hash) => reconciler.found_remote(hash),
                None => reconciler.remote_done(),
            };
            if let Err(e) = remote_event {
                result.errors.push(format!("{}: {e}", rel.display()));
                continue;
            }
            reconcilers.push((rel, reconciler));
        }

        let probes = reconcilers
            .iter()
            .map(|(_, reconciler)| self.file_utils.exists(reconciler.path()));
        let probed = join_all(probes).await;

        let mut pending = Vec::with_capacity(reconcilers.len());
        for ((rel, mut reconciler), exists) in reconcilers.into_iter().zip(probed) {
            let local_event = match exists {
                Ok(true) => reconciler.found_file(),
                Ok(false) => reconciler.glob_done(),
                Err(e) => {
                    result.errors.push(format!("{}: {e:#}", rel.display()));
                    continue;
                }
            };
            if let Err(e) = local_event {
                result.errors.push(format!("{}: {e}", rel.display()));
                continue;
            }
            pending.push((rel, reconciler.action()));
        }

        let outcomes = join_all(pending.into_iter().map(|(rel, handle)| async move {
            (rel, handle.await)
        }))
        .await;

        for (path, outcome) in outcomes {
            match outcome {
                Ok(action) => {
                    debug!(path = %path.display(), %action, "planned");
                    result.entries.push(PlannedAction { path, action });
                }
                Err(e) => {
                    let mut message = format!("{}: {e}", path.display());
                    if let Some(source) = std::error::Error::source(&e) {
                        let _ = write!(message, ": {source}");
                    }
                    result.errors.push(message);
                }
            }
        }

        result
    }
}
