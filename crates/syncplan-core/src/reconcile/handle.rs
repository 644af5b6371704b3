//! Single-resolution result handle
//!
//! A reconciler owns a [`Resolver`] and hands out [`ActionHandle`]s. The
//! resolver is consumed by [`Resolver::settle`], so the value behind every
//! handle is written at most once and never changes afterwards.

use std::future::IntoFuture;
use std::path::{Path, PathBuf};

use futures::FutureExt;
use futures::future::BoxFuture;
use tokio::sync::watch;

use super::action::Action;
use super::error::ReconcileError;

/// Final outcome of one reconciler
pub type Outcome = Result<Action, ReconcileError>;

/// Create a connected resolver/handle pair for `path`.
pub(crate) fn channel(path: &Path) -> (Resolver, ActionHandle) {
    let (tx, rx) = watch::channel(None);
    (
        Resolver { tx },
        ActionHandle {
            path: path.to_path_buf(),
            rx,
        },
    )
}

/// Writing half: settles the outcome exactly once.
#[derive(Debug)]
pub(crate) struct Resolver {
    tx: watch::Sender<Option<Outcome>>,
}

impl Resolver {
    pub(crate) fn settle(self, outcome: Outcome) {
        // Handles may all be gone; the value is still recorded for late clones.
        self.tx.send_replace(Some(outcome));
    }
}

/// Readable, cloneable view of a reconciler's outcome
///
/// Await it (or call [`ActionHandle::wait`]) to be notified once the outcome
/// is settled; every clone observes the same value.
#[derive(Debug, Clone)]
pub struct ActionHandle {
    path: PathBuf,
    rx: watch::Receiver<Option<Outcome>>,
}

impl ActionHandle {
    /// File this handle reports on
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the outcome is settled
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.rx.borrow().is_some()
    }

    /// The outcome, if already settled, without waiting
    #[must_use]
    pub fn peek(&self) -> Option<Outcome> {
        self.rx.borrow().clone()
    }

    /// Wait until the outcome is settled
    ///
    /// # Errors
    ///
    /// Returns the rejection the reconciler settled with, or
    /// [`ReconcileError::Abandoned`] if it was dropped before settling.
    pub async fn wait(mut self) -> Outcome {
        let settled = match self.rx.wait_for(Option::is_some).await {
            Ok(value) => (*value).clone(),
            Err(_) => None,
        };
        settled.unwrap_or_else(|| {
            Err(ReconcileError::Abandoned {
                path: self.path.clone(),
            })
        })
    }
}

impl IntoFuture for ActionHandle {
    type Output = Outcome;
    type IntoFuture = BoxFuture<'static, Outcome>;

    fn into_future(self) -> Self::IntoFuture {
        self.wait().boxed()
    }
}
