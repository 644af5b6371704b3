//! # syncplan-core
//!
//! Core library for the syncplan file synchronization planner.
//!
//! The heart of the crate is [`FileReconciler`]: a per-file state machine that
//! receives local and remote knowledge in any order and settles exactly one
//! [`Action`] (`upload`, `delete` or `nothing`), hashing the local file only
//! when both sides exist and a comparison is actually required.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Core error types for the syncplan library
pub mod error {
    /// Result type alias using `anyhow::Error`
    pub type Result<T> = anyhow::Result<T>;
}

/// Configuration file parsing and management
pub mod config;

/// File-utilities collaborator: existence probes and content hashing
pub mod file_utils;

/// Relative path normalisation
pub mod path;

/// Multi-file planning over independent reconcilers
pub mod plan;

/// Per-file reconciliation state machine
pub mod reconcile;

/// File-backed remote listing
pub mod remote;

#[cfg(test)]
pub(crate) mod test_support;

pub use file_utils::{FileUtils, LocalFileUtils};
pub use plan::{PlanReporter, PlanResult, PlanSession, PlannedAction};
pub use config::{Config, ConfigManager};
pub use reconcile::{
    Action, ActionHandle, Axis, DuplicateEventPolicy, FileReconciler, ReconcileError,
};
pub use remote::RemoteManifest;
