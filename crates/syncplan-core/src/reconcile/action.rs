//! Reconciliation outcome

use std::fmt;

use serde::{Deserialize, Serialize};

/// Action a reconciler settles on for its file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    /// Remote copy exists, local file does not: remove the remote copy
    Delete,
    /// Local file is new or differs from the remote copy: push it
    Upload,
    /// Nothing to do
    Nothing,
}

impl Action {
    /// Lowercase name of the action
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Delete => "delete",
            Self::Upload => "upload",
            Self::Nothing => "nothing",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
