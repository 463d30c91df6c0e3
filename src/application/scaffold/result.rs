//! Scaffold Result
//!
//! Summary of a successful scaffold run.

use std::path::PathBuf;

use crate::domain::ports::PostDeployAction;

/// Result of a scaffold operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    /// Destination root
    pub root: PathBuf,
    /// Files that were written (plain copies and rendered templates)
    pub written: Vec<PathBuf>,
    /// Protected files left untouched
    pub skipped: Vec<PathBuf>,
    /// External actions that ran
    pub actions_run: Vec<PostDeployAction>,
    /// External actions skipped because their marker exists
    pub actions_skipped: Vec<PostDeployAction>,
}

impl ScaffoldReport {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            written: Vec::new(),
            skipped: Vec::new(),
            actions_run: Vec::new(),
            actions_skipped: Vec::new(),
        }
    }
}
