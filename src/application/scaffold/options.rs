//! Scaffold Options
//!
//! The immutable run configuration, built once at startup.

use std::path::PathBuf;

use crate::domain::ports::{ExternalCommand, PostDeployAction};
use crate::domain::value_objects::Target;

/// Default version-control init command
pub const DEFAULT_VCS_INIT: [&str; 2] = ["git", "init"];

/// Default dependency workspace init command
pub const DEFAULT_DEPS_INIT: [&str; 2] = ["make", "godep"];

/// Options for the scaffold use case
#[derive(Debug, Clone)]
pub struct ScaffoldOptions {
    /// What to scaffold (validated by the use case, not here)
    pub target: Target,
    /// Workspace root as read from the environment (`None` when unset)
    pub workspace: Option<PathBuf>,
    /// Run when `.git` is absent
    pub vcs_command: ExternalCommand,
    /// Run when `Godeps/_workspace` is absent
    pub deps_command: ExternalCommand,
}

impl ScaffoldOptions {
    pub fn new(target: Target) -> Self {
        Self {
            target,
            workspace: None,
            vcs_command: ExternalCommand::new(DEFAULT_VCS_INIT[0], [DEFAULT_VCS_INIT[1]]),
            deps_command: ExternalCommand::new(DEFAULT_DEPS_INIT[0], [DEFAULT_DEPS_INIT[1]]),
        }
    }

    pub fn with_workspace(mut self, workspace: Option<PathBuf>) -> Self {
        self.workspace = workspace;
        self
    }

    pub fn with_vcs_command(mut self, command: ExternalCommand) -> Self {
        self.vcs_command = command;
        self
    }

    pub fn with_deps_command(mut self, command: ExternalCommand) -> Self {
        self.deps_command = command;
        self
    }

    /// Command that performs `action`
    pub fn command_for(&self, action: PostDeployAction) -> &ExternalCommand {
        match action {
            PostDeployAction::VersionControl => &self.vcs_command,
            PostDeployAction::Dependencies => &self.deps_command,
        }
    }
}
