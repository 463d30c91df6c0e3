//! Configuration types

use serde::{Deserialize, Serialize};

use crate::application::scaffold::{DEFAULT_DEPS_INIT, DEFAULT_VCS_INIT};
use crate::domain::ports::ExternalCommand;
use crate::domain::value_objects::TargetField;
use crate::error::ScaffoldResult;

use super::loader::{self, ConfigWarning};

/// Prompt defaults
///
/// Only prefill the interactive prompts; flags and answers still go through
/// name validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    pub repository: Option<String>,
    pub namespace: Option<String>,
    pub project: Option<String>,
}

impl DefaultsConfig {
    pub fn get(&self, field: TargetField) -> Option<&str> {
        match field {
            TargetField::Repository => self.repository.as_deref(),
            TargetField::Namespace => self.namespace.as_deref(),
            TargetField::Project => self.project.as_deref(),
        }
    }
}

/// External command lines, argv style
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandsConfig {
    #[serde(default = "default_vcs_init")]
    pub vcs_init: Vec<String>,
    #[serde(default = "default_deps_init")]
    pub deps_init: Vec<String>,
}

fn default_vcs_init() -> Vec<String> {
    DEFAULT_VCS_INIT.iter().map(|s| s.to_string()).collect()
}

fn default_deps_init() -> Vec<String> {
    DEFAULT_DEPS_INIT.iter().map(|s| s.to_string()).collect()
}

impl Default for CommandsConfig {
    fn default() -> Self {
        Self {
            vcs_init: default_vcs_init(),
            deps_init: default_deps_init(),
        }
    }
}

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub defaults: DefaultsConfig,
    pub commands: CommandsConfig,
}

impl Config {
    /// Load from `$GOSTRAP_CONFIG` or the user config file, else defaults
    pub fn load_or_default() -> ScaffoldResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default()
    }

    /// Version-control init command, `None` if the configured list is empty
    pub fn vcs_command(&self) -> Option<ExternalCommand> {
        ExternalCommand::from_argv(&self.commands.vcs_init)
    }

    /// Dependency init command, `None` if the configured list is empty
    pub fn deps_command(&self) -> Option<ExternalCommand> {
        ExternalCommand::from_argv(&self.commands.deps_init)
    }
}
