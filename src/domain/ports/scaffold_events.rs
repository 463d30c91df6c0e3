//! Scaffold Event Port
//!
//! Provides an observable interface for the scaffolding pipeline.
//! The CLI turns these into progress lines; tests record them.

use std::path::PathBuf;

/// External setup action run after the files are in place
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostDeployAction {
    /// `git init`, gated on `.git`
    VersionControl,
    /// `make godep`, gated on `Godeps/_workspace`
    Dependencies,
}

impl PostDeployAction {
    /// Path components of the marker whose presence skips the action
    pub fn marker(&self) -> &'static [&'static str] {
        match self {
            PostDeployAction::VersionControl => &[".git"],
            PostDeployAction::Dependencies => &["Godeps", "_workspace"],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PostDeployAction::VersionControl => "git repo",
            PostDeployAction::Dependencies => "godeps",
        }
    }
}

/// Event emitted during a scaffold run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldEvent {
    /// Workspace root located
    WorkspaceResolved { path: PathBuf },

    /// Destination root is about to be populated
    Boilerplating { root: PathBuf },

    /// Plain asset copied
    AssetCopied { path: PathBuf },

    /// Template rendered; `name` is the suffix-stripped logical name
    TemplateRendered { name: String, path: PathBuf },

    /// Asset skipped because its output is the protected entry point and present
    EntryPointKept { name: String, path: PathBuf },

    /// External action launched
    ActionStarted { action: PostDeployAction },

    /// External action skipped because its marker exists
    ActionSkipped { action: PostDeployAction },

    /// Run finished successfully
    Completed { root: PathBuf },
}

/// Trait for receiving scaffold events
pub trait ScaffoldEventSink {
    fn on_event(&self, event: ScaffoldEvent);
}
