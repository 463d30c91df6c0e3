//! Path Resolver
//!
//! Derives the destination root from the workspace root:
//! `$GOPATH/src/<repository>/<namespace>/<project>`.

use std::path::{Path, PathBuf};

use crate::domain::ports::FileSystem;
use crate::domain::value_objects::Target;
use crate::error::{ScaffoldError, ScaffoldResult};

/// Environment variable holding the workspace root
pub const WORKSPACE_VAR: &str = "GOPATH";

/// Check the workspace root value and confirm the directory exists.
pub fn resolve_workspace<FS: FileSystem + ?Sized>(
    workspace: Option<&Path>,
    fs: &FS,
) -> ScaffoldResult<PathBuf> {
    let workspace = match workspace {
        Some(path) if !path.as_os_str().is_empty() => path,
        _ => {
            return Err(ScaffoldError::MissingWorkspace { var: WORKSPACE_VAR });
        }
    };

    match fs.probe(workspace) {
        Ok(true) => Ok(workspace.to_path_buf()),
        Ok(false) => Err(ScaffoldError::WorkspaceNotFound {
            var: WORKSPACE_VAR,
            path: workspace.to_path_buf(),
        }),
        Err(err) => Err(ScaffoldError::io(workspace, err)),
    }
}

/// Destination root for a target under an existing workspace
pub fn destination_root(workspace: &Path, target: &Target) -> PathBuf {
    workspace
        .join("src")
        .join(target.repository())
        .join(target.namespace())
        .join(target.project())
}
