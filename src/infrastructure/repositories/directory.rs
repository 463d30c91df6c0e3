//! Directory Asset Store
//!
//! Loads scaffold assets from a directory tree on disk, so a team can keep
//! its own boilerplate next to the binary instead of rebuilding it.

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::entities::relative_path;
use crate::domain::ports::AssetStore;
use crate::error::{ScaffoldError, ScaffoldResult};

/// Asset store rooted at a directory.
///
/// Logical names are `/`-joined paths relative to the root. Hidden files are
/// included (`.gitignore.template` is a normal asset).
#[derive(Debug, Clone)]
pub struct DirAssetStore {
    root: PathBuf,
}

impl DirAssetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn collect(&self, current: &Path, prefix: &str, names: &mut Vec<String>) -> ScaffoldResult<()> {
        let entries = fs::read_dir(current).map_err(|e| ScaffoldError::io(current, e))?;

        for entry in entries {
            let entry = entry.map_err(|e| ScaffoldError::io(current, e))?;
            let path = entry.path();
            let file_name = entry.file_name();
            let Some(file_name) = file_name.to_str() else {
                tracing::warn!(path = %path.display(), "skipping asset with non UTF-8 name");
                continue;
            };

            let name = if prefix.is_empty() {
                file_name.to_string()
            } else {
                format!("{}/{}", prefix, file_name)
            };

            let file_type = entry
                .file_type()
                .map_err(|e| ScaffoldError::io(&path, e))?;
            if file_type.is_dir() {
                self.collect(&path, &name, names)?;
            } else {
                names.push(name);
            }
        }

        Ok(())
    }
}

impl AssetStore for DirAssetStore {
    fn names(&self) -> ScaffoldResult<Vec<String>> {
        if !self.root.is_dir() {
            return Err(ScaffoldError::AssetMissing {
                name: self.root.display().to_string(),
            });
        }

        let mut names = Vec::new();
        self.collect(&self.root, "", &mut names)?;
        names.sort();
        Ok(names)
    }

    fn fetch(&self, name: &str) -> ScaffoldResult<Cow<'_, [u8]>> {
        let path = self.root.join(relative_path(name)?);
        match fs::read(&path) {
            Ok(bytes) => Ok(Cow::Owned(bytes)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Err(ScaffoldError::AssetMissing {
                    name: name.to_string(),
                })
            }
            Err(err) => Err(ScaffoldError::io(path, err)),
        }
    }
}
