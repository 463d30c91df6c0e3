//! Asset Entity
//!
//! Naming rules for asset store payloads. An asset name is a `/`-separated
//! logical path; names ending in `.template` are rendered against the target,
//! everything else is copied verbatim.

use std::path::{Component, Path, PathBuf};

use crate::error::{ScaffoldError, ScaffoldResult};

/// Suffix that marks an asset as a template
pub const TEMPLATE_SUFFIX: &str = ".template";

/// The Dockerfile every scaffold starts from
pub const DOCKERFILE_ASSET: &str = "build/Dockerfile";

/// Output path that is never overwritten once it exists
pub const PROTECTED_OUTPUT: &str = "main.go";

/// How an asset is deployed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// Copied byte-for-byte
    Plain,
    /// Rendered against the target, suffix stripped
    Template,
}

impl AssetKind {
    pub fn of(name: &str) -> Self {
        if name.ends_with(TEMPLATE_SUFFIX) && name.len() > TEMPLATE_SUFFIX.len() {
            AssetKind::Template
        } else {
            AssetKind::Plain
        }
    }
}

/// Strip the template suffix, if any.
pub fn output_name(name: &str) -> &str {
    match AssetKind::of(name) {
        AssetKind::Template => &name[..name.len() - TEMPLATE_SUFFIX.len()],
        AssetKind::Plain => name,
    }
}

/// Whether `name` deploys onto the protected entry point, as a template or
/// as a plain copy.
pub fn is_protected(name: &str) -> bool {
    relative_path(output_name(name)).is_ok_and(|path| path == Path::new(PROTECTED_OUTPUT))
}

/// Convert a logical name into a relative filesystem path.
///
/// Rejects empty names, absolute paths, and `..` components so that every
/// output stays under the destination root.
pub fn relative_path(name: &str) -> ScaffoldResult<PathBuf> {
    let unsafe_path = || ScaffoldError::UnsafeAssetPath {
        name: name.to_string(),
    };

    if name.is_empty() {
        return Err(unsafe_path());
    }

    let mut path = PathBuf::new();
    for segment in name.split('/').filter(|s| !s.is_empty()) {
        match Path::new(segment).components().next() {
            Some(Component::Normal(part)) if Path::new(segment).components().count() == 1 => {
                path.push(part)
            }
            Some(Component::CurDir) => continue,
            _ => return Err(unsafe_path()),
        }
    }

    if name.starts_with('/') || path.as_os_str().is_empty() {
        return Err(unsafe_path());
    }

    Ok(path)
}
