//! Embedded Asset Store
//!
//! The default scaffold, compiled into the binary from `assets/`.

use std::borrow::Cow;

use crate::domain::ports::AssetStore;
use crate::error::{ScaffoldError, ScaffoldResult};

// Kept sorted by name; `names()` returns this order.
const ASSETS: &[(&str, &[u8])] = &[
    (
        ".gitignore.template",
        include_bytes!("../../../assets/.gitignore.template"),
    ),
    (
        "Makefile.template",
        include_bytes!("../../../assets/Makefile.template"),
    ),
    (
        "README.md.template",
        include_bytes!("../../../assets/README.md.template"),
    ),
    (
        "build/Dockerfile",
        include_bytes!("../../../assets/build/Dockerfile"),
    ),
    (
        "main.go.template",
        include_bytes!("../../../assets/main.go.template"),
    ),
];

/// Asset store backed by the bundled Go project scaffold
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedAssets;

impl EmbeddedAssets {
    pub fn new() -> Self {
        Self
    }
}

impl AssetStore for EmbeddedAssets {
    fn names(&self) -> ScaffoldResult<Vec<String>> {
        Ok(ASSETS.iter().map(|(name, _)| name.to_string()).collect())
    }

    fn fetch(&self, name: &str) -> ScaffoldResult<Cow<'_, [u8]>> {
        ASSETS
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, content)| Cow::Borrowed(*content))
            .ok_or_else(|| ScaffoldError::AssetMissing {
                name: name.to_string(),
            })
    }
}
