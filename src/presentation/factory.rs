//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::borrow::Cow;
use std::path::PathBuf;

use crate::application::ScaffoldUseCase;
use crate::domain::ports::AssetStore;
use crate::error::ScaffoldResult;
use crate::infrastructure::{
    DirAssetStore, EmbeddedAssets, HandlebarsEngine, LocalFs, SystemCommandRunner,
};

/// Either built-in store, picked at startup
pub enum AssetSource {
    Embedded(EmbeddedAssets),
    Directory(DirAssetStore),
}

impl AssetSource {
    /// `--assets DIR` if given, else the assets compiled into the binary
    pub fn from_option(dir: Option<PathBuf>) -> Self {
        match dir {
            Some(dir) => AssetSource::Directory(DirAssetStore::new(dir)),
            None => AssetSource::Embedded(EmbeddedAssets::new()),
        }
    }
}

impl AssetStore for AssetSource {
    fn names(&self) -> ScaffoldResult<Vec<String>> {
        match self {
            AssetSource::Embedded(store) => store.names(),
            AssetSource::Directory(store) => store.names(),
        }
    }

    fn fetch(&self, name: &str) -> ScaffoldResult<Cow<'_, [u8]>> {
        match self {
            AssetSource::Embedded(store) => store.fetch(name),
            AssetSource::Directory(store) => store.fetch(name),
        }
    }
}

/// Type alias for the concrete ScaffoldUseCase with all dependencies
pub type ConcreteScaffoldUseCase =
    ScaffoldUseCase<AssetSource, LocalFs, HandlebarsEngine, SystemCommandRunner>;

/// Create a scaffold use case with all dependencies wired up
///
/// `verbose` forwards the output of the external commands to the terminal.
pub fn create_scaffold_use_case(assets: AssetSource, verbose: bool) -> ConcreteScaffoldUseCase {
    ScaffoldUseCase::new(
        assets,
        LocalFs::new(),
        HandlebarsEngine::new(),
        SystemCommandRunner::new(verbose),
    )
}
