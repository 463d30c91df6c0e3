//! Asset Store Implementations
//!
//! - `EmbeddedAssets` - the bundled scaffold (default)
//! - `DirAssetStore` - a scaffold directory on disk (`--assets`)

mod directory;
mod embedded;

pub use directory::DirAssetStore;
pub use embedded::EmbeddedAssets;
