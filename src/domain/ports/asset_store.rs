//! AssetStore port - read-only provider of named asset payloads
//!
//! The pipeline only needs two operations: enumerate every logical name, and
//! fetch one payload by name. Implementations may embed assets in the binary
//! or read them from a directory.

use std::borrow::Cow;

use crate::error::ScaffoldResult;

/// Abstract store of scaffold assets
pub trait AssetStore {
    /// All logical asset names, in a stable order
    fn names(&self) -> ScaffoldResult<Vec<String>>;

    /// Payload for `name`, or `ScaffoldError::AssetMissing`
    fn fetch(&self, name: &str) -> ScaffoldResult<Cow<'_, [u8]>>;
}
