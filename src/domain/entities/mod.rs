//! Domain Entities

pub mod asset;

pub use asset::{
    is_protected, output_name, relative_path, AssetKind, DOCKERFILE_ASSET, PROTECTED_OUTPUT,
    TEMPLATE_SUFFIX,
};
