//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system
//! - `repositories/` - Asset stores (embedded bundle, directory)
//! - `template/` - Handlebars template engine
//! - `process/` - External command runner
//! - `conflict/` - Interactive overwrite confirmation

pub mod conflict;
pub mod fs;
pub mod process;
pub mod repositories;
pub mod template;

// Re-export for convenience
pub use conflict::LineConfirmer;
pub use fs::LocalFs;
pub use process::SystemCommandRunner;
pub use repositories::{DirAssetStore, EmbeddedAssets};
pub use template::HandlebarsEngine;
