//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Prompting for missing coordinates
//! - Creating use cases with infrastructure dependencies
//! - Rendering progress events
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `prompts` - dialoguer / line-based prompts
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Progress line rendering
//! - `runner` - Ties the above together for `main`

pub mod cli;
pub mod factory;
pub mod output;
pub mod prompts;
pub mod runner;

pub use cli::Cli;
pub use factory::{create_scaffold_use_case, AssetSource};
pub use output::ConsoleEventSink;
pub use runner::run;
