//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod asset_store;
pub mod command_runner;
pub mod file_system;
pub mod overwrite_confirmer;
pub mod scaffold_events;
pub mod template_engine;

pub use asset_store::AssetStore;
pub use command_runner::{CommandFailure, CommandRunner, ExternalCommand};
pub use file_system::FileSystem;
pub use overwrite_confirmer::{AlwaysDecline, AssumeYes, OverwriteConfirmer};
pub use scaffold_events::{PostDeployAction, ScaffoldEvent, ScaffoldEventSink};
pub use template_engine::{TemplateEngine, UPPER_HELPER};
