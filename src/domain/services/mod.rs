//! Domain Services
//!
//! Stateless rules shared by the application layer.

pub mod name_validator;
pub mod path_resolver;

pub use name_validator::{is_valid_name, validate_names};
pub use path_resolver::{destination_root, resolve_workspace, WORKSPACE_VAR};
