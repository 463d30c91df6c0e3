//! Configuration module for gostrap
//!
//! Lookup order:
//! 1. `$GOSTRAP_CONFIG` (must exist if set)
//! 2. User config (`<config_dir>/gostrap/config.toml`)
//! 3. Built-in defaults
//!
//! CLI flags always win over prompt defaults.

mod loader;
mod types;

pub use loader::{
    load_from, load_or_default, load_with_warnings, locate, ConfigLocation, ConfigWarning,
    CONFIG_ENV_VAR,
};
pub use types::{CommandsConfig, Config, DefaultsConfig};
