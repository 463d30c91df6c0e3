//! gostrap - Go project bootstrapper
//!
//! Creates `$GOPATH/src/<repository>/<namespace>/<project>`, fills it with a
//! Dockerfile, a Makefile, a README, a `.gitignore` and a `main.go` rendered
//! for the project, then runs `git init` and `make godep` where needed.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{ScaffoldOptions, ScaffoldReport, ScaffoldUseCase};
pub use config::{Config, ConfigWarning};
pub use domain::value_objects::{Target, TargetField};
pub use error::{ScaffoldError, ScaffoldResult};
