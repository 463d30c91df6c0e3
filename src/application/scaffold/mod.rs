//! Scaffold Module
//!
//! Orchestrates the scaffolding flow for gostrap.
//!
//! ## Structure
//!
//! - `options` - Run configuration (`ScaffoldOptions`)
//! - `result` - Result types (`ScaffoldReport`)
//! - `use_case` - Core pipeline (`ScaffoldUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use gostrap::application::scaffold::{ScaffoldOptions, ScaffoldUseCase};
//!
//! let use_case = ScaffoldUseCase::new(assets, fs, engine, runner);
//! let report = use_case.execute(&ScaffoldOptions::new(target), &confirmer, &events)?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::{ScaffoldOptions, DEFAULT_DEPS_INIT, DEFAULT_VCS_INIT};
pub use result::ScaffoldReport;
pub use use_case::ScaffoldUseCase;
