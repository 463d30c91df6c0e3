//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ScaffoldUseCase` - Validates, deploys, renders, and initializes a project

pub mod scaffold;

pub use scaffold::{ScaffoldOptions, ScaffoldReport, ScaffoldUseCase};
