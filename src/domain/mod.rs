//! Domain Layer
//!
//! The core of gostrap: target naming rules, asset classification, and the
//! ports the pipeline talks through.
//!
//! ## Structure
//!
//! - `entities/` - Assets and their naming conventions
//! - `value_objects/` - The immutable `Target`
//! - `services/` - Name validation and destination path resolution
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No direct I/O** - File and process access goes through ports
//! 2. **Immutable inputs** - The target is validated once and never changed

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
