//! Value Objects
//!
//! Immutable types with no identity.

mod target;

pub use target::{Target, TargetField};
