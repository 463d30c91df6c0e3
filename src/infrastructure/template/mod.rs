//! Template Engine Implementations

mod engine;

pub use engine::HandlebarsEngine;
