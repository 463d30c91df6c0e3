//! Infrastructure implementations for OverwriteConfirmer
//!
//! This module provides the interactive implementation of the
//! `OverwriteConfirmer` trait.

mod interactive;

pub use interactive::LineConfirmer;
