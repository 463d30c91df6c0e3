//! Overwrite Confirmer Port
//!
//! Asked once per run, when the destination root already exists.
//! Implementations can be interactive (prompting the operator) or fixed.

use std::path::Path;

/// Decides whether an existing destination may be overwritten.
pub trait OverwriteConfirmer {
    /// Return `true` only on an explicit confirmation.
    fn confirm_overwrite(&self, root: &Path) -> bool;
}

/// Confirmer that always agrees.
///
/// Use this when `--yes` is passed.
pub struct AssumeYes;

impl OverwriteConfirmer for AssumeYes {
    fn confirm_overwrite(&self, _root: &Path) -> bool {
        true
    }
}

/// Confirmer that always declines.
pub struct AlwaysDecline;

impl OverwriteConfirmer for AlwaysDecline {
    fn confirm_overwrite(&self, _root: &Path) -> bool {
        false
    }
}
