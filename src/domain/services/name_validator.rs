//! Name Validator
//!
//! Every target coordinate ends up both in a filesystem path and in a Docker
//! image name, so all three share Docker's repository naming restrictions.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::value_objects::{Target, TargetField};
use crate::error::{ScaffoldError, ScaffoldResult};

static VALID_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9\-_.]+$").expect("name pattern is a valid regex")
});

/// Check a single value against the naming policy
pub fn is_valid_name(value: &str) -> bool {
    VALID_NAME.is_match(value)
}

/// Validate repository, namespace, and project, in that order.
///
/// Fails on the first field that is empty or contains anything outside
/// `[a-z0-9-_.]`.
pub fn validate_names(target: &Target) -> ScaffoldResult<()> {
    for field in TargetField::ALL {
        let value = target.get(field);
        if !is_valid_name(value) {
            return Err(ScaffoldError::InvalidName {
                field,
                value: value.to_string(),
            });
        }
    }
    Ok(())
}
