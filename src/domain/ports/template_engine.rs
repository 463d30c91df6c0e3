//! TemplateEngine port
//!
//! Renders a template body against a [`Target`]. The engine owns the helper
//! table; the only helper is `upper`, which upper-cases its argument.

use crate::domain::value_objects::Target;
use crate::error::ScaffoldResult;

/// Name of the upper-case helper exposed to templates
pub const UPPER_HELPER: &str = "upper";

/// Template rendering interface
pub trait TemplateEngine {
    /// Render `source` with the target's fields as variables.
    ///
    /// `name` is used for error messages only. Parse and render failures are
    /// reported as `ScaffoldError::TemplateSyntax`.
    fn render(&self, name: &str, source: &str, target: &Target) -> ScaffoldResult<String>;
}
