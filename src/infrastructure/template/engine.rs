//! Handlebars Template Engine
//!
//! Templates see the target as `{{repository}}`, `{{namespace}}`, and
//! `{{project}}`, plus `{{upper project}}` for the upper-cased form.
//! Output is never HTML-escaped: these are Go sources and Makefiles.

use handlebars::{handlebars_helper, no_escape, Handlebars};

use crate::domain::ports::{TemplateEngine, UPPER_HELPER};
use crate::domain::value_objects::Target;
use crate::error::{ScaffoldError, ScaffoldResult};

handlebars_helper!(upper: |value: str| value.to_uppercase());

/// Handlebars-backed renderer with strict variable lookup
pub struct HandlebarsEngine {
    registry: Handlebars<'static>,
}

impl HandlebarsEngine {
    pub fn new() -> Self {
        let mut registry = Handlebars::new();
        registry.register_escape_fn(no_escape);
        // Misspelled variables are errors, not empty strings.
        registry.set_strict_mode(true);
        registry.register_helper(UPPER_HELPER, Box::new(upper));
        Self { registry }
    }
}

impl Default for HandlebarsEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine for HandlebarsEngine {
    fn render(&self, name: &str, source: &str, target: &Target) -> ScaffoldResult<String> {
        self.registry
            .render_template(source, target)
            .map_err(|err| ScaffoldError::TemplateSyntax {
                name: name.to_string(),
                message: err.to_string(),
            })
    }
}
