//! Property tests for template rendering.

use proptest::prelude::*;

use gostrap::domain::ports::TemplateEngine;
use gostrap::infrastructure::HandlebarsEngine;
use gostrap::Target;

fn name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9._-]{1,24}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Valid names substitute verbatim, with no escaping.
    #[test]
    fn property_variables_substitute_verbatim(
        repository in name(),
        namespace in name(),
        project in name(),
    ) {
        let engine = HandlebarsEngine::new();
        let target = Target::new(repository.clone(), namespace.clone(), project.clone());

        let rendered = engine
            .render("t.template", "{{repository}}/{{namespace}}/{{project}}", &target)
            .unwrap();
        prop_assert_eq!(rendered, format!("{}/{}/{}", repository, namespace, project));
    }

    /// PROPERTY: `upper` matches `str::to_uppercase`.
    #[test]
    fn property_upper_helper(project in name()) {
        let engine = HandlebarsEngine::new();
        let target = Target::new("github.com", "acme", project.clone());

        let rendered = engine.render("t.template", "{{upper project}}", &target).unwrap();
        prop_assert_eq!(rendered, project.to_uppercase());
    }

    /// PROPERTY: Text without mustaches renders unchanged.
    #[test]
    fn property_plain_text_is_identity(body in "[^{}\\\\]{0,200}") {
        let engine = HandlebarsEngine::new();
        let target = Target::new("github.com", "acme", "widget");

        let rendered = engine.render("t.template", &body, &target).unwrap();
        prop_assert_eq!(rendered, body);
    }
}
