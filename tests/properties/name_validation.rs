//! Property tests for target name validation.

use proptest::prelude::*;

use gostrap::domain::services::{is_valid_name, validate_names};
use gostrap::{ScaffoldError, Target, TargetField};

fn valid_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9._-]{1,32}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every non-empty string over the allowed alphabet is accepted.
    #[test]
    fn property_allowed_alphabet_is_accepted(name in valid_name()) {
        prop_assert!(is_valid_name(&name));
    }

    /// PROPERTY: Acceptance is exactly "non-empty and every char allowed".
    #[test]
    fn property_matches_char_predicate(s in "(?s).{0,48}") {
        let expected = !s.is_empty()
            && s.chars().all(|c| matches!(c, 'a'..='z' | '0'..='9' | '-' | '_' | '.'));
        prop_assert_eq!(is_valid_name(&s), expected);
    }

    /// PROPERTY: A single disallowed character anywhere makes the name invalid.
    #[test]
    fn property_one_bad_char_rejects(
        prefix in "[a-z0-9._-]{0,16}",
        bad in "[A-Z /:!@#$%^&*()+=~\\\\]",
        suffix in "[a-z0-9._-]{0,16}",
    ) {
        let name = format!("{}{}{}", prefix, bad, suffix);
        prop_assert!(!is_valid_name(&name));
    }

    /// PROPERTY: Target validation reports the first offending field.
    #[test]
    fn property_first_invalid_field_reported(
        repository in valid_name(),
        namespace in valid_name(),
        bad_index in 0usize..3,
    ) {
        let mut fields = [repository, namespace, "widget".to_string()];
        fields[bad_index].push('!');
        let [repository, namespace, project] = fields;
        let target = Target::new(repository, namespace, project);

        match validate_names(&target) {
            Err(ScaffoldError::InvalidName { field, value }) => {
                prop_assert_eq!(field, TargetField::ALL[bad_index]);
                prop_assert!(value.ends_with('!'));
            }
            other => prop_assert!(false, "expected InvalidName, got {:?}", other),
        }
    }
}
