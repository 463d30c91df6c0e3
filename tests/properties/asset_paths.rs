//! Property tests for asset name to output path mapping.

use std::path::Component;

use proptest::prelude::*;

use gostrap::domain::entities::{output_name, relative_path, AssetKind, TEMPLATE_SUFFIX};

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_-][A-Za-z0-9._-]{0,15}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Path conversion never panics on arbitrary input.
    #[test]
    fn property_relative_path_never_panics(s in "(?s).{0,128}") {
        let _ = relative_path(&s);
    }

    /// PROPERTY: An accepted path only has normal components.
    #[test]
    fn property_accepted_paths_stay_relative(s in "[a-z./]{0,32}") {
        if let Ok(path) = relative_path(&s) {
            prop_assert!(path.is_relative());
            prop_assert!(path.components().all(|c| matches!(c, Component::Normal(_))));
        }
    }

    /// PROPERTY: Any `..` segment is rejected.
    #[test]
    fn property_parent_segment_rejected(
        before in proptest::collection::vec(segment(), 0..=3),
        after in proptest::collection::vec(segment(), 0..=3),
    ) {
        let mut parts = before;
        parts.push("..".to_string());
        parts.extend(after);
        prop_assert!(relative_path(&parts.join("/")).is_err());
    }

    /// PROPERTY: Stripping the suffix from a template name gives the base name.
    #[test]
    fn property_template_output_name(parts in proptest::collection::vec(segment(), 1..=3)) {
        let base = parts.join("/");
        let name = format!("{}{}", base, TEMPLATE_SUFFIX);
        prop_assert_eq!(AssetKind::of(&name), AssetKind::Template);
        prop_assert_eq!(output_name(&name), base.as_str());
    }
}
