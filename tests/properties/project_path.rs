//! Property tests for logical project paths.

use proptest::prelude::*;

use mason::ProjectPath;

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9._-]{1,12}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: rendering then parsing a path yields the same path.
    #[test]
    fn property_display_parse_round_trips(
        segments in proptest::collection::vec(segment(), 0..5)
    ) {
        let mut path = ProjectPath::root();
        for segment in &segments {
            path = path.child(segment.clone());
        }
        let parsed = ProjectPath::parse(&path.to_string());
        prop_assert_eq!(parsed, Some(path));
    }

    /// PROPERTY: `child` then `parent` is the identity.
    #[test]
    fn property_child_then_parent_is_identity(
        segments in proptest::collection::vec(segment(), 0..4),
        name in segment(),
    ) {
        let mut base = ProjectPath::root();
        for segment in &segments {
            base = base.child(segment.clone());
        }
        let child = base.child(name.clone());
        prop_assert_eq!(child.parent(), Some(base));
        prop_assert_eq!(child.name(), Some(name.as_str()));
    }

    /// PROPERTY: parsing never panics on arbitrary input.
    #[test]
    fn property_parse_never_panics(s in ".{0,64}") {
        let _ = ProjectPath::parse(&s);
    }
}
