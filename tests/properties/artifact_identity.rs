//! Property tests for artifact identity equality, hashing, and display.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use proptest::prelude::*;

use mason::ArtifactIdentity;

fn attribute_string() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9._-]{0,12}").unwrap()
}

fn optional_attribute() -> impl Strategy<Value = Option<String>> {
    proptest::option::of(attribute_string())
}

fn hash_of(identity: &ArtifactIdentity) -> u64 {
    let mut hasher = DefaultHasher::new();
    identity.hash(&mut hasher);
    hasher.finish()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: identities built from the same attribute tuple are equal
    /// and hash identically, regardless of being distinct instances.
    #[test]
    fn property_equal_tuples_are_equal_and_hash_equal(
        name in attribute_string(),
        kind in attribute_string(),
        extension in optional_attribute(),
        classifier in optional_attribute(),
        must_exist in any::<bool>(),
    ) {
        let a = ArtifactIdentity::new(
            name.clone(), kind.clone(), extension.clone(), classifier.clone(), must_exist,
        );
        let b = ArtifactIdentity::new(name, kind, extension, classifier, must_exist);
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(hash_of(&a), hash_of(&b));
    }

    /// PROPERTY: flipping only `must_exist` always breaks equality.
    #[test]
    fn property_must_exist_flip_breaks_equality(
        name in attribute_string(),
        kind in attribute_string(),
        extension in optional_attribute(),
        classifier in optional_attribute(),
    ) {
        let relaxed = ArtifactIdentity::new(
            name.clone(), kind.clone(), extension.clone(), classifier.clone(), false,
        );
        let required = ArtifactIdentity::new(name, kind, extension, classifier, true);
        prop_assert_ne!(relaxed, required);
    }

    /// PROPERTY: file-name derivation never panics and keeps the
    /// type/extension duplication: both come from the same parse.
    #[test]
    fn property_for_file_name_never_panics(file_name in ".{0,64}") {
        let identity = ArtifactIdentity::for_file_name(&file_name, None);
        match identity.extension() {
            Some(extension) => prop_assert_eq!(identity.kind(), extension),
            None => prop_assert_eq!(identity.kind(), ""),
        }
        // Display is total.
        let _ = identity.to_string();
    }

    /// PROPERTY: derivation from a dotted file name recombines into the
    /// original: the display of a classifier-free identity whose name lost
    /// its extension re-appends that extension.
    #[test]
    fn property_for_file_name_display_round_trips(
        stem in proptest::string::string_regex("[A-Za-z][A-Za-z0-9_-]{0,12}").unwrap(),
        extension in proptest::string::string_regex("[a-z]{1,5}").unwrap(),
    ) {
        let file_name = format!("{stem}.{extension}");
        let identity = ArtifactIdentity::for_file_name(&file_name, None);
        prop_assert_eq!(identity.name(), stem.as_str());
        prop_assert_eq!(identity.to_string(), file_name);
    }
}
