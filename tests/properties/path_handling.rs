//! Property tests for path validation and package names.

use std::path::{Component, Path};

use proptest::prelude::*;

use vendorpub::domain::value_objects::{PackageName, SafePath};

fn path_like() -> impl Strategy<Value = String> {
    let segment = prop_oneof![
        Just("..".to_string()),
        Just(".".to_string()),
        Just(String::new()),
        proptest::string::string_regex("[A-Za-z0-9._-]{1,8}").unwrap(),
    ];
    (any::<bool>(), proptest::collection::vec(segment, 0..=6)).prop_map(|(absolute, segments)| {
        let joined = segments.join("/");
        if absolute {
            format!("/{}", joined)
        } else {
            joined
        }
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `SafePath::new` never panics on arbitrary small strings.
    #[test]
    fn property_safe_path_new_never_panics(
        s in ".{0,128}"
    ) {
        let _ = SafePath::new(s);
    }

    /// PROPERTY: an accepted path is relative and made of normal components only.
    #[test]
    fn property_safe_path_is_relative_and_normal(
        s in path_like()
    ) {
        if let Ok(safe) = SafePath::new(&s) {
            prop_assert!(safe.as_path().is_relative());
            prop_assert!(safe
                .as_path()
                .components()
                .all(|c| matches!(c, Component::Normal(_))));
        }
    }

    /// PROPERTY: whatever `resolve_under` accepts stays below the root.
    #[test]
    fn property_resolve_under_never_escapes(
        s in path_like()
    ) {
        let root = Path::new("/app/public/packages/acme/widgets");
        if let Ok(resolved) = SafePath::resolve_under(&s, root) {
            prop_assert!(resolved.starts_with(root));
            prop_assert!(resolved != root);
        }
    }

    /// PROPERTY: package names never resolve outside the vendor root.
    #[test]
    fn property_package_names_stay_in_vendor(
        s in path_like()
    ) {
        if let Ok(name) = PackageName::parse(&s) {
            let relative = name.relative_path();
            prop_assert!(relative.components().count() <= 2);
            prop_assert!(relative
                .components()
                .all(|c| matches!(c, Component::Normal(_))));
        }
    }

    /// PROPERTY: `PackageName::parse` never panics.
    #[test]
    fn property_package_name_never_panics(
        s in "(?s).{0,64}"
    ) {
        let _ = PackageName::parse(&s);
    }
}
