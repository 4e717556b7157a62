//! Property-based tests for subpath relocation.

use super::relocate::try_replace_subpath;
use super::Separator;
use proptest::prelude::*;

fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,12}"
}

fn segments_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(segment_strategy(), 1..5)
}

fn join(sep: Separator, parts: &[String]) -> String {
    let mut out = String::new();
    for part in parts {
        out.push(sep.as_char());
        out.push_str(part);
    }
    out
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Moving a root and moving it back yields the original path
    #[test]
    fn relocation_round_trips(
        root in segments_strategy(),
        rest in segments_strategy(),
        target in segments_strategy(),
    ) {
        let sep = Separator::Slash;
        let old = join(sep, &root);
        let new = format!("/moved.d{}", join(sep, &target));
        let path = format!("{old}{}", join(sep, &rest));

        let moved = try_replace_subpath(&path, &old, &new).unwrap();
        prop_assert!(moved.is_some());
        let back = try_replace_subpath(&moved.unwrap(), &new, &old).unwrap();
        prop_assert_eq!(back, Some(path));
    }

    // The result only ever contains the replacement's separator
    #[test]
    fn output_uses_replacement_separator(
        root in segments_strategy(),
        rest in segments_strategy(),
        backslash in any::<bool>(),
    ) {
        let (new, sep) = if backslash {
            (r"D:\library".to_string(), Separator::Backslash)
        } else {
            ("/library".to_string(), Separator::Slash)
        };
        let old = join(Separator::Slash, &root);
        let path = format!("{old}{}", join(Separator::Backslash, &rest));

        if let Some(moved) = try_replace_subpath(&path, &old, &new).unwrap() {
            prop_assert!(!moved.contains(sep.other().as_char()));
        }
    }

    // A subpath never matches a longer sibling segment
    #[test]
    fn partial_segment_never_matches(root in segments_strategy(), suffix in segment_strategy()) {
        let old = join(Separator::Slash, &root);
        let path = format!("{old}{suffix}");

        let moved = try_replace_subpath(&path, &old, "/elsewhere").unwrap();
        prop_assert_eq!(moved, None);
    }

    // Case never affects whether a relocation happens
    #[test]
    fn matching_ignores_case(root in segments_strategy(), rest in segments_strategy()) {
        let old = join(Separator::Slash, &root);
        let path = format!("{}{}", old.to_uppercase(), join(Separator::Slash, &rest));

        let moved = try_replace_subpath(&path, &old, "/new").unwrap();
        prop_assert!(moved.is_some());
        prop_assert!(moved.unwrap().starts_with("/new/"));
    }
}
