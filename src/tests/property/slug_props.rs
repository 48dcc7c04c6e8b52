//! Property-based tests for slug computation
//!
//! Tests invariants:
//! - Deterministic for the same input
//! - Idempotent when re-applied to its own output
//! - Output never contains whitespace or disallowed characters

use proptest::prelude::*;

use crate::data::slug::{name_to_slug, slug_variants};

/// Record-name-shaped strings: words, apostrophes, plus signs.
fn arb_record_name() -> impl Strategy<Value = String> {
    r"[A-Za-z0-9'+ ,\-]{1,40}"
}

proptest! {
    #[test]
    fn slug_is_deterministic(name in any::<String>()) {
        prop_assert_eq!(name_to_slug(&name), name_to_slug(&name));
    }

    #[test]
    fn slug_is_idempotent_on_own_output(name in any::<String>()) {
        let slug = name_to_slug(&name);
        prop_assert_eq!(name_to_slug(&slug), slug);
    }

    #[test]
    fn slug_contains_no_whitespace_or_uppercase(name in arb_record_name()) {
        let slug = name_to_slug(&name);
        prop_assert!(!slug.chars().any(char::is_whitespace));
        prop_assert!(!slug.chars().any(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn slug_keeps_only_word_chars_plus_and_hyphen(name in arb_record_name()) {
        let slug = name_to_slug(&name);
        prop_assert!(slug
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '+' || c == '-'));
    }

    #[test]
    fn variants_always_include_the_raw_slug(slug in r"[a-z0-9+\-]{1,30}") {
        let variants = slug_variants(&slug);
        prop_assert_eq!(variants[0].as_str(), slug.as_str());
    }
}
