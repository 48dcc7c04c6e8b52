//! Property-based tests for inline tag normalization
//!
//! Tests invariants:
//! - Text without tag tokens passes through unchanged
//! - Normalization is idempotent
//! - No recognized kind ever leaves a residual token
//! - Unrecognized kinds are left byte-for-byte intact

use proptest::prelude::*;

use crate::render::tags::{clean_text, KNOWN_KINDS};

/// Prose with no `{` or `}` at all.
fn arb_clean_prose() -> impl Strategy<Value = String> {
    r"[A-Za-z0-9 .,;:'!?+\-]{0,120}"
}

/// Payloads legal inside a tag (no braces or pipes).
fn arb_payload() -> impl Strategy<Value = String> {
    r"[A-Za-z0-9 /+\-]{1,20}"
}

fn arb_known_kind() -> impl Strategy<Value = &'static str> {
    proptest::sample::select(KNOWN_KINDS)
}

proptest! {
    #[test]
    fn clean_prose_is_unchanged(text in arb_clean_prose()) {
        prop_assert_eq!(clean_text(&text), text);
    }

    #[test]
    fn normalization_is_idempotent(text in arb_clean_prose(), kind in arb_known_kind(), payload in arb_payload()) {
        let input = format!("{text} {{@{kind} {payload}}} {text}");
        let once = clean_text(&input);
        prop_assert_eq!(clean_text(&once), once);
    }

    #[test]
    fn no_residual_tokens_for_known_kinds(kind in arb_known_kind(), payload in arb_payload()) {
        let input = if kind == "h" || kind == "rechargeLegendary" {
            format!("{{@{kind}}}")
        } else {
            format!("{{@{kind} {payload}|extra}}")
        };
        let cleaned = clean_text(&input).to_lowercase();
        let token = format!("{{@{}", kind.to_lowercase());
        prop_assert!(!cleaned.contains(&token), "residue in {cleaned:?}");
    }

    #[test]
    fn unknown_kinds_are_untouched(payload in arb_payload()) {
        let input = format!("{{@mystery {payload}}}");
        prop_assert_eq!(clean_text(&input), input);
    }
}
