//! Slug Computation
//!
//! A slug is the derived, lossy, URL-safe identifier computed from a
//! record's name: lowercased, runs of whitespace collapsed to a single
//! hyphen, and everything that is not a word character, `+`, or `-`
//! deleted. The mapping is deterministic and idempotent on its own
//! output, but not injective — names differing only in stripped
//! punctuation collide, which is accepted.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static DISALLOWED: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w+\-]").unwrap());

/// Convert a record name to its canonical slug.
pub fn name_to_slug(name: &str) -> String {
    let lowered = name.to_lowercase();
    let hyphenated = WHITESPACE.replace_all(&lowered, "-");
    DISALLOWED.replace_all(&hyphenated, "").into_owned()
}

/// All reasonable normalizations of an incoming slug.
///
/// A literal `+` in a stored slug may arrive from a router as `+`, as a
/// decoded space, or percent-encoded as `%2B`; the resolver tries each
/// candidate against the exact slug index before concluding "not
/// found". Order matters: the raw form first, then the decoded form,
/// then the space/plus swaps.
pub fn slug_variants(slug: &str) -> Vec<String> {
    let mut variants = vec![slug.to_string()];

    if let Ok(decoded) = urlencoding::decode(slug) {
        push_unique(&mut variants, decoded.into_owned());
    }
    push_unique(&mut variants, slug.replace(' ', "+"));
    push_unique(&mut variants, slug.replace('+', " "));

    variants
}

fn push_unique(variants: &mut Vec<String>, candidate: String) {
    if !variants.contains(&candidate) {
        variants.push(candidate);
    }
}
