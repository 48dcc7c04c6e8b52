//! Inline Reference Tag Normalization
//!
//! Ruleset prose embeds inline cross-reference tags of the form
//! `{@kind payload|extra}`; the pipe-delimited extra part is
//! display-only noise and is dropped. Each known kind maps to a fixed
//! replacement template, applied in table order. Unrecognized tags are
//! deliberately left untouched so coverage gaps surface in the output
//! instead of silently vanishing.

use once_cell::sync::Lazy;
use regex::Regex;

/// A tag with a payload: `{@kind payload}` or `{@kind payload|extra}`,
/// case-insensitive.
fn payload_rule(kind: &str) -> Regex {
    Regex::new(&format!(r"(?i)\{{@{kind}\s+([^}}|]+)(?:\|[^}}]*)?\}}")).unwrap()
}

/// A bare tag without a payload: `{@kind}`, case-insensitive.
fn bare_rule(kind: &str) -> Regex {
    Regex::new(&format!(r"(?i)\{{@{kind}\}}")).unwrap()
}

/// The ordered substitution table. Application order is the table
/// order; more specific kinds come before anything that could re-match
/// their replacement text.
static TAG_RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    vec![
        (payload_rule("damage"), "${1} damage"),
        (payload_rule("dice"), "${1}"),
        (payload_rule("spell"), "${1}"),
        (payload_rule("item"), "${1}"),
        (payload_rule("condition"), "${1}"),
        (payload_rule("skill"), "${1}"),
        (payload_rule("book"), "${1}"),
        (payload_rule("variantrule"), "${1}"),
        (payload_rule("feat"), "${1}"),
        (payload_rule("filter"), "${1}"),
        (payload_rule("5etools"), "${1}"),
        (payload_rule("scale"), "${1}"),
        (payload_rule("dc"), "DC ${1}"),
        (payload_rule("hit"), "+${1}"),
        (bare_rule("h"), ""),
        (payload_rule("atkr"), "${1} attack"),
        (payload_rule("atkm"), "${1} attack"),
        (payload_rule("actSave"), "${1} saving throw"),
        (payload_rule("actSaveFail"), "On a failed save, ${1}"),
        (payload_rule("chance"), "${1}% chance"),
        (payload_rule("recharge"), "Recharge ${1}"),
        (bare_rule("rechargeLegendary"), "Legendary Action"),
        (payload_rule("scaledamage"), "${1} damage"),
    ]
});

/// Every kind the table recognizes, for coverage checks.
pub const KNOWN_KINDS: &[&str] = &[
    "damage",
    "dice",
    "spell",
    "item",
    "condition",
    "skill",
    "book",
    "variantrule",
    "feat",
    "filter",
    "5etools",
    "scale",
    "dc",
    "hit",
    "h",
    "atkr",
    "atkm",
    "actSave",
    "actSaveFail",
    "chance",
    "recharge",
    "rechargeLegendary",
    "scaledamage",
];

/// Normalize every known inline reference tag in `text`.
///
/// Pure and idempotent: replacements never contain braces, so a second
/// pass finds nothing new to rewrite.
pub fn clean_text(text: &str) -> String {
    TAG_RULES
        .iter()
        .fold(text.to_string(), |acc, (pattern, replacement)| {
            pattern.replace_all(&acc, *replacement).into_owned()
        })
}
