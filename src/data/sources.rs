//! Static Lookup Tables
//!
//! Provenance allow-lists and abbreviation maps for the in-scope rule
//! edition. All tables are process-wide immutable statics initialized
//! once on first use.

use indexmap::IndexMap;
use once_cell::sync::Lazy;

// ============================================================================
// Provenance
// ============================================================================

/// Source books that are in scope for every category. Records from any
/// other provenance are dropped at load time.
pub const IN_SCOPE_SOURCES: &[&str] = &["XPHB", "XDMG", "XMM"];

/// Check whether a record's `source` tag is in scope.
pub fn is_in_scope(source: &str) -> bool {
    IN_SCOPE_SOURCES.contains(&source)
}

// ============================================================================
// Spell Schools
// ============================================================================

/// One-letter spell school codes and their full names, in display order.
pub static SPELL_SCHOOLS: Lazy<IndexMap<&'static str, &'static str>> = Lazy::new(|| {
    IndexMap::from([
        ("A", "Abjuration"),
        ("C", "Conjuration"),
        ("D", "Divination"),
        ("E", "Enchantment"),
        ("I", "Illusion"),
        ("N", "Necromancy"),
        ("T", "Transmutation"),
        ("V", "Evocation"),
    ])
});

/// Resolve a school facet keyword (a one-letter code or a full school
/// name, case-insensitive) to its canonical code.
pub fn school_code(keyword: &str) -> Option<&'static str> {
    let trimmed = keyword.trim();
    if trimmed.len() == 1 {
        let upper = trimmed.to_uppercase();
        return SPELL_SCHOOLS.get_key_value(upper.as_str()).map(|(k, _)| *k);
    }
    SPELL_SCHOOLS
        .iter()
        .find(|(_, name)| name.eq_ignore_ascii_case(trimmed))
        .map(|(code, _)| *code)
}

/// Full school name for a one-letter code, if known.
pub fn school_name(code: &str) -> Option<&'static str> {
    SPELL_SCHOOLS.get(code).copied()
}

// ============================================================================
// Damage Types
// ============================================================================

/// One-letter damage type codes used by item `dmgType` fields.
pub static DAMAGE_TYPES: Lazy<IndexMap<&'static str, &'static str>> = Lazy::new(|| {
    IndexMap::from([
        ("A", "acid"),
        ("B", "bludgeoning"),
        ("C", "cold"),
        ("F", "fire"),
        ("O", "force"),
        ("L", "lightning"),
        ("N", "necrotic"),
        ("P", "piercing"),
        ("I", "poison"),
        ("Y", "psychic"),
        ("R", "radiant"),
        ("S", "slashing"),
        ("T", "thunder"),
    ])
});

/// Full damage type name for a one-letter code, if known.
pub fn damage_type_name(code: &str) -> Option<&'static str> {
    DAMAGE_TYPES.get(code).copied()
}

// ============================================================================
// Spellcasting Classes
// ============================================================================

/// Class facet keywords accepted by the spell class filter, in the
/// order the navigation presents them.
pub const SPELLCASTING_CLASSES: &[&str] = &[
    "bard",
    "cleric",
    "druid",
    "paladin",
    "ranger",
    "sorcerer",
    "warlock",
    "wizard",
    "artificer",
];

/// Sources accepted for a class membership reference in the class→spell
/// cross-reference table.
pub const CLASS_REF_SOURCES: &[&str] = &["XPHB", "PHB"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_scope_sources() {
        assert!(is_in_scope("XPHB"));
        assert!(is_in_scope("XMM"));
        assert!(!is_in_scope("PHB"));
        assert!(!is_in_scope(""));
    }

    #[test]
    fn test_school_code_from_code() {
        assert_eq!(school_code("V"), Some("V"));
        assert_eq!(school_code("v"), Some("V"));
        assert_eq!(school_code("Z"), None);
    }

    #[test]
    fn test_school_code_from_name() {
        assert_eq!(school_code("Evocation"), Some("V"));
        assert_eq!(school_code("necromancy"), Some("N"));
        assert_eq!(school_code("divination "), Some("D"));
        assert_eq!(school_code("hemomancy"), None);
    }

    #[test]
    fn test_school_name() {
        assert_eq!(school_name("A"), Some("Abjuration"));
        assert_eq!(school_name("X"), None);
    }

    #[test]
    fn test_damage_type_name() {
        assert_eq!(damage_type_name("P"), Some("piercing"));
        assert_eq!(damage_type_name("Y"), Some("psychic"));
        assert_eq!(damage_type_name("Q"), None);
    }
}
