//! Facet Filters
//!
//! A facet is a named filter dimension over one category: item type
//! families, monster creature type and challenge rating, spell school
//! and casting class. Facet keywords form fixed, enumerable
//! vocabularies; an unknown keyword parses to `None` and yields an
//! empty result, never an error.

use crate::data::records::{Item, Monster};
use crate::data::sources::school_code;

// ============================================================================
// Item Facets
// ============================================================================

/// Tier qualifier for the wondrous item facet. `Unspecified` matches
/// items that carry no `tier` field at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WondrousTier {
    Unspecified,
    Minor,
    Major,
}

impl WondrousTier {
    pub fn parse(keyword: &str) -> Option<Self> {
        match keyword.to_lowercase().as_str() {
            "none" => Some(Self::Unspecified),
            "minor" => Some(Self::Minor),
            "major" => Some(Self::Major),
            _ => None,
        }
    }

    pub fn as_keyword(&self) -> &'static str {
        match self {
            Self::Unspecified => "none",
            Self::Minor => "minor",
            Self::Major => "major",
        }
    }
}

/// The item facet vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemFacet {
    Weapon,
    Melee,
    Ranged,
    Armor,
    LightArmor,
    MediumArmor,
    HeavyArmor,
    Poisons,
    Potions,
    Rings,
    Rods,
    Wands,
    Wondrous(Option<WondrousTier>),
}

impl ItemFacet {
    /// Parse a URL facet keyword. Tiered wondrous keywords take the
    /// form `wondrous-minor`.
    pub fn parse(keyword: &str) -> Option<Self> {
        let keyword = keyword.to_lowercase();
        match keyword.as_str() {
            "weapon" => Some(Self::Weapon),
            "melee" => Some(Self::Melee),
            "ranged" => Some(Self::Ranged),
            "armor" => Some(Self::Armor),
            "light" => Some(Self::LightArmor),
            "medium" => Some(Self::MediumArmor),
            "heavy" => Some(Self::HeavyArmor),
            "poisons" => Some(Self::Poisons),
            "potions" => Some(Self::Potions),
            "rings" => Some(Self::Rings),
            "rods" => Some(Self::Rods),
            "wands" => Some(Self::Wands),
            "wondrous" => Some(Self::Wondrous(None)),
            _ => keyword
                .strip_prefix("wondrous-")
                .and_then(WondrousTier::parse)
                .map(|tier| Self::Wondrous(Some(tier))),
        }
    }

    /// Whether `item` belongs to this facet.
    ///
    /// The matching rules preserve the reference vocabulary exactly,
    /// including its use of substring matches on the raw type string
    /// (type codes may be source-qualified like `"M|XPHB"`) and the
    /// name fallbacks for rings, rods, and wands.
    pub fn matches(&self, item: &Item) -> bool {
        let raw_type = item.item_type.as_deref();
        let code = item.type_code();
        let flag = |f: Option<bool>| f == Some(true);

        match self {
            Self::Weapon => {
                code == Some("M")
                    || code == Some("R")
                    || flag(item.weapon)
                    || item.weapon_category.is_some()
            }
            Self::Melee => match raw_type {
                Some(t) => t.contains('M') || (flag(item.weapon) && !t.contains('R')),
                None => false,
            },
            Self::Ranged => raw_type.is_some_and(|t| t.contains('R')),
            Self::Armor => {
                raw_type.is_some_and(|t| {
                    t.contains("LA") || t.contains("MA") || t.contains("HA")
                }) || flag(item.armor)
            }
            Self::LightArmor => Self::armor_tier_matches(item, "LA", "light"),
            Self::MediumArmor => Self::armor_tier_matches(item, "MA", "medium"),
            Self::HeavyArmor => Self::armor_tier_matches(item, "HA", "heavy"),
            Self::Poisons => code == Some("G") || flag(item.poison),
            Self::Potions => {
                raw_type.is_some_and(|t| t.contains('P')) || flag(item.potion)
            }
            Self::Rings => Self::code_or_name_matches(item, "RG", "ring"),
            Self::Rods => Self::code_or_name_matches(item, "RD", "rod"),
            Self::Wands => Self::code_or_name_matches(item, "WD", "wand"),
            Self::Wondrous(tier) => {
                let is_wondrous = code == Some("W") || flag(item.wondrous);
                is_wondrous
                    && match tier {
                        None => true,
                        Some(WondrousTier::Unspecified) => item.tier.is_none(),
                        Some(WondrousTier::Minor) => Self::tier_is(item, "minor"),
                        Some(WondrousTier::Major) => Self::tier_is(item, "major"),
                    }
            }
        }
    }

    fn armor_tier_matches(item: &Item, code: &str, word: &str) -> bool {
        match item.item_type.as_deref() {
            Some(t) => {
                t.contains(code)
                    || (item.armor == Some(true) && t.to_lowercase().contains(word))
            }
            None => false,
        }
    }

    fn code_or_name_matches(item: &Item, code: &str, word: &str) -> bool {
        item.type_code() == Some(code)
            || item.item_type.as_deref().is_some_and(|t| t.contains(code))
            || item.name.to_lowercase().contains(word)
    }

    fn tier_is(item: &Item, tier: &str) -> bool {
        item.tier
            .as_deref()
            .is_some_and(|t| t.eq_ignore_ascii_case(tier))
    }
}

// ============================================================================
// Monster Facets
// ============================================================================

/// The monster facet vocabulary: creature type strings and challenge
/// rating strings (URL-hyphen-escaped for fractions).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonsterFacet {
    CreatureType(String),
    ChallengeRating(String),
}

impl MonsterFacet {
    pub fn matches(&self, monster: &Monster) -> bool {
        match self {
            Self::CreatureType(wanted) => {
                let kind = monster.type_display();
                kind != "-" && kind.to_lowercase() == wanted.to_lowercase()
            }
            Self::ChallengeRating(wanted) => {
                let cr = monster.cr_display();
                if cr == "-" {
                    return false;
                }
                let cr = cr.to_lowercase();
                let wanted = wanted.to_lowercase();
                let normalized = normalize_cr_slug(&wanted);
                cr == normalized || cr == wanted || cr.replace('/', "-") == wanted
            }
        }
    }
}

/// Convert a URL-safe CR keyword back to its fraction form
/// (`"1-2"` → `"1/2"`). Whole-number CRs pass through unchanged.
pub fn normalize_cr_slug(keyword: &str) -> String {
    keyword
        .to_lowercase()
        .replace("1-8", "1/8")
        .replace("1-4", "1/4")
        .replace("1-2", "1/2")
        .replace("3-4", "3/4")
}

// ============================================================================
// Spell Facets
// ============================================================================

/// The spell facet vocabulary. School keywords accept a one-letter
/// code or a full school name; class membership needs the class→spell
/// cross-reference, so that match lives on the store rather than here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpellFacet {
    School(String),
    CastingClass(String),
}

impl SpellFacet {
    /// Canonical school code for a `School` facet, if the keyword is a
    /// recognized code or name.
    pub fn school_code(&self) -> Option<&'static str> {
        match self {
            Self::School(keyword) => school_code(keyword),
            Self::CastingClass(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn item(value: serde_json::Value) -> Item {
        serde_json::from_value(value).unwrap()
    }

    fn monster(value: serde_json::Value) -> Monster {
        serde_json::from_value(value).unwrap()
    }

    // ========================================================================
    // Keyword parsing
    // ========================================================================

    #[rstest]
    #[case("weapon", ItemFacet::Weapon)]
    #[case("Melee", ItemFacet::Melee)]
    #[case("armor", ItemFacet::Armor)]
    #[case("light", ItemFacet::LightArmor)]
    #[case("poisons", ItemFacet::Poisons)]
    #[case("wondrous", ItemFacet::Wondrous(None))]
    #[case("wondrous-none", ItemFacet::Wondrous(Some(WondrousTier::Unspecified)))]
    #[case("wondrous-minor", ItemFacet::Wondrous(Some(WondrousTier::Minor)))]
    #[case("wondrous-major", ItemFacet::Wondrous(Some(WondrousTier::Major)))]
    fn test_item_facet_parse(#[case] keyword: &str, #[case] expected: ItemFacet) {
        assert_eq!(ItemFacet::parse(keyword), Some(expected));
    }

    #[test]
    fn test_unknown_keywords_parse_to_none() {
        assert_eq!(ItemFacet::parse("vehicles"), None);
        assert_eq!(ItemFacet::parse("wondrous-legendary"), None);
        assert_eq!(WondrousTier::parse("mythic"), None);
    }

    // ========================================================================
    // Item matching
    // ========================================================================

    #[test]
    fn test_weapon_facet() {
        let sword = item(json!({"name": "Longsword", "source": "XPHB", "type": "M|XPHB"}));
        let bow = item(json!({"name": "Longbow", "source": "XPHB", "type": "R|XPHB"}));
        let flagged = item(json!({"name": "Oddity", "source": "XDMG", "weapon": true}));
        let robe = item(json!({"name": "Robe", "source": "XPHB", "type": "G|XPHB"}));

        assert!(ItemFacet::Weapon.matches(&sword));
        assert!(ItemFacet::Weapon.matches(&bow));
        assert!(ItemFacet::Weapon.matches(&flagged));
        assert!(!ItemFacet::Weapon.matches(&robe));

        assert!(ItemFacet::Melee.matches(&sword));
        assert!(!ItemFacet::Melee.matches(&bow));
        assert!(ItemFacet::Ranged.matches(&bow));
    }

    #[test]
    fn test_armor_facets() {
        let leather = item(json!({"name": "Leather Armor", "source": "XPHB", "type": "LA|XPHB"}));
        let chain = item(json!({"name": "Chain Mail", "source": "XPHB", "type": "HA|XPHB"}));

        assert!(ItemFacet::Armor.matches(&leather));
        assert!(ItemFacet::LightArmor.matches(&leather));
        assert!(!ItemFacet::HeavyArmor.matches(&leather));
        assert!(ItemFacet::HeavyArmor.matches(&chain));
    }

    #[test]
    fn test_named_family_fallbacks() {
        let ring = item(json!({"name": "Ring of Protection", "source": "XDMG", "type": "RG|XDMG"}));
        let unmarked_rod =
            item(json!({"name": "Rod of Absorption", "source": "XDMG"}));
        let wand = item(json!({"name": "Wand of Fear", "source": "XDMG", "type": "WD|XDMG"}));

        assert!(ItemFacet::Rings.matches(&ring));
        assert!(ItemFacet::Rods.matches(&unmarked_rod));
        assert!(ItemFacet::Wands.matches(&wand));
        assert!(!ItemFacet::Wands.matches(&ring));
    }

    #[test]
    fn test_wondrous_tiers() {
        let untiered = item(json!({"name": "Bag of Holding", "source": "XDMG", "wondrous": true}));
        let minor = item(json!({
            "name": "Cloak of Elvenkind", "source": "XDMG",
            "wondrous": true, "tier": "minor"
        }));

        assert!(ItemFacet::Wondrous(None).matches(&untiered));
        assert!(ItemFacet::Wondrous(None).matches(&minor));
        assert!(ItemFacet::Wondrous(Some(WondrousTier::Unspecified)).matches(&untiered));
        assert!(!ItemFacet::Wondrous(Some(WondrousTier::Unspecified)).matches(&minor));
        assert!(ItemFacet::Wondrous(Some(WondrousTier::Minor)).matches(&minor));
        assert!(!ItemFacet::Wondrous(Some(WondrousTier::Major)).matches(&minor));
    }

    // ========================================================================
    // Monster matching
    // ========================================================================

    #[test]
    fn test_creature_type_facet_is_case_insensitive() {
        let imp = monster(json!({"name": "Imp", "source": "XMM", "type": "Fiend"}));
        assert!(MonsterFacet::CreatureType("fiend".into()).matches(&imp));
        assert!(!MonsterFacet::CreatureType("fey".into()).matches(&imp));
    }

    #[rstest]
    #[case("1-2", "1/2", true)]
    #[case("1/2", "1/2", true)]
    #[case("1-8", "1/8", true)]
    #[case("3-4", "3/4", true)]
    #[case("5", "5", true)]
    #[case("1-2", "1/4", false)]
    fn test_cr_facet(#[case] keyword: &str, #[case] stored: &str, #[case] expected: bool) {
        let m = monster(json!({"name": "X", "source": "XMM", "cr": stored}));
        assert_eq!(
            MonsterFacet::ChallengeRating(keyword.to_string()).matches(&m),
            expected
        );
    }

    #[test]
    fn test_cr_facet_skips_monsters_without_cr() {
        let m = monster(json!({"name": "X", "source": "XMM"}));
        assert!(!MonsterFacet::ChallengeRating("1".into()).matches(&m));
    }

    // ========================================================================
    // Spell facets
    // ========================================================================

    #[test]
    fn test_school_facet_accepts_code_or_name() {
        assert_eq!(SpellFacet::School("V".into()).school_code(), Some("V"));
        assert_eq!(
            SpellFacet::School("evocation".into()).school_code(),
            Some("V")
        );
        assert_eq!(SpellFacet::School("chronomancy".into()).school_code(), None);
    }
}
