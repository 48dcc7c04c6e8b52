//! Record Types
//!
//! One struct per category. Every field beyond `name` and `source` is
//! optional — absence is the common case and must be tolerated
//! everywhere — and anything the schema grows that we do not model
//! lands in the flattened `extra` map instead of failing
//! deserialization.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::data::fields::{
    ArmorClassField, ChallengeRating, CreatureType, HitPointsField, SizeField, SpeedField,
    StringOrList,
};
use crate::data::sources::school_name;
use crate::render::Entry;

// ============================================================================
// Spell
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spell {
    pub name: String,
    pub source: String,
    #[serde(default)]
    pub level: Option<u8>,
    /// One-letter school code; see [`crate::data::sources::SPELL_SCHOOLS`].
    #[serde(default)]
    pub school: Option<String>,
    #[serde(default)]
    pub entries: Option<Entry>,
    #[serde(default, rename = "entriesHigherLevel")]
    pub entries_higher_level: Option<Entry>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Spell {
    /// Display form of the level: `"Cantrip"` for level 0, the number
    /// otherwise, `"-"` when absent.
    pub fn level_display(&self) -> String {
        match self.level {
            Some(0) => "Cantrip".to_string(),
            Some(level) => level.to_string(),
            None => "-".to_string(),
        }
    }

    /// Full school name, falling back to the raw code, then `"-"`.
    pub fn school_display(&self) -> String {
        match self.school.as_deref() {
            Some(code) => school_name(code).map(str::to_string).unwrap_or_else(|| code.to_string()),
            None => "-".to_string(),
        }
    }
}

// ============================================================================
// Item
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub source: String,
    /// Raw type code, possibly source-qualified (`"M|XPHB"`).
    #[serde(default, rename = "type")]
    pub item_type: Option<String>,
    #[serde(default)]
    pub rarity: Option<String>,
    #[serde(default)]
    pub tier: Option<String>,
    #[serde(default)]
    pub weapon: Option<bool>,
    #[serde(default)]
    pub armor: Option<bool>,
    #[serde(default)]
    pub poison: Option<bool>,
    #[serde(default)]
    pub potion: Option<bool>,
    #[serde(default)]
    pub wondrous: Option<bool>,
    #[serde(default, rename = "weaponCategory")]
    pub weapon_category: Option<String>,
    #[serde(default)]
    pub entries: Option<Entry>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Item {
    /// Type code with any `|SOURCE` qualifier stripped.
    pub fn type_code(&self) -> Option<&str> {
        self.item_type
            .as_deref()
            .map(|t| t.split('|').next().unwrap_or(t))
    }

    pub fn rarity_display(&self) -> &str {
        self.rarity.as_deref().unwrap_or("-")
    }
}

// ============================================================================
// Monster
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monster {
    pub name: String,
    pub source: String,
    #[serde(default)]
    pub cr: Option<ChallengeRating>,
    #[serde(default, rename = "type")]
    pub creature_type: Option<CreatureType>,
    #[serde(default)]
    pub size: Option<SizeField>,
    #[serde(default)]
    pub ac: Option<ArmorClassField>,
    #[serde(default)]
    pub hp: Option<HitPointsField>,
    #[serde(default)]
    pub speed: Option<SpeedField>,
    #[serde(default, rename = "str")]
    pub strength: Option<i64>,
    #[serde(default, rename = "dex")]
    pub dexterity: Option<i64>,
    #[serde(default, rename = "con")]
    pub constitution: Option<i64>,
    #[serde(default, rename = "int")]
    pub intelligence: Option<i64>,
    #[serde(default, rename = "wis")]
    pub wisdom: Option<i64>,
    #[serde(default, rename = "cha")]
    pub charisma: Option<i64>,
    #[serde(default)]
    pub senses: Option<StringOrList>,
    #[serde(default)]
    pub languages: Option<StringOrList>,
    #[serde(default)]
    pub passive: Option<i64>,
    #[serde(default, rename = "trait")]
    pub traits: Option<Vec<ActionBlock>>,
    #[serde(default, rename = "action")]
    pub actions: Option<Vec<ActionBlock>>,
    #[serde(default, rename = "reaction")]
    pub reactions: Option<Vec<ActionBlock>>,
    #[serde(default)]
    pub legendary: Option<Vec<ActionBlock>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Monster {
    pub fn cr_display(&self) -> String {
        self.cr
            .as_ref()
            .map(ChallengeRating::display)
            .unwrap_or_else(|| "-".to_string())
    }

    pub fn type_display(&self) -> String {
        self.creature_type
            .as_ref()
            .map(CreatureType::display)
            .unwrap_or_else(|| "-".to_string())
    }

    pub fn size_display(&self) -> String {
        self.size
            .as_ref()
            .map(SizeField::display)
            .unwrap_or_else(|| "-".to_string())
    }

    /// Ability modifier per the standard `(score - 10) / 2` floor,
    /// formatted with an explicit sign.
    pub fn ability_modifier(score: i64) -> String {
        let modifier = (score - 10).div_euclid(2);
        if modifier >= 0 {
            format!("+{modifier}")
        } else {
            modifier.to_string()
        }
    }
}

/// One stat-block entry (trait, action, reaction, legendary action):
/// a name heading plus an entry-typed body, both optional. This shape
/// lives outside the entry union; the caller presents the name as a
/// heading and renders the body itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActionBlock {
    Named {
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        entries: Option<Entry>,
    },
    Other(Value),
}

impl ActionBlock {
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Named { name, .. } => name.as_deref(),
            Self::Other(_) => None,
        }
    }

    pub fn entries(&self) -> Option<&Entry> {
        match self {
            Self::Named { entries, .. } => entries.as_ref(),
            Self::Other(_) => None,
        }
    }
}

// ============================================================================
// Character Class
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterClass {
    pub name: String,
    pub source: String,
    #[serde(default)]
    pub hd: Option<HitDice>,
    #[serde(default)]
    pub entries: Option<Entry>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Hit dice as `{number, faces}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitDice {
    pub number: u32,
    pub faces: u32,
}

impl HitDice {
    pub fn display(&self) -> String {
        format!("{}d{}", self.number, self.faces)
    }
}
