//! Polymorphic Field Extractors
//!
//! Several bestiary fields are polymorphic between a scalar and an
//! object across data-source versions (challenge rating, creature
//! type, size, armor class, hit points, speed). Each becomes a tagged
//! union with an explicit fallback arm; every extractor returns a
//! display string and degrades to `"-"` on unrecognized shapes instead
//! of erroring.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Placeholder shown for absent or unrecognized field shapes.
pub const FIELD_FALLBACK: &str = "-";

// ============================================================================
// Challenge Rating
// ============================================================================

/// Challenge rating: either a plain string (`"1/2"`) or an object
/// carrying the rating under a `cr` key (lair/coven variants).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChallengeRating {
    Plain(String),
    Detailed { cr: String },
    Other(Value),
}

impl ChallengeRating {
    pub fn display(&self) -> String {
        match self {
            Self::Plain(cr) => cr.clone(),
            Self::Detailed { cr } => cr.clone(),
            Self::Other(_) => FIELD_FALLBACK.to_string(),
        }
    }
}

// ============================================================================
// Creature Type
// ============================================================================

/// Creature type: a plain string, or an object whose `type` key is
/// itself a string or a `{choose: [...]}` alternative set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CreatureType {
    Plain(String),
    Detailed {
        #[serde(rename = "type")]
        kind: CreatureTypeName,
    },
    Other(Value),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CreatureTypeName {
    Plain(String),
    Choice { choose: Vec<String> },
    Other(Value),
}

impl CreatureType {
    pub fn display(&self) -> String {
        match self {
            Self::Plain(kind) => kind.clone(),
            Self::Detailed { kind } => match kind {
                CreatureTypeName::Plain(name) => name.clone(),
                CreatureTypeName::Choice { choose } => choose.join(" or "),
                CreatureTypeName::Other(_) => FIELD_FALLBACK.to_string(),
            },
            Self::Other(_) => FIELD_FALLBACK.to_string(),
        }
    }
}

// ============================================================================
// Size
// ============================================================================

/// Size: a single code, an array of codes, or a `{choose: [...]}`
/// alternative set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SizeField {
    One(String),
    Many(Vec<String>),
    Choice { choose: Vec<String> },
    Other(Value),
}

impl SizeField {
    pub fn display(&self) -> String {
        match self {
            Self::One(size) => size.clone(),
            Self::Many(sizes) => sizes.join(", "),
            Self::Choice { choose } => choose.join(" or "),
            Self::Other(_) => FIELD_FALLBACK.to_string(),
        }
    }
}

// ============================================================================
// Armor Class
// ============================================================================

/// Armor class: a bare number or an array of per-form entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArmorClassField {
    Flat(i64),
    Entries(Vec<AcEntry>),
    Other(Value),
}

/// One armor class entry: a number, `{ac, from}`, or `{special}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AcEntry {
    Flat(i64),
    Detailed {
        ac: i64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        from: Option<Value>,
    },
    Special {
        special: String,
    },
    Other(Value),
}

impl ArmorClassField {
    pub fn display(&self) -> String {
        match self {
            Self::Flat(ac) => ac.to_string(),
            Self::Entries(entries) => {
                let parts: Vec<String> = entries
                    .iter()
                    .map(|entry| match entry {
                        AcEntry::Flat(ac) => ac.to_string(),
                        AcEntry::Detailed { ac, .. } => ac.to_string(),
                        AcEntry::Special { special } => special.clone(),
                        AcEntry::Other(_) => FIELD_FALLBACK.to_string(),
                    })
                    .collect();
                if parts.is_empty() {
                    FIELD_FALLBACK.to_string()
                } else {
                    parts.join(", ")
                }
            }
            Self::Other(_) => FIELD_FALLBACK.to_string(),
        }
    }
}

// ============================================================================
// Hit Points
// ============================================================================

/// Hit points: a bare number, `{average, formula}`, or `{special}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HitPointsField {
    Flat(i64),
    Average {
        average: i64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        formula: Option<String>,
    },
    Special {
        special: String,
    },
    Other(Value),
}

impl HitPointsField {
    pub fn display(&self) -> String {
        match self {
            Self::Flat(hp) => hp.to_string(),
            Self::Average { average, formula } => match formula {
                Some(formula) => format!("{average} ({formula})"),
                None => average.to_string(),
            },
            Self::Special { special } => special.clone(),
            Self::Other(_) => FIELD_FALLBACK.to_string(),
        }
    }
}

// ============================================================================
// Speed
// ============================================================================

/// Speed: a plain string, or a map from movement mode to a number of
/// feet or a `{number, condition}` pair. The `canHover`/`canSwim`
/// boolean toggles that share the map are skipped for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpeedField {
    Text(String),
    ByMode(indexmap::IndexMap<String, SpeedValue>),
    Other(Value),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpeedValue {
    Flat(i64),
    Conditional {
        number: i64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        condition: Option<String>,
    },
    Toggle(bool),
    Other(Value),
}

impl SpeedField {
    pub fn display(&self) -> String {
        match self {
            Self::Text(speed) => speed.clone(),
            Self::ByMode(modes) => {
                let parts: Vec<String> = modes
                    .iter()
                    .filter(|(mode, _)| mode.as_str() != "canHover" && mode.as_str() != "canSwim")
                    .filter_map(|(mode, value)| match value {
                        SpeedValue::Flat(feet) => Some(format!("{mode} {feet} ft.")),
                        SpeedValue::Conditional { number, condition } => match condition {
                            Some(condition) => Some(format!("{mode} {number} ft. {condition}")),
                            None => Some(format!("{mode} {number} ft.")),
                        },
                        SpeedValue::Toggle(_) => None,
                        SpeedValue::Other(_) => Some(format!("{mode} {FIELD_FALLBACK}")),
                    })
                    .collect();
                if parts.is_empty() {
                    FIELD_FALLBACK.to_string()
                } else {
                    parts.join(", ")
                }
            }
            Self::Other(_) => FIELD_FALLBACK.to_string(),
        }
    }
}

// ============================================================================
// String-or-List
// ============================================================================

/// Fields like `senses` and `languages` that are either a single string
/// or a list of strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StringOrList {
    One(String),
    Many(Vec<String>),
    Other(Value),
}

impl StringOrList {
    pub fn display(&self) -> String {
        match self {
            Self::One(value) => value.clone(),
            Self::Many(values) => values.join(", "),
            Self::Other(_) => FIELD_FALLBACK.to_string(),
        }
    }
}
