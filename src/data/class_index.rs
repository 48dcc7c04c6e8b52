//! Class→Spell Cross-Reference
//!
//! The spell data ships with an auxiliary table mapping provenance →
//! spell name → the classes that can cast it. Class references come in
//! two shapes: a plain class name string, or a `{name, source}` object
//! that only counts when its source is one of the accepted class
//! reference books.

use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

use crate::data::sources::CLASS_REF_SOURCES;

/// The whole cross-reference table, keyed by source book then spell
/// name.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct ClassSpellIndex {
    by_source: HashMap<String, HashMap<String, SpellClassRefs>>,
}

/// The class lists attached to one spell.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpellClassRefs {
    #[serde(default)]
    pub class: Vec<ClassRef>,
    #[serde(default, rename = "classVariant")]
    pub class_variant: Vec<ClassRef>,
}

/// One class membership reference.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ClassRef {
    Name(String),
    Keyed {
        name: String,
        #[serde(default)]
        source: Option<String>,
    },
    Other(Value),
}

impl ClassRef {
    /// Whether this reference names `class_lower` (already lowercased).
    /// Object references must also carry an accepted source.
    fn names(&self, class_lower: &str) -> bool {
        match self {
            Self::Name(name) => name.to_lowercase() == class_lower,
            Self::Keyed { name, source } => {
                name.to_lowercase() == class_lower
                    && source
                        .as_deref()
                        .is_some_and(|s| CLASS_REF_SOURCES.contains(&s))
            }
            Self::Other(_) => false,
        }
    }
}

impl SpellClassRefs {
    fn names(&self, class_lower: &str) -> bool {
        self.class.iter().chain(self.class_variant.iter()).any(|r| r.names(class_lower))
    }
}

impl ClassSpellIndex {
    /// Whether `spell_name` (exact record name) is castable by
    /// `class_name` according to the primary source book's block.
    pub fn spell_castable_by(&self, spell_name: &str, class_name: &str) -> bool {
        if class_name.is_empty() {
            return false;
        }
        let class_lower = class_name.to_lowercase();
        self.by_source
            .get("XPHB")
            .and_then(|spells| spells.get(spell_name))
            .is_some_and(|refs| refs.names(&class_lower))
    }

    pub fn is_empty(&self) -> bool {
        self.by_source.is_empty()
    }
}
