//! Search Entries
//!
//! Flat, precomputed entries for the presentation layer's client-side
//! search box: one `(name, slug, category, metadata)` row per in-scope
//! record. Pure projections over the store snapshot.

use serde::Serialize;

use crate::data::slug::name_to_slug;
use crate::data::DataStore;

/// Record category, as presented in search results and URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Spell,
    Item,
    Monster,
    Class,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spell => "spell",
            Self::Item => "item",
            Self::Monster => "monster",
            Self::Class => "class",
        }
    }
}

/// One searchable row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchEntry {
    pub name: String,
    pub slug: String,
    pub category: Category,
    /// Short secondary line shown under the name.
    pub metadata: String,
}

/// Entries for every spell: `"Level {Cantrip|n} • {School}"`.
pub fn spell_entries(store: &DataStore) -> Vec<SearchEntry> {
    store
        .spells()
        .iter()
        .map(|spell| SearchEntry {
            name: spell.name.clone(),
            slug: name_to_slug(&spell.name),
            category: Category::Spell,
            metadata: format!("Level {} • {}", spell.level_display(), spell.school_display()),
        })
        .collect()
}

/// Entries for every item, annotated with rarity.
pub fn item_entries(store: &DataStore) -> Vec<SearchEntry> {
    store
        .items()
        .iter()
        .map(|item| SearchEntry {
            name: item.name.clone(),
            slug: name_to_slug(&item.name),
            category: Category::Item,
            metadata: item.rarity_display().to_string(),
        })
        .collect()
}

/// Entries for every monster: `"CR {cr} • {type}"`.
pub fn monster_entries(store: &DataStore) -> Vec<SearchEntry> {
    store
        .monsters()
        .iter()
        .map(|monster| SearchEntry {
            name: monster.name.clone(),
            slug: name_to_slug(&monster.name),
            category: Category::Monster,
            metadata: format!("CR {} • {}", monster.cr_display(), monster.type_display()),
        })
        .collect()
}

/// Entries for every class, annotated with provenance.
pub fn class_entries(store: &DataStore) -> Vec<SearchEntry> {
    store
        .classes()
        .iter()
        .map(|class| SearchEntry {
            name: class.name.clone(),
            slug: name_to_slug(&class.name),
            category: Category::Class,
            metadata: class.source.clone(),
        })
        .collect()
}

/// Every category's entries, concatenated in navigation order.
pub fn all_entries(store: &DataStore) -> Vec<SearchEntry> {
    let mut entries = spell_entries(store);
    entries.extend(item_entries(store));
    entries.extend(monster_entries(store));
    entries.extend(class_entries(store));
    entries
}
