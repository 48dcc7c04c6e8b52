//! Load-Once Data Store
//!
//! Loads the bundled category files into an immutable in-memory
//! snapshot and answers every lookup as a pure read over it. Records
//! whose provenance is out of scope are dropped at load time;
//! per-category exact slug indices are computed once so slug
//! resolution never guesses names back from slugs.

use std::path::Path;

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use walkdir::WalkDir;

use crate::data::class_index::ClassSpellIndex;
use crate::data::facets::{normalize_cr_slug, ItemFacet, MonsterFacet, SpellFacet};
use crate::data::records::{CharacterClass, Item, Monster, Spell};
use crate::data::slug::{name_to_slug, slug_variants};
use crate::data::sources::is_in_scope;

// ============================================================================
// Errors
// ============================================================================

/// Errors raised while building the store. Individual unreadable or
/// unparseable files degrade to warnings; only an unusable data
/// directory is an error.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("data directory not found: {0}")]
    MissingDataDir(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// File envelopes
// ============================================================================

#[derive(Deserialize)]
struct SpellFile {
    #[serde(default)]
    spell: Vec<Spell>,
}

#[derive(Deserialize)]
struct ItemFile {
    #[serde(default)]
    item: Vec<Item>,
}

#[derive(Deserialize)]
struct MonsterFile {
    #[serde(default)]
    monster: Vec<Monster>,
}

#[derive(Deserialize)]
struct ClassFile {
    #[serde(default)]
    class: Vec<CharacterClass>,
}

// ============================================================================
// Store
// ============================================================================

/// The immutable record snapshot. `Send + Sync` by construction;
/// nothing in it is ever mutated after load.
#[derive(Debug, Default)]
pub struct DataStore {
    spells: Vec<Spell>,
    items: Vec<Item>,
    monsters: Vec<Monster>,
    classes: Vec<CharacterClass>,
    class_spell_index: ClassSpellIndex,
    spell_slugs: IndexMap<String, usize>,
    item_slugs: IndexMap<String, usize>,
    monster_slugs: IndexMap<String, usize>,
    class_slugs: IndexMap<String, usize>,
}

impl DataStore {
    /// Build a store from already-deserialized records, applying the
    /// provenance allow-list and computing the slug indices.
    pub fn from_parts(
        spells: Vec<Spell>,
        items: Vec<Item>,
        monsters: Vec<Monster>,
        classes: Vec<CharacterClass>,
        class_spell_index: ClassSpellIndex,
    ) -> Self {
        let spells: Vec<Spell> = spells.into_iter().filter(|r| is_in_scope(&r.source)).collect();
        let items: Vec<Item> = items.into_iter().filter(|r| is_in_scope(&r.source)).collect();
        let monsters: Vec<Monster> =
            monsters.into_iter().filter(|r| is_in_scope(&r.source)).collect();
        let classes: Vec<CharacterClass> =
            classes.into_iter().filter(|r| is_in_scope(&r.source)).collect();

        let spell_slugs = slug_index("spell", spells.iter().map(|s| s.name.as_str()));
        let item_slugs = slug_index("item", items.iter().map(|i| i.name.as_str()));
        let monster_slugs = slug_index("monster", monsters.iter().map(|m| m.name.as_str()));
        let class_slugs = slug_index("class", classes.iter().map(|c| c.name.as_str()));

        tracing::info!(
            spells = spells.len(),
            items = items.len(),
            monsters = monsters.len(),
            classes = classes.len(),
            "data store loaded"
        );

        Self {
            spells,
            items,
            monsters,
            classes,
            class_spell_index,
            spell_slugs,
            item_slugs,
            monster_slugs,
            class_slugs,
        }
    }

    /// Load the store from a data directory laid out as
    /// `spells/*.json` (with `spells/sources.json` feeding the
    /// class→spell index), `items/*.json`, `bestiary/*.json`, and
    /// `class/*.json`.
    pub fn load(dir: &Path) -> Result<Self, StoreError> {
        if !dir.is_dir() {
            return Err(StoreError::MissingDataDir(dir.display().to_string()));
        }

        let mut spells = Vec::new();
        let mut class_spell_index = ClassSpellIndex::default();
        for (path, value) in json_files(&dir.join("spells")) {
            if path.file_name().is_some_and(|f| f == "sources.json") {
                match serde_json::from_value(value) {
                    Ok(index) => class_spell_index = index,
                    Err(e) => tracing::warn!(path = %path.display(), error = %e, "skipping malformed class-spell index"),
                }
            } else {
                spells.extend(parse_records::<SpellFile>(&path, value).map(|f| f.spell).unwrap_or_default());
            }
        }

        let mut items = Vec::new();
        for (path, value) in json_files(&dir.join("items")) {
            items.extend(parse_records::<ItemFile>(&path, value).map(|f| f.item).unwrap_or_default());
        }

        let mut monsters = Vec::new();
        for (path, value) in json_files(&dir.join("bestiary")) {
            monsters.extend(parse_records::<MonsterFile>(&path, value).map(|f| f.monster).unwrap_or_default());
        }

        let mut classes = Vec::new();
        for (path, value) in json_files(&dir.join("class")) {
            classes.extend(parse_records::<ClassFile>(&path, value).map(|f| f.class).unwrap_or_default());
        }

        Ok(Self::from_parts(spells, items, monsters, classes, class_spell_index))
    }

    /// The class→spell cross-reference table.
    pub fn class_spell_index(&self) -> &ClassSpellIndex {
        &self.class_spell_index
    }

    // ========================================================================
    // Listings (source-file order)
    // ========================================================================

    pub fn spells(&self) -> &[Spell] {
        &self.spells
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn monsters(&self) -> &[Monster] {
        &self.monsters
    }

    pub fn classes(&self) -> &[CharacterClass] {
        &self.classes
    }

    // ========================================================================
    // Sorted listings
    // ========================================================================

    /// Spells sorted by level, then name.
    pub fn spells_sorted(&self) -> Vec<&Spell> {
        let mut spells: Vec<&Spell> = self.spells.iter().collect();
        spells.sort_by(|a, b| {
            a.level
                .unwrap_or(0)
                .cmp(&b.level.unwrap_or(0))
                .then_with(|| a.name.cmp(&b.name))
        });
        spells
    }

    pub fn items_sorted(&self) -> Vec<&Item> {
        let mut items: Vec<&Item> = self.items.iter().collect();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        items
    }

    pub fn monsters_sorted(&self) -> Vec<&Monster> {
        let mut monsters: Vec<&Monster> = self.monsters.iter().collect();
        monsters.sort_by(|a, b| a.name.cmp(&b.name));
        monsters
    }

    pub fn classes_sorted(&self) -> Vec<&CharacterClass> {
        let mut classes: Vec<&CharacterClass> = self.classes.iter().collect();
        classes.sort_by(|a, b| a.name.cmp(&b.name));
        classes
    }

    // ========================================================================
    // Slug resolution
    // ========================================================================

    pub fn spell_by_slug(&self, slug: &str) -> Option<&Spell> {
        resolve(&self.spell_slugs, &self.spells, slug)
    }

    pub fn item_by_slug(&self, slug: &str) -> Option<&Item> {
        resolve(&self.item_slugs, &self.items, slug)
    }

    pub fn monster_by_slug(&self, slug: &str) -> Option<&Monster> {
        resolve(&self.monster_slugs, &self.monsters, slug)
    }

    pub fn class_by_slug(&self, slug: &str) -> Option<&CharacterClass> {
        resolve(&self.class_slugs, &self.classes, slug)
    }

    // ========================================================================
    // Facet filters
    // ========================================================================

    /// Items matching a parsed facet.
    pub fn items_by_facet(&self, facet: &ItemFacet) -> Vec<&Item> {
        self.items.iter().filter(|i| facet.matches(i)).collect()
    }

    /// Items matching a facet keyword; unknown keywords yield an empty
    /// result.
    pub fn items_by_keyword(&self, keyword: &str) -> Vec<&Item> {
        match ItemFacet::parse(keyword) {
            Some(facet) => self.items_by_facet(&facet),
            None => Vec::new(),
        }
    }

    pub fn monsters_by_facet(&self, facet: &MonsterFacet) -> Vec<&Monster> {
        self.monsters.iter().filter(|m| facet.matches(m)).collect()
    }

    pub fn monsters_by_type(&self, creature_type: &str) -> Vec<&Monster> {
        self.monsters_by_facet(&MonsterFacet::CreatureType(creature_type.to_string()))
    }

    pub fn monsters_by_cr(&self, cr: &str) -> Vec<&Monster> {
        self.monsters_by_facet(&MonsterFacet::ChallengeRating(cr.to_string()))
    }

    pub fn spells_by_facet(&self, facet: &SpellFacet) -> Vec<&Spell> {
        match facet {
            SpellFacet::School(_) => match facet.school_code() {
                Some(code) => self
                    .spells
                    .iter()
                    .filter(|s| s.school.as_deref() == Some(code))
                    .collect(),
                None => Vec::new(),
            },
            SpellFacet::CastingClass(class_name) => self
                .spells
                .iter()
                .filter(|s| self.class_spell_index.spell_castable_by(&s.name, class_name))
                .collect(),
        }
    }

    pub fn spells_by_school(&self, keyword: &str) -> Vec<&Spell> {
        self.spells_by_facet(&SpellFacet::School(keyword.to_string()))
    }

    pub fn spells_by_class(&self, class_name: &str) -> Vec<&Spell> {
        self.spells_by_facet(&SpellFacet::CastingClass(class_name.to_string()))
    }

    // ========================================================================
    // Facet vocabularies
    // ========================================================================

    /// Unique lowercased creature types, sorted.
    pub fn monster_type_vocabulary(&self) -> Vec<String> {
        let mut types: Vec<String> = self
            .monsters
            .iter()
            .map(Monster::type_display)
            .filter(|t| t != "-")
            .map(|t| t.to_lowercase())
            .collect();
        types.sort();
        types.dedup();
        types
    }

    /// Unique challenge ratings as URL-safe slugs (`1/2` → `1-2`),
    /// sorted by numeric value.
    pub fn monster_cr_vocabulary(&self) -> Vec<String> {
        let mut crs: Vec<String> = self
            .monsters
            .iter()
            .map(Monster::cr_display)
            .filter(|cr| cr != "-")
            .map(|cr| cr.to_lowercase().replace('/', "-"))
            .collect();
        crs.sort();
        crs.dedup();
        crs.sort_by(|a, b| {
            cr_sort_value(a)
                .partial_cmp(&cr_sort_value(b))
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        crs
    }
}

/// Numeric sort key for a URL-safe CR slug; unparseable values sort
/// first.
fn cr_sort_value(slug: &str) -> f64 {
    match normalize_cr_slug(slug).as_str() {
        "1/8" => 0.125,
        "1/4" => 0.25,
        "1/2" => 0.5,
        "3/4" => 0.75,
        other => other.parse().unwrap_or(0.0),
    }
}

fn slug_index<'a>(category: &str, names: impl Iterator<Item = &'a str>) -> IndexMap<String, usize> {
    let mut index = IndexMap::new();
    for (position, name) in names.enumerate() {
        let slug = name_to_slug(name);
        if index.contains_key(&slug) {
            // Accepted lossy mapping: first record wins on collision.
            tracing::debug!(category, slug, "duplicate slug, keeping first record");
            continue;
        }
        index.insert(slug, position);
    }
    index
}

fn resolve<'a, T>(index: &IndexMap<String, usize>, records: &'a [T], slug: &str) -> Option<&'a T> {
    slug_variants(slug)
        .iter()
        .find_map(|candidate| index.get(candidate.as_str()))
        .map(|&position| &records[position])
}

/// All `.json` files directly under `dir`, parsed to raw values, in
/// deterministic name order. Missing directories and bad files degrade
/// to an empty/skipped result with a warning.
fn json_files(dir: &Path) -> Vec<(std::path::PathBuf, Value)> {
    if !dir.is_dir() {
        tracing::debug!(dir = %dir.display(), "no such data subdirectory");
        return Vec::new();
    }
    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
    {
        let path = entry.path();
        if !path.is_file() || path.extension().map_or(true, |ext| ext != "json") {
            continue;
        }
        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(value) => files.push((path.to_path_buf(), value)),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping malformed JSON file")
                }
            },
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "skipping unreadable file"),
        }
    }
    files
}

fn parse_records<T: DeserializeOwned>(path: &Path, value: Value) -> Option<T> {
    match serde_json::from_value(value) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "skipping file with unexpected shape");
            None
        }
    }
}
