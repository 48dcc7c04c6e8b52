//! Data Access Layer
//!
//! Read-only, filtered, and sorted views over the bundled ruleset
//! records, plus slug computation and resolution. All data is loaded
//! once into an immutable [`DataStore`] snapshot; every operation is a
//! pure read over it.

pub mod class_index;
pub mod facets;
pub mod fields;
pub mod records;
pub mod slug;
pub mod sources;
pub mod store;

pub use class_index::ClassSpellIndex;
pub use facets::{ItemFacet, MonsterFacet, SpellFacet, WondrousTier};
pub use fields::{
    ArmorClassField, ChallengeRating, CreatureType, HitPointsField, SizeField, SpeedField,
    StringOrList,
};
pub use records::{ActionBlock, CharacterClass, HitDice, Item, Monster, Spell};
pub use slug::name_to_slug;
pub use store::{DataStore, StoreError};
