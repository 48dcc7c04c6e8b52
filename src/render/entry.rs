//! The Entry Document Union
//!
//! The ruleset's rich-text format is a recursive, loosely shaped
//! union: plain strings, arrays, `{type: "list"}` blocks,
//! `{type: "entries"}` sections, and `{name, entry}` inline blocks.
//! It is modeled here as a closed sum type with an explicit
//! [`Entry::Unknown`] fallback arm so deserialization is total —
//! any JSON value becomes some `Entry`, never an error.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One node of the recursive entry document.
///
/// Variant order matters: `serde(untagged)` tries them top to bottom,
/// and the `type` discriminants of [`ListBlock`] and [`SectionBlock`]
/// are enforced by single-variant tag enums so the two cannot
/// cross-match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    Text(String),
    List(ListBlock),
    Section(SectionBlock),
    Sequence(Vec<Entry>),
    Inline(InlineBlock),
    Unknown(Value),
}

/// `{type: "list", items: [...]}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListBlock {
    #[serde(rename = "type")]
    tag: ListTag,
    #[serde(default)]
    pub items: Vec<Entry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ListTag {
    List,
}

/// `{type: "entries", name?: ..., entries: [...]}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionBlock {
    #[serde(rename = "type")]
    tag: SectionTag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub entries: Vec<Entry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum SectionTag {
    Entries,
}

/// `{name: ..., entry: ...}` — a heading with a single body entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineBlock {
    pub name: String,
    pub entry: Box<Entry>,
}

impl Entry {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn list(items: Vec<Entry>) -> Self {
        Self::List(ListBlock {
            tag: ListTag::List,
            items,
        })
    }

    pub fn section(name: Option<&str>, entries: Vec<Entry>) -> Self {
        Self::Section(SectionBlock {
            tag: SectionTag::Entries,
            name: name.map(str::to_string),
            entries,
        })
    }

    pub fn inline(name: impl Into<String>, entry: Entry) -> Self {
        Self::Inline(InlineBlock {
            name: name.into(),
            entry: Box::new(entry),
        })
    }
}
