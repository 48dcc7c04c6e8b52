//! Entry-Rendering Layer
//!
//! Converts one [`Entry`] document (or nothing) into an ordered, flat
//! sequence of [`DisplayBlock`]s, normalizing inline `{@kind ...}`
//! reference tags in any string content along the way. The transform
//! is pure, single-pass, and total: every shape the open-ended entry
//! union can take produces a value, falling back to a structural dump
//! for anything unrecognized.

pub mod blocks;
pub mod entry;
pub mod tags;

pub use blocks::DisplayBlock;
pub use entry::{Entry, InlineBlock, ListBlock, SectionBlock};
pub use tags::clean_text;

/// Render an optional entry document into display blocks.
///
/// `None` renders to an empty sequence; callers pass absent record
/// fields straight through.
pub fn render(entry: Option<&Entry>) -> Vec<DisplayBlock> {
    match entry {
        None => Vec::new(),
        Some(entry) => render_entry(entry),
    }
}

/// Render a sequence of entries in order.
pub fn render_all(entries: &[Entry]) -> Vec<DisplayBlock> {
    entries.iter().flat_map(render_entry).collect()
}

fn render_entry(entry: &Entry) -> Vec<DisplayBlock> {
    match entry {
        Entry::Text(text) => vec![DisplayBlock::Paragraph(clean_text(text))],
        // Nested sequences flatten one level; each element is its own
        // render pass.
        Entry::Sequence(entries) => render_all(entries),
        Entry::List(list) => vec![DisplayBlock::List {
            items: list.items.iter().map(render_entry).collect(),
        }],
        // The heading is presented as-is, without tag normalization.
        Entry::Section(section) => vec![DisplayBlock::Section {
            heading: section.name.clone(),
            body: render_all(&section.entries),
        }],
        Entry::Inline(inline) => vec![DisplayBlock::Section {
            heading: Some(inline.name.clone()),
            body: render_entry(&inline.entry),
        }],
        Entry::Unknown(value) => vec![DisplayBlock::Raw(value.to_string())],
    }
}
