//! Display Blocks
//!
//! The flat output vocabulary of the renderer. The presentation layer
//! turns these into markup; nothing here knows about markup itself.

use serde::{Deserialize, Serialize};

/// One rendered display block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayBlock {
    /// A run of tag-normalized prose.
    Paragraph(String),
    /// An optional heading followed by an ordered body.
    Section {
        heading: Option<String>,
        body: Vec<DisplayBlock>,
    },
    /// An ordered list; each item is its own rendered sequence.
    List { items: Vec<Vec<DisplayBlock>> },
    /// Structural dump of an unrecognized entry shape. Rendered
    /// distinctly from prose so data gaps stay visible.
    Raw(String),
}

impl DisplayBlock {
    /// Plain-text projection, mainly for diagnostics and tests.
    pub fn plain_text(&self) -> String {
        match self {
            Self::Paragraph(text) | Self::Raw(text) => text.clone(),
            Self::Section { heading, body } => {
                let mut parts = Vec::new();
                if let Some(heading) = heading {
                    parts.push(heading.clone());
                }
                parts.extend(body.iter().map(DisplayBlock::plain_text));
                parts.join("\n")
            }
            Self::List { items } => items
                .iter()
                .map(|item| {
                    item.iter()
                        .map(DisplayBlock::plain_text)
                        .collect::<Vec<_>>()
                        .join("\n")
                })
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}
