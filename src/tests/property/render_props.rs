//! Property-based tests for the entry renderer
//!
//! Tests invariants:
//! - The entry union deserializes any JSON value (totality)
//! - Rendering always terminates and produces a value
//! - Plain strings render to exactly one paragraph
//! - List blocks keep their item count

use proptest::prelude::*;
use serde_json::{json, Value};

use crate::render::{render, DisplayBlock, Entry};

/// Arbitrary JSON values of bounded depth, shaped to hit every entry
/// variant: strings, arrays, list/entries objects, and junk objects.
fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i32>().prop_map(Value::from),
        "[A-Za-z0-9 .,]{0,20}".prop_map(Value::from),
    ];
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::from),
            prop::collection::vec(inner.clone(), 0..4)
                .prop_map(|items| json!({"type": "list", "items": items})),
            ("[A-Za-z ]{0,12}", prop::collection::vec(inner.clone(), 0..4))
                .prop_map(|(name, entries)| json!({"type": "entries", "name": name, "entries": entries})),
            ("[A-Za-z ]{1,12}", inner.clone())
                .prop_map(|(name, entry)| json!({"name": name, "entry": entry})),
            ("[A-Za-z]{1,8}", inner).prop_map(|(key, value)| json!({ (key): value })),
        ]
    })
}

proptest! {
    #[test]
    fn entry_union_is_total(value in arb_json()) {
        let entry: Entry = serde_json::from_value(value).unwrap();
        // Rendering any shape terminates and yields blocks.
        let _ = render(Some(&entry));
    }

    #[test]
    fn strings_render_to_one_paragraph(text in "[A-Za-z0-9 .,]{0,40}") {
        let entry: Entry = serde_json::from_value(Value::from(text)).unwrap();
        let blocks = render(Some(&entry));
        prop_assert_eq!(blocks.len(), 1);
        prop_assert!(matches!(blocks[0], DisplayBlock::Paragraph(_)));
    }

    #[test]
    fn lists_keep_item_count(items in prop::collection::vec("[A-Za-z ]{0,10}", 0..8)) {
        let count = items.len();
        let entry: Entry =
            serde_json::from_value(json!({"type": "list", "items": items})).unwrap();
        match &render(Some(&entry))[..] {
            [DisplayBlock::List { items }] => prop_assert_eq!(items.len(), count),
            other => prop_assert!(false, "expected one list block, got {other:?}"),
        }
    }
}
