//! Stable sorting of collected assets

use std::cmp::Ordering;

use crate::model::Asset;

use super::config::{Direction, SortKey};

/// Sort `items` by `key` in `direction`. The sort is stable: assets whose
/// keys compare equal keep their pre-sort relative order, so the overall
/// result is deterministic for a given input sequence.
pub fn sort_assets(items: &mut [&Asset], key: SortKey, direction: Direction) {
    items.sort_by(|a, b| {
        let ord = compare_by_key(a, b, key);
        match direction {
            Direction::Ascending => ord,
            Direction::Descending => ord.reverse(),
        }
    });
}

/// Compare two assets on the selected attribute. Optional attributes use
/// `Option` ordering: absent values sort before present ones.
fn compare_by_key(a: &Asset, b: &Asset, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a.name.cmp(&b.name),
        SortKey::Filename => a.filename.cmp(&b.filename),
        SortKey::Modified => a.modified.cmp(&b.modified),
        SortKey::Size => a.size_bytes.cmp(&b.size_bytes),
    }
}
