//! Name-based deduplication

use std::collections::HashSet;

use crate::model::Asset;

/// Drop assets whose identifying name has already been seen, keeping the
/// first occurrence. Stable: the result is a subsequence of the input, so
/// applying it twice changes nothing.
pub fn dedup_by_name<'a>(items: Vec<&'a Asset>) -> Vec<&'a Asset> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(items.len());
    items
        .into_iter()
        .filter(|a| seen.insert(a.name.as_str()))
        .collect()
}
