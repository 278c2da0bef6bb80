//! The result sequence of a collect run

use serde::Serialize;

use crate::model::Asset;

/// An ordered sequence of unique assets produced by a collect run.
///
/// Built fresh on every call; holds references into the host's tree for the
/// lifetime of the borrow. Invariant: no two members share an identifying
/// name, and the order reflects traversal order of first occurrence followed
/// by the requested sort.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Collection<'a> {
    items: Vec<&'a Asset>,
}

impl<'a> Collection<'a> {
    pub(crate) fn new(items: Vec<&'a Asset>) -> Self {
        Self { items }
    }

    /// A collection with nothing in it ("nothing to collect" is not an error).
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'a Asset> {
        self.items.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Asset> + '_ {
        self.items.iter().copied()
    }

    pub fn into_vec(self) -> Vec<&'a Asset> {
        self.items
    }
}

impl<'a> IntoIterator for Collection<'a> {
    type Item = &'a Asset;
    type IntoIter = std::vec::IntoIter<&'a Asset>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, 'c> IntoIterator for &'c Collection<'a> {
    type Item = &'a Asset;
    type IntoIter = std::iter::Copied<std::slice::Iter<'c, &'a Asset>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter().copied()
    }
}
