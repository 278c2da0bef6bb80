//! Collect pipeline orchestration

use std::slice;

use crate::model::PageNode;

use super::aggregate::aggregate;
use super::collection::Collection;
use super::config::{CollectorConfig, Direction, SortKey};
use super::dedup::dedup_by_name;
use super::sort::sort_assets;
use super::walk::walk;

/// Runs the walk → aggregate → dedup → sort pipeline over a page tree.
///
/// The collector itself is stateless between calls; it only carries the
/// configuration, so one instance can serve any number of trees.
pub struct Collector {
    config: CollectorConfig,
}

impl Collector {
    pub fn new(config: CollectorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CollectorConfig {
        &self.config
    }

    /// Collect the configured kind of assets from `root` and its children.
    ///
    /// The root page and its direct children always contribute; descendants
    /// beyond that are only visited when `recursive` is set.
    pub fn collect<'a, N: PageNode>(&self, root: &'a N) -> Collection<'a> {
        self.collect_forest(slice::from_ref(root))
    }

    /// Collect across several independent root pages, then run a single
    /// shared dedup and sort pass over the combined set. An empty `roots`
    /// yields an empty collection.
    pub fn collect_forest<'a, N: PageNode>(&self, roots: &'a [N]) -> Collection<'a> {
        let mut items = Vec::new();
        for root in roots {
            items.extend(aggregate(
                walk(root, self.config.recursive),
                self.config.kind,
            ));
        }

        let mut items = dedup_by_name(items);
        sort_assets(&mut items, self.config.key, self.config.direction);
        Collection::new(items)
    }
}

/// Collect images for one page. An absent page ("current page" resolution is
/// the caller's responsibility and may come up empty) yields an empty
/// collection rather than an error.
pub fn page_images<'a, N: PageNode>(
    page: Option<&'a N>,
    key: SortKey,
    direction: Direction,
    recursive: bool,
) -> Collection<'a> {
    match page {
        Some(page) => Collector::new(CollectorConfig {
            key,
            direction,
            recursive,
            ..CollectorConfig::default()
        })
        .collect(page),
        None => Collection::empty(),
    }
}

/// Collect images across all of a site's root pages. The whole-site walk is
/// always recursive.
pub fn site_images<'a, N: PageNode>(
    roots: &'a [N],
    key: SortKey,
    direction: Direction,
) -> Collection<'a> {
    Collector::new(CollectorConfig {
        key,
        direction,
        recursive: true,
        ..CollectorConfig::default()
    })
    .collect_forest(roots)
}
