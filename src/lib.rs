//! Gleaner - collect, dedupe, and sort image assets across a page tree

pub mod collect;
pub mod model;
pub mod output;
pub mod scan;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use collect::{
    Collection, Collector, CollectorConfig, Direction, Preset, SortKey, page_images, site_images,
    walk,
};
pub use model::{Asset, AssetKind, Page, PageNode};
pub use output::{ListFormatter, OutputConfig, print_json};
pub use scan::{ScanConfig, Scanner};
