//! Named collection presets

use super::config::CollectorConfig;

/// The named collections a content site integrates with. Each preset is a
/// fixed [`CollectorConfig`]; the caller supplies the root page(s) itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Images of a page and its direct children.
    PageImages,
    /// Images of a page and all of its descendants.
    PageImagesRecursive,
    /// Images across every root page of a site, full subtrees.
    SiteImages,
}

impl Preset {
    pub const ALL: [Preset; 3] = [
        Preset::PageImages,
        Preset::PageImagesRecursive,
        Preset::SiteImages,
    ];

    /// Parse a preset name. Unlike sort keys, an unknown preset is a caller
    /// error, not something to fall back from.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "page-images" => Some(Preset::PageImages),
            "page-images-recursive" => Some(Preset::PageImagesRecursive),
            "site-images" => Some(Preset::SiteImages),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Preset::PageImages => "page-images",
            Preset::PageImagesRecursive => "page-images-recursive",
            Preset::SiteImages => "site-images",
        }
    }

    /// Whether this preset spans all site roots rather than a single page.
    pub fn site_wide(&self) -> bool {
        matches!(self, Preset::SiteImages)
    }

    /// The collect configuration this preset stands for. Sort key and
    /// direction stay at their defaults (name, ascending).
    pub fn config(&self) -> CollectorConfig {
        CollectorConfig {
            recursive: !matches!(self, Preset::PageImages),
            ..CollectorConfig::default()
        }
    }
}
