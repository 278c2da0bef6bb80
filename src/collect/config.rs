//! Configuration types for the collector

use crate::model::AssetKind;

/// Sort key for a collected set of assets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Identifying name (filename without extension). The default.
    #[default]
    Name,
    /// Full filename including extension.
    Filename,
    /// Modification time; assets without one order first.
    Modified,
    /// Size in bytes; assets without one order first.
    Size,
}

impl SortKey {
    /// Strict textual parse. Returns `None` for anything unrecognized.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "name" => Some(SortKey::Name),
            "filename" => Some(SortKey::Filename),
            "modified" | "mtime" => Some(SortKey::Modified),
            "size" => Some(SortKey::Size),
            _ => None,
        }
    }

    /// Lenient textual parse: unrecognized keys fall back to [`SortKey::Name`]
    /// so a stringly-typed caller cannot make a collect call fail.
    pub fn parse_lossy(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    /// Lenient textual parse: `desc`/`descending` select descending,
    /// anything else ascending.
    pub fn parse_lossy(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "desc" | "descending" => Direction::Descending,
            _ => Direction::Ascending,
        }
    }
}

/// Configuration for a collect run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectorConfig {
    pub key: SortKey,
    pub direction: Direction,
    /// Descend past direct children. The root page and its direct children
    /// are always included; only deeper descendants are gated by this flag.
    pub recursive: bool,
    /// Which attached assets to collect.
    pub kind: AssetKind,
}
