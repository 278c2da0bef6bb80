//! Configuration for the filesystem scanner

/// Configuration for scanning a directory into a page tree.
#[derive(Debug, Clone, Default)]
pub struct ScanConfig {
    /// Include entries whose name starts with a dot.
    pub include_hidden: bool,
    /// Descend only this many directory levels below the root.
    pub max_depth: Option<usize>,
    /// Glob patterns (matched against entry names) to prune while scanning.
    pub ignore_patterns: Vec<String>,
}
