//! Directory scanner that builds a page tree

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use glob::Pattern;

use crate::model::{Asset, AssetKind, Page};

use super::config::ScanConfig;

/// Scanner that turns a directory into a [`Page`] tree.
pub struct Scanner {
    config: ScanConfig,
}

impl Scanner {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Scan `root` into a page tree. Returns `None` if `root` is not an
    /// accessible directory.
    pub fn scan(&self, root: &Path) -> Option<Page> {
        self.scan_dir(root, 0)
    }

    fn scan_dir(&self, path: &Path, depth: usize) -> Option<Page> {
        // Skip symlinks to prevent infinite loops
        if path.is_symlink() {
            return None;
        }
        if !path.is_dir() {
            return None;
        }

        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| ".".to_string());
        let mut page = Page::new(name).with_path(path);

        // At max depth the page itself is kept but nothing beneath it
        if self.config.max_depth.is_some_and(|max| depth >= max) {
            return Some(page);
        }

        let entries = match fs::read_dir(path) {
            Ok(e) => e,
            Err(_) => return Some(page),
        };

        let mut entries: Vec<_> = entries.filter_map(|e| e.ok()).collect();
        entries.sort_by_key(|a| a.file_name());

        for entry in entries {
            let entry_path = entry.path();
            let entry_name = entry.file_name().to_string_lossy().to_string();

            if self.should_ignore(&entry_name) {
                continue;
            }

            if entry_path.is_file() && !entry_path.is_symlink() {
                page.push_asset(asset_from_file(&entry_path, &entry_name));
            } else if let Some(child) = self.scan_dir(&entry_path, depth + 1) {
                page.push_child(child);
            }
        }

        Some(page)
    }

    fn should_ignore(&self, name: &str) -> bool {
        if !self.config.include_hidden && name.starts_with('.') {
            return true;
        }
        self.config
            .ignore_patterns
            .iter()
            .any(|pattern| name == pattern || glob_match(pattern, name))
    }
}

/// Match a glob pattern against an entry name.
fn glob_match(pattern: &str, name: &str) -> bool {
    Pattern::new(pattern)
        .map(|p| p.matches(name))
        .unwrap_or(false)
}

/// Build an asset from a file entry, classifying the kind from the extension
/// and pulling modification time and size from metadata where available.
fn asset_from_file(path: &Path, filename: &str) -> Asset {
    let kind = path
        .extension()
        .map(|ext| AssetKind::from_extension(&ext.to_string_lossy()))
        .unwrap_or(AssetKind::Other);

    let mut asset = Asset::new(filename, kind).with_path(path);
    if let Ok(meta) = path.metadata() {
        asset = asset.with_size(meta.len());
        if let Ok(mtime) = meta.modified() {
            asset = asset.with_modified(DateTime::<Utc>::from(mtime));
        }
    }
    asset
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PageNode;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, path: &str) {
        let full = dir.path().join(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full, b"x").expect("Failed to write file");
    }

    #[test]
    fn test_glob_match() {
        assert!(glob_match("*.png", "logo.png"));
        assert!(!glob_match("*.png", "logo.jpg"));
        assert!(glob_match("draft*", "draft-hero"));
        assert!(glob_match("exact", "exact"));
        assert!(!glob_match("[", "anything"));
    }

    #[test]
    fn test_scan_builds_pages_and_assets() {
        let dir = TempDir::new().unwrap();
        write(&dir, "logo.png");
        write(&dir, "about/team.jpg");
        write(&dir, "about/history/old.png");

        let page = Scanner::new(ScanConfig::default()).scan(dir.path()).unwrap();
        assert_eq!(page.assets().len(), 1);
        assert_eq!(page.assets()[0].name, "logo");
        assert_eq!(page.assets()[0].kind, AssetKind::Image);

        assert_eq!(page.children().len(), 1);
        let about = &page.children()[0];
        assert_eq!(about.name, "about");
        assert_eq!(about.assets()[0].filename, "team.jpg");
        assert_eq!(about.children()[0].name, "history");
    }

    #[test]
    fn test_scan_orders_entries_by_filename() {
        let dir = TempDir::new().unwrap();
        write(&dir, "zebra.png");
        write(&dir, "apple.png");
        write(&dir, "mango.png");

        let page = Scanner::new(ScanConfig::default()).scan(dir.path()).unwrap();
        let names: Vec<_> = page.assets().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["apple", "mango", "zebra"]);
    }

    #[test]
    fn test_scan_classifies_kinds() {
        let dir = TempDir::new().unwrap();
        write(&dir, "photo.JPG");
        write(&dir, "manual.pdf");
        write(&dir, "Makefile");

        let page = Scanner::new(ScanConfig::default()).scan(dir.path()).unwrap();
        let kinds: Vec<_> = page.assets().iter().map(|a| a.kind).collect();
        assert_eq!(
            kinds,
            [AssetKind::Other, AssetKind::Document, AssetKind::Image]
        );
    }

    #[test]
    fn test_scan_skips_hidden_by_default() {
        let dir = TempDir::new().unwrap();
        write(&dir, "visible.png");
        write(&dir, ".hidden.png");
        write(&dir, ".cache/stale.png");

        let page = Scanner::new(ScanConfig::default()).scan(dir.path()).unwrap();
        assert_eq!(page.assets().len(), 1);
        assert!(page.children().is_empty());

        let all = Scanner::new(ScanConfig {
            include_hidden: true,
            ..ScanConfig::default()
        })
        .scan(dir.path())
        .unwrap();
        assert_eq!(all.assets().len(), 2);
        assert_eq!(all.children().len(), 1);
    }

    #[test]
    fn test_scan_ignore_patterns() {
        let dir = TempDir::new().unwrap();
        write(&dir, "keep.png");
        write(&dir, "draft-hero.png");

        let config = ScanConfig {
            ignore_patterns: vec!["draft*".to_string()],
            ..ScanConfig::default()
        };
        let page = Scanner::new(config).scan(dir.path()).unwrap();
        assert_eq!(page.assets().len(), 1);
        assert_eq!(page.assets()[0].name, "keep");
    }

    #[test]
    fn test_scan_max_depth() {
        let dir = TempDir::new().unwrap();
        write(&dir, "a/shallow.png");
        write(&dir, "a/b/deep.png");

        let config = ScanConfig {
            max_depth: Some(1),
            ..ScanConfig::default()
        };
        let page = Scanner::new(config).scan(dir.path()).unwrap();
        let a = &page.children()[0];
        assert!(a.assets().is_empty(), "depth-limited page keeps no assets");
        assert!(a.children().is_empty());
    }

    #[test]
    fn test_scan_missing_root() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        assert!(Scanner::new(ScanConfig::default()).scan(&missing).is_none());
    }

    #[test]
    fn test_asset_metadata_populated() {
        let dir = TempDir::new().unwrap();
        write(&dir, "logo.png");

        let page = Scanner::new(ScanConfig::default()).scan(dir.path()).unwrap();
        let asset = &page.assets()[0];
        assert_eq!(asset.size_bytes, Some(1));
        assert!(asset.modified.is_some());
        assert!(asset.path.as_ref().unwrap().ends_with("logo.png"));
    }
}
