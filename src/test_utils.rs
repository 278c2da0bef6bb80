//! Test utilities for building fixture sites on disk.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary content directory for testing.
///
/// Provides methods for laying out pages (directories) and assets (files).
/// The directory is automatically cleaned up when dropped.
pub struct TestSite {
    dir: TempDir,
}

impl TestSite {
    /// Create a new empty temporary content directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file with the given content, creating parent directories
    /// (pages) as needed.
    pub fn add_file(&self, path: &str, content: &[u8]) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add a one-byte image placeholder at `path`.
    pub fn add_image(&self, path: &str) -> PathBuf {
        self.add_file(path, b"\x89")
    }

    /// Add an empty page (directory) at `path`.
    pub fn add_page(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create page dir");
        full_path
    }
}

impl Default for TestSite {
    fn default() -> Self {
        Self::new()
    }
}
