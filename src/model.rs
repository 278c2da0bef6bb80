//! Page tree and asset types
//!
//! The collector only needs two lookups from a host tree: the children of a
//! node and the assets attached to it. `PageNode` captures that boundary;
//! `Page` is the bundled in-memory implementation produced by the filesystem
//! scanner and by test fixtures.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Kind of an attached asset, classified from its file extension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    #[default]
    Image,
    Document,
    Video,
    Audio,
    Other,
}

impl AssetKind {
    /// Classify a file extension (without the dot, any case).
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "png" | "jpg" | "jpeg" | "gif" | "webp" | "svg" | "avif" | "bmp" | "ico" | "tiff" => {
                AssetKind::Image
            }
            "pdf" | "doc" | "docx" | "txt" | "md" | "rtf" | "odt" | "csv" | "xls" | "xlsx" => {
                AssetKind::Document
            }
            "mp4" | "mov" | "webm" | "avi" | "mkv" | "ogv" => AssetKind::Video,
            "mp3" | "wav" | "flac" | "ogg" | "aac" | "m4a" => AssetKind::Audio,
            _ => AssetKind::Other,
        }
    }

    /// Singular label for display ("image", "document", ...).
    pub fn label(&self) -> &'static str {
        match self {
            AssetKind::Image => "image",
            AssetKind::Document => "document",
            AssetKind::Video => "video",
            AssetKind::Audio => "audio",
            AssetKind::Other => "file",
        }
    }
}

/// A leaf asset attached to a page.
///
/// `name` is the identifying key for deduplication: the filename without its
/// extension, so `logo.png` and `logo.jpg` share the name `logo`. The
/// remaining attributes exist for sorting and display and are optional so
/// in-memory hosts need not fabricate them.
#[derive(Debug, Clone, Serialize)]
pub struct Asset {
    pub name: String,
    pub filename: String,
    pub kind: AssetKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<u64>,
}

impl Asset {
    /// Create an asset from its filename, deriving the identifying name
    /// from the filename stem.
    pub fn new(filename: impl Into<String>, kind: AssetKind) -> Self {
        let filename = filename.into();
        let name = Path::new(&filename)
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| filename.clone());
        Self {
            name,
            filename,
            kind,
            path: None,
            modified: None,
            size_bytes: None,
        }
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_modified(mut self, modified: DateTime<Utc>) -> Self {
        self.modified = Some(modified);
        self
    }

    pub fn with_size(mut self, size_bytes: u64) -> Self {
        self.size_bytes = Some(size_bytes);
        self
    }
}

/// The two lookups the collector needs from a host page tree.
///
/// `children` must return direct children in the host's defined order;
/// `assets` must return attached assets in attachment order. Kind filtering
/// happens in the collector, not in the host.
pub trait PageNode: Sized {
    fn children(&self) -> &[Self];
    fn assets(&self) -> &[Asset];
}

/// In-memory page tree, the bundled `PageNode` implementation.
#[derive(Debug, Clone)]
pub struct Page {
    pub name: String,
    pub path: Option<PathBuf>,
    children: Vec<Page>,
    assets: Vec<Asset>,
}

impl Page {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: None,
            children: Vec::new(),
            assets: Vec::new(),
        }
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Append a child page, preserving insertion order.
    pub fn push_child(&mut self, child: Page) {
        self.children.push(child);
    }

    /// Append an attached asset, preserving attachment order.
    pub fn push_asset(&mut self, asset: Asset) {
        self.assets.push(asset);
    }

    /// Builder form of [`push_child`](Self::push_child).
    pub fn with_child(mut self, child: Page) -> Self {
        self.children.push(child);
        self
    }

    /// Builder form of [`push_asset`](Self::push_asset).
    pub fn with_asset(mut self, asset: Asset) -> Self {
        self.assets.push(asset);
        self
    }
}

impl PageNode for Page {
    fn children(&self) -> &[Self] {
        &self.children
    }

    fn assets(&self) -> &[Asset] {
        &self.assets
    }
}
