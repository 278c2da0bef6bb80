//! Filesystem host for the collector
//!
//! Builds an in-memory [`Page`](crate::model::Page) tree from a directory:
//! directories become pages and regular files become attached assets, with
//! kind classified from the extension and modification time and size taken
//! from file metadata. The collector itself never touches the filesystem;
//! this module is the bundled implementation of the tree boundary used by
//! the CLI, tests, and benchmarks.

mod config;
mod scanner;

// Re-export public types
pub use config::ScanConfig;
pub use scanner::Scanner;
