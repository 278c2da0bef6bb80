//! Output formatting for collections
//!
//! Two formats: a console listing with optional colors and detail columns,
//! and pretty-printed JSON for programmatic consumers.

mod config;
mod json;
mod list;

// Re-export public types
pub use config::OutputConfig;
pub use json::print_json;
pub use list::{ListFormatter, format_size};
