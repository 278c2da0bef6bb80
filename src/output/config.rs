//! Output configuration types

/// Configuration for the console listing.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
    /// Show size and modification time columns.
    pub long: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_color: true,
            long: false,
        }
    }
}
