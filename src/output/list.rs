//! Console listing of a collection

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::collect::Collection;
use crate::model::AssetKind;

use super::config::OutputConfig;

/// Console formatter that lists a collection one asset per line, followed by
/// a count summary.
pub struct ListFormatter {
    config: OutputConfig,
    stdout: StandardStream,
}

impl ListFormatter {
    pub fn new(config: OutputConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            config,
            stdout: StandardStream::stdout(choice),
        }
    }

    /// Print the collection. `kind` selects the label of the summary line
    /// ("3 images", "1 document").
    pub fn print(&mut self, collection: &Collection<'_>, kind: AssetKind) -> io::Result<()> {
        let filename_width = collection
            .iter()
            .map(|a| a.filename.chars().count())
            .max()
            .unwrap_or(0);

        for asset in collection.iter() {
            write!(self.stdout, "{}", asset.filename)?;

            if self.config.long {
                // Dim gray detail columns, aligned past the widest filename
                let pad = filename_width.saturating_sub(asset.filename.chars().count());
                self.stdout
                    .set_color(ColorSpec::new().set_fg(Some(Color::Black)).set_intense(true))?;
                write!(self.stdout, "{}  ", " ".repeat(pad))?;

                let size = asset
                    .size_bytes
                    .map(format_size)
                    .unwrap_or_else(|| "-".to_string());
                write!(self.stdout, "{:>8}  ", size)?;

                match asset.modified {
                    Some(t) => write!(self.stdout, "{}", t.format("%Y-%m-%d %H:%M"))?,
                    None => write!(self.stdout, "-")?,
                }
                self.stdout.reset()?;
            }
            writeln!(self.stdout)?;
        }

        let label = kind.label();
        let count = collection.len();
        writeln!(
            self.stdout,
            "\n{} {}",
            count,
            if count == 1 {
                label.to_string()
            } else {
                format!("{}s", label)
            }
        )?;
        Ok(())
    }
}

/// Format a byte count for the size column.
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
