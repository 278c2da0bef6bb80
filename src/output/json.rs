//! JSON output formatting

use std::io;

use crate::collect::Collection;

/// Print a collection as pretty-printed JSON to stdout.
pub fn print_json(collection: &Collection<'_>) -> io::Result<()> {
    let json = serde_json::to_string_pretty(collection)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    println!("{}", json);
    Ok(())
}
