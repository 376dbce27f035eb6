//! Mount point emptiness check.

use std::io;
use std::path::Path;

/// Check whether a directory has no entries.
///
/// Reads at most one entry. The directory handle is dropped when this
/// function returns, whether the read succeeded or not.
pub fn is_empty_dir(path: &Path) -> io::Result<bool> {
    let mut entries = std::fs::read_dir(path)?;
    match entries.next() {
        None => Ok(true),
        Some(Ok(_)) => Ok(false),
        Some(Err(err)) => Err(err),
    }
}
