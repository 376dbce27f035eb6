//! Platform timestamp retrieval.

use std::fs::Metadata;
use std::io;
use std::time::SystemTime;

#[cfg(unix)]
use std::os::unix::fs::MetadataExt;

use volinfo_core::EntryTimes;

/// Read the four timestamp categories from an entry's metadata.
///
/// Birth time is `None` when the platform or filesystem cannot supply it.
pub fn read_entry_times(metadata: &Metadata) -> io::Result<EntryTimes> {
    let modified = metadata.modified()?;
    Ok(EntryTimes {
        accessed: metadata.accessed()?,
        modified,
        changed: get_ctime(metadata, modified),
        born: metadata.created().ok(),
    })
}

/// Raw mode bits of an entry.
#[cfg(unix)]
pub fn entry_mode(metadata: &Metadata) -> u32 {
    metadata.mode()
}

#[cfg(not(unix))]
pub fn entry_mode(metadata: &Metadata) -> u32 {
    let perm = if metadata.permissions().readonly() { 0o444 } else { 0o666 };
    if metadata.is_dir() { 0o040000 | perm | 0o111 } else { 0o100000 | perm }
}

/// Get the inode change time from metadata.
#[cfg(unix)]
fn get_ctime(metadata: &Metadata, _modified: SystemTime) -> SystemTime {
    use std::time::{Duration, UNIX_EPOCH};

    let secs = metadata.ctime();
    let nanos = Duration::from_nanos(metadata.ctime_nsec().clamp(0, 999_999_999) as u64);
    if secs >= 0 {
        UNIX_EPOCH + Duration::from_secs(secs as u64) + nanos
    } else {
        UNIX_EPOCH - Duration::from_secs(secs.unsigned_abs()) + nanos
    }
}

// No inode change time outside Unix; modification time is the nearest.
#[cfg(not(unix))]
fn get_ctime(_metadata: &Metadata, modified: SystemTime) -> SystemTime {
    modified
}
