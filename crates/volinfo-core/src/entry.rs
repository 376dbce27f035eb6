//! Per-entry metadata types.

use std::path::PathBuf;
use std::time::SystemTime;

use compact_str::CompactString;

/// Filesystem timestamps of a single entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryTimes {
    /// Last access time.
    pub accessed: SystemTime,
    /// Last modification time.
    pub modified: SystemTime,
    /// Last status change time.
    pub changed: SystemTime,
    /// Creation time, when the platform and filesystem report one.
    pub born: Option<SystemTime>,
}

impl EntryTimes {
    /// Create timestamps with every category set to the same instant and no birth time.
    pub fn uniform(time: SystemTime) -> Self {
        Self {
            accessed: time,
            modified: time,
            changed: time,
            born: None,
        }
    }

    /// Set the birth time.
    pub fn with_born(mut self, born: SystemTime) -> Self {
        self.born = Some(born);
        self
    }
}

/// Metadata of one walked entry, as listed in the `fileInfos` output.
#[derive(Debug, Clone)]
pub struct FileInfo {
    /// Full path of the entry.
    pub path: PathBuf,
    /// Base name of the entry.
    pub name: CompactString,
    /// Length in bytes.
    pub size: u64,
    /// Raw mode bits (type and permissions).
    pub mode: u32,
    /// Whether the entry is a directory.
    pub is_dir: bool,
    /// Entry timestamps.
    pub times: EntryTimes,
}
