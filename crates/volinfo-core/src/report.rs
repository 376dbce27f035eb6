//! Volume report container.

use std::path::PathBuf;

use crate::entry::FileInfo;
use crate::record::LatestTimes;

/// Result of scanning one mount point.
#[derive(Debug, Clone)]
pub struct VolumeReport {
    /// The inspected directory.
    pub mount_point: PathBuf,
    /// Whether the directory had no entries at all.
    pub is_empty: bool,
    /// Most recent entry per timestamp category.
    pub latest: LatestTimes,
    /// Every walked entry in traversal order, when collection was requested.
    pub file_infos: Vec<FileInfo>,
}

impl VolumeReport {
    /// Create a report with no observations yet.
    pub fn new(mount_point: impl Into<PathBuf>, is_empty: bool) -> Self {
        Self {
            mount_point: mount_point.into(),
            is_empty,
            latest: LatestTimes::new(),
            file_infos: Vec::new(),
        }
    }

    /// Create the report of an empty volume.
    pub fn empty(mount_point: impl Into<PathBuf>) -> Self {
        Self::new(mount_point, true)
    }
}
