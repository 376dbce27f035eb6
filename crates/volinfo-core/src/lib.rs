//! Core types for volinfo.
//!
//! This crate provides the data structures shared by the scanner and the
//! reporter: per-entry timestamps, the running "latest" time records,
//! the volume report itself, and the run configuration.

mod config;
mod entry;
mod error;
mod record;
mod report;

pub use config::{MOUNT_POINT, VolumeConfig, VolumeConfigBuilder};
pub use entry::{EntryTimes, FileInfo};
pub use error::{ScanError, ScanWarning, WarningKind};
pub use record::{LatestTimes, TimeCategory, TimeRecord};
pub use report::VolumeReport;
