//! Volume scanning engine for volinfo.
//!
//! This crate inspects a mount point and reduces its tree to a
//! [`VolumeReport`]: whether the volume is empty and, for each timestamp
//! category, which entry was touched most recently.
//!
//! # Overview
//!
//! - **Emptiness check** reads at most one directory entry and releases
//!   the handle immediately.
//! - **Single-pass walk** via jwalk in serial, name-sorted mode, so the
//!   traversal order (and therefore tie-breaking) is deterministic.
//! - **Two error tiers**: per-entry problems, and a mount point that is
//!   missing or not a directory, become [`ScanWarning`]s and the scan
//!   continues; a failure of the running traversal itself is returned as
//!   a [`ScanError`] alongside the partial report.
//!
//! # Example
//!
//! ```rust,no_run
//! use volinfo_scan::{VolumeConfig, VolumeScanner};
//!
//! let scanner = VolumeScanner::with_config(VolumeConfig::default());
//! let outcome = scanner.scan();
//!
//! println!("empty: {}", outcome.report.is_empty);
//! if let Some(modify) = &outcome.report.latest.modify {
//!     println!("last modified: {}", modify.path.display());
//! }
//! ```

mod empty;
mod scanner;
mod times;

pub use empty::is_empty_dir;
pub use scanner::{ScanOutcome, VolumeScanner};
pub use times::{entry_mode, read_entry_times};

// Re-export core types for convenience
pub use volinfo_core::{
    EntryTimes, FileInfo, LatestTimes, ScanError, ScanWarning, TimeRecord, VolumeConfig,
    VolumeReport, WarningKind,
};
