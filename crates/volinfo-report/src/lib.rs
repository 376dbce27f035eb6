//! JSON reporting for volinfo.
//!
//! Turns a [`VolumeReport`] into the document printed on standard output.
//! Which top-level keys appear is decided by a static whitelist of
//! [`ReportField`]s, each paired with an extractor function:
//!
//! - `mountPoint` and `isEmpty` always
//! - `lastAccess` and `lastModify` for non-empty volumes
//! - `lastChange` and `lastBirth` with `ALL_TIMES=true`
//! - `fileInfos` with `OUTPUT_FILE_INFOS=true`
//!
//! ```rust,ignore
//! use volinfo_report::Reporter;
//! use volinfo_scan::{VolumeConfig, VolumeScanner};
//!
//! let config = VolumeConfig::from_env();
//! let outcome = VolumeScanner::with_config(config.clone()).scan();
//!
//! let reporter = Reporter::new(config);
//! reporter.write_to(&outcome.report, std::io::stdout().lock())?;
//! ```

mod error;
mod field;
mod output;
mod reporter;

pub use error::ReportError;
pub use field::ReportField;
pub use output::{FileInfoOutput, TimeRecordOutput, format_time};
pub use reporter::Reporter;

// Re-export core types
pub use volinfo_core::{VolumeConfig, VolumeReport};
