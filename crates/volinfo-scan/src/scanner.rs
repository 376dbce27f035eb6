//! Single-pass volume scanner built on jwalk.

use std::fmt;
use std::fs::{self, Metadata};
use std::io;
use std::path::{Path, PathBuf};

use jwalk::{Parallelism, WalkDir};
use tracing::{debug, error, info};

use volinfo_core::{
    EntryTimes, FileInfo, ScanError, ScanWarning, VolumeConfig, VolumeReport, WarningKind,
};

use crate::empty::is_empty_dir;
use crate::times::{entry_mode, read_entry_times};

/// Everything a scan produced.
///
/// The report is always present, even when the walk aborted, so that it
/// can be emitted before the caller fails.
#[derive(Debug)]
pub struct ScanOutcome {
    /// The (possibly partial) report.
    pub report: VolumeReport,
    /// Per-entry problems that were skipped over.
    pub warnings: Vec<ScanWarning>,
    /// The error that aborted the walk, if any.
    pub fatal: Option<ScanError>,
}

impl ScanOutcome {
    /// Whether the walk ran to completion.
    pub fn is_complete(&self) -> bool {
        self.fatal.is_none()
    }

    /// Split into the report and the walk's result.
    pub fn into_parts(self) -> (VolumeReport, Result<(), ScanError>) {
        let result = match self.fatal {
            Some(err) => Err(err),
            None => Ok(()),
        };
        (self.report, result)
    }
}

/// Sequential scanner for one mount point.
pub struct VolumeScanner {
    config: VolumeConfig,
}

impl VolumeScanner {
    /// Create a scanner for the default mount point.
    pub fn new() -> Self {
        Self {
            config: VolumeConfig::default(),
        }
    }

    /// Create a scanner with a custom config.
    pub fn with_config(config: VolumeConfig) -> Self {
        Self { config }
    }

    /// Scan the configured mount point.
    pub fn scan(&self) -> ScanOutcome {
        let root = self.config.mount_point.as_path();

        let is_empty = match is_empty_dir(root) {
            Ok(is_empty) => is_empty,
            Err(err) => {
                // The walk below reports the problem properly.
                debug!(path = %root.display(), error = %err, "emptiness check failed");
                false
            }
        };

        let mut report = VolumeReport::new(root, is_empty);
        let mut warnings = Vec::new();

        if is_empty {
            info!(path = %root.display(), "volume is empty, skipping walk");
            return ScanOutcome {
                report,
                warnings,
                fatal: None,
            };
        }

        let fatal = self.walk(root, &mut report, &mut warnings).err();

        debug!(
            path = %root.display(),
            warnings = warnings.len(),
            complete = fatal.is_none(),
            "walk finished"
        );

        ScanOutcome {
            report,
            warnings,
            fatal,
        }
    }

    /// Walk every descendant of `root`, folding timestamps into `report`.
    ///
    /// A root that cannot be inspected is recorded as a warning and leaves
    /// the report untouched; only a failure of the running traversal is fatal.
    fn walk(
        &self,
        root: &Path,
        report: &mut VolumeReport,
        warnings: &mut Vec<ScanWarning>,
    ) -> Result<(), ScanError> {
        if let Err(warning) = check_root(root) {
            record_warning(warnings, warning);
            return Ok(());
        }

        let walker = WalkDir::new(root)
            .parallelism(Parallelism::Serial)
            .sort(true)
            .skip_hidden(false)
            .follow_links(false)
            .min_depth(0);

        for entry_result in walker {
            let entry = match entry_result {
                Ok(e) => e,
                Err(err) => {
                    if err.depth() == 0 {
                        return Err(ScanError::Walk {
                            path: root.to_path_buf(),
                            message: err.to_string(),
                        });
                    }
                    let path = err.path().map(|p| p.to_path_buf()).unwrap_or_default();
                    record_warning(warnings, listing_warning(path, err.io_error(), &err));
                    continue;
                }
            };

            let path = entry.path();

            // Unlistable directories, the root included, are skipped without aborting.
            if let Some(err) = &entry.read_children_error {
                record_warning(warnings, listing_warning(path.clone(), err.io_error(), err));
            }

            // The mount point itself never contributes.
            if entry.depth() == 0 {
                continue;
            }

            let (metadata, times) = match stat_entry(&path, entry.metadata()) {
                Ok(stat) => stat,
                Err(warning) => {
                    record_warning(warnings, warning);
                    continue;
                }
            };

            let file_name = entry.file_name().to_string_lossy();
            report.latest.observe(&path, &file_name, &times);

            if self.config.output_file_infos {
                report.file_infos.push(FileInfo {
                    name: file_name.as_ref().into(),
                    path,
                    size: metadata.len(),
                    mode: entry_mode(&metadata),
                    is_dir: metadata.is_dir(),
                    times,
                });
            }
        }

        Ok(())
    }
}

impl Default for VolumeScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Verify the mount point exists and is a directory.
fn check_root(root: &Path) -> Result<(), ScanWarning> {
    let metadata = fs::metadata(root).map_err(|err| ScanWarning::read_error(root, &err))?;
    if !metadata.is_dir() {
        return Err(ScanWarning::not_a_directory(root));
    }
    Ok(())
}

/// Warning for a directory that could not be listed.
fn listing_warning(
    path: PathBuf,
    io_error: Option<&io::Error>,
    message: impl fmt::Display,
) -> ScanWarning {
    match io_error {
        Some(io_err) => ScanWarning::read_error(path, io_err),
        None => ScanWarning::new(path, message.to_string(), WarningKind::ReadError),
    }
}

/// Resolve an entry's metadata into its timestamps.
fn stat_entry<E: fmt::Display>(
    path: &Path,
    metadata: Result<Metadata, E>,
) -> Result<(Metadata, EntryTimes), ScanWarning> {
    let metadata = metadata.map_err(|err| ScanWarning::metadata_error(path, err))?;
    let times = read_entry_times(&metadata).map_err(|err| ScanWarning::metadata_error(path, err))?;
    Ok((metadata, times))
}

fn record_warning(warnings: &mut Vec<ScanWarning>, warning: ScanWarning) {
    error!(path = %warning.path.display(), kind = ?warning.kind, "{}", warning.message);
    warnings.push(warning);
}
