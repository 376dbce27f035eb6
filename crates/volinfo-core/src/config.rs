//! Run configuration.

use std::path::PathBuf;

use derive_builder::Builder;

/// Well-known path the volume is expected to be mounted at.
pub const MOUNT_POINT: &str = "/volume";

const OUTPUT_FILE_INFOS: &str = "OUTPUT_FILE_INFOS";
const ALL_TIMES: &str = "ALL_TIMES";

/// Configuration for one scan-and-report run.
///
/// Built once at startup and handed to the scanner and the reporter.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct VolumeConfig {
    /// Directory to inspect.
    #[builder(default = "PathBuf::from(MOUNT_POINT)")]
    pub mount_point: PathBuf,

    /// Include the per-entry metadata list (`fileInfos`) in the output.
    #[builder(default = "false")]
    pub output_file_infos: bool,

    /// Include `lastChange` and `lastBirth` in the output.
    #[builder(default = "false")]
    pub all_times: bool,
}

impl VolumeConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(ref mount_point) = self.mount_point {
            if mount_point.as_os_str().is_empty() {
                return Err("Mount point cannot be empty".to_string());
            }
        }
        Ok(())
    }
}

impl VolumeConfig {
    /// Create a new config builder.
    pub fn builder() -> VolumeConfigBuilder {
        VolumeConfigBuilder::default()
    }

    /// Create a config for the given mount point with every flag off.
    pub fn new(mount_point: impl Into<PathBuf>) -> Self {
        Self {
            mount_point: mount_point.into(),
            output_file_infos: false,
            all_times: false,
        }
    }

    /// Read the flags from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the flags through an arbitrary key lookup.
    ///
    /// A flag is on only when its value is exactly `true`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let flag = |key: &str| lookup(key).is_some_and(|value| value == "true");
        Self {
            mount_point: PathBuf::from(MOUNT_POINT),
            output_file_infos: flag(OUTPUT_FILE_INFOS),
            all_times: flag(ALL_TIMES),
        }
    }
}

impl Default for VolumeConfig {
    fn default() -> Self {
        Self::new(MOUNT_POINT)
    }
}
