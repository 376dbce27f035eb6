//! Serializable views of core types, as they appear in the output.

use std::time::SystemTime;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use volinfo_core::{FileInfo, TimeRecord};

/// Format a timestamp as RFC 3339 in UTC.
///
/// Fractional seconds are printed only as far as they are non-zero.
pub fn format_time(time: SystemTime) -> String {
    DateTime::<Utc>::from(time).to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// A [`TimeRecord`] with its age resolved against a fixed `now`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeRecordOutput {
    pub path: String,
    pub file_name: String,
    pub time: String,
    pub seconds_since: i64,
}

impl TimeRecordOutput {
    pub fn new(record: &TimeRecord, now: SystemTime) -> Self {
        Self {
            path: record.path.to_string_lossy().into_owned(),
            file_name: record.file_name.to_string(),
            time: format_time(record.time),
            seconds_since: record.seconds_since(now),
        }
    }
}

/// One entry of the `fileInfos` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileInfoOutput {
    pub path: String,
    pub name: String,
    pub size: u64,
    pub mode: u32,
    pub is_dir: bool,
    pub access_time: String,
    pub modify_time: String,
    pub change_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_time: Option<String>,
}

impl From<&FileInfo> for FileInfoOutput {
    fn from(info: &FileInfo) -> Self {
        Self {
            path: info.path.to_string_lossy().into_owned(),
            name: info.name.to_string(),
            size: info.size,
            mode: info.mode,
            is_dir: info.is_dir,
            access_time: format_time(info.times.accessed),
            modify_time: format_time(info.times.modified),
            change_time: format_time(info.times.changed),
            birth_time: info.times.born.map(format_time),
        }
    }
}
