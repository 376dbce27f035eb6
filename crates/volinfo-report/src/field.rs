//! Output field whitelist.

use std::time::SystemTime;

use serde_json::Value;
use strum::{Display, EnumIter, IntoEnumIterator, IntoStaticStr};

use volinfo_core::{TimeCategory, VolumeConfig, VolumeReport};

use crate::output::{FileInfoOutput, TimeRecordOutput};

/// A top-level key of the output document, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum ReportField {
    MountPoint,
    IsEmpty,
    LastAccess,
    LastModify,
    LastChange,
    LastBirth,
    FileInfos,
}

/// Pulls one field's JSON value out of a report.
type Extractor = fn(&VolumeReport, SystemTime) -> Result<Value, serde_json::Error>;

impl ReportField {
    /// The JSON key of this field.
    pub fn key(self) -> &'static str {
        self.into()
    }

    /// Extract this field's value from a report.
    ///
    /// Time records are aged against `now`; an absent record becomes `null`.
    pub fn extract(self, report: &VolumeReport, now: SystemTime) -> Result<Value, serde_json::Error> {
        self.extractor()(report, now)
    }

    fn extractor(self) -> Extractor {
        match self {
            Self::MountPoint => mount_point,
            Self::IsEmpty => is_empty,
            Self::LastAccess => last_access,
            Self::LastModify => last_modify,
            Self::LastChange => last_change,
            Self::LastBirth => last_birth,
            Self::FileInfos => file_infos,
        }
    }

    /// Fields to emit for a report under the given configuration, in output order.
    pub fn selected(config: &VolumeConfig, report: &VolumeReport) -> Vec<ReportField> {
        Self::iter()
            .filter(|field| field.is_selected(config, report.is_empty))
            .collect()
    }

    fn is_selected(self, config: &VolumeConfig, is_empty: bool) -> bool {
        match self {
            Self::MountPoint | Self::IsEmpty => true,
            Self::LastAccess | Self::LastModify => !is_empty,
            Self::LastChange | Self::LastBirth => !is_empty && config.all_times,
            Self::FileInfos => !is_empty && config.output_file_infos,
        }
    }
}

fn mount_point(report: &VolumeReport, _now: SystemTime) -> Result<Value, serde_json::Error> {
    Ok(Value::String(report.mount_point.to_string_lossy().into_owned()))
}

fn is_empty(report: &VolumeReport, _now: SystemTime) -> Result<Value, serde_json::Error> {
    Ok(Value::Bool(report.is_empty))
}

fn time_record(
    report: &VolumeReport,
    category: TimeCategory,
    now: SystemTime,
) -> Result<Value, serde_json::Error> {
    let output = report
        .latest
        .get(category)
        .map(|record| TimeRecordOutput::new(record, now));
    serde_json::to_value(output)
}

fn last_access(report: &VolumeReport, now: SystemTime) -> Result<Value, serde_json::Error> {
    time_record(report, TimeCategory::Access, now)
}

fn last_modify(report: &VolumeReport, now: SystemTime) -> Result<Value, serde_json::Error> {
    time_record(report, TimeCategory::Modify, now)
}

fn last_change(report: &VolumeReport, now: SystemTime) -> Result<Value, serde_json::Error> {
    time_record(report, TimeCategory::Change, now)
}

fn last_birth(report: &VolumeReport, now: SystemTime) -> Result<Value, serde_json::Error> {
    time_record(report, TimeCategory::Birth, now)
}

fn file_infos(report: &VolumeReport, _now: SystemTime) -> Result<Value, serde_json::Error> {
    let infos: Vec<FileInfoOutput> = report.file_infos.iter().map(FileInfoOutput::from).collect();
    serde_json::to_value(infos)
}
