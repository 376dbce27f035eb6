//! Report rendering and emission.

use std::io::Write;
use std::time::SystemTime;

use serde_json::{Map, Value};
use tracing::debug;

use volinfo_core::{VolumeConfig, VolumeReport};

use crate::error::ReportError;
use crate::field::ReportField;

/// Renders volume reports as pretty-printed JSON.
pub struct Reporter {
    config: VolumeConfig,
}

impl Reporter {
    /// Create a reporter with the given configuration.
    pub fn new(config: VolumeConfig) -> Self {
        Self { config }
    }

    /// Fields this reporter emits for `report`.
    pub fn selected_fields(&self, report: &VolumeReport) -> Vec<ReportField> {
        ReportField::selected(&self.config, report)
    }

    /// Build the output object, aging time records against `now`.
    pub fn to_value(&self, report: &VolumeReport, now: SystemTime) -> Result<Value, ReportError> {
        let mut object = Map::new();
        for field in self.selected_fields(report) {
            object.insert(field.key().to_string(), field.extract(report, now)?);
        }
        Ok(Value::Object(object))
    }

    /// Render the report as text: two-space indentation and a trailing newline.
    pub fn render(&self, report: &VolumeReport, now: SystemTime) -> Result<String, ReportError> {
        let value = self.to_value(report, now)?;
        let mut text = serde_json::to_string_pretty(&value)?;
        text.push('\n');
        Ok(text)
    }

    /// Render the report against the current time and write it once to `writer`.
    pub fn write_to<W: Write>(&self, report: &VolumeReport, mut writer: W) -> Result<(), ReportError> {
        let text = self.render(report, SystemTime::now())?;
        writer.write_all(text.as_bytes())?;
        writer.flush()?;
        debug!(bytes = text.len(), "report written");
        Ok(())
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(VolumeConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use std::time::{Duration, UNIX_EPOCH};
    use volinfo_core::EntryTimes;

    fn at(secs: u64) -> SystemTime {
        UNIX_EPOCH + Duration::from_secs(secs)
    }

    #[test]
    fn test_empty_volume_output() {
        let reporter = Reporter::default();
        let text = reporter
            .render(&VolumeReport::empty("/volume"), SystemTime::now())
            .unwrap();

        assert_eq!(text, "{\n  \"mountPoint\": \"/volume\",\n  \"isEmpty\": true\n}\n");
    }

    #[test]
    fn test_record_shape() {
        let mut report = VolumeReport::new("/volume", false);
        report.latest.observe(
            Path::new("/volume/b/c.txt"),
            "c.txt",
            &EntryTimes::uniform(at(1_700_000_000)),
        );

        let value = Reporter::default().to_value(&report, at(1_700_000_042)).unwrap();
        let modify = &value["lastModify"];
        assert_eq!(modify["path"], "/volume/b/c.txt");
        assert_eq!(modify["fileName"], "c.txt");
        assert_eq!(modify["time"], "2023-11-14T22:13:20Z");
        assert_eq!(modify["secondsSince"], 42);
        assert!(value.get("lastChange").is_none());
        assert!(value.get("lastBirth").is_none());
        assert!(value.get("fileInfos").is_none());
    }

    #[test]
    fn test_write_to_emits_once() {
        let mut buffer = Vec::new();
        Reporter::default()
            .write_to(&VolumeReport::empty("/volume"), &mut buffer)
            .unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.ends_with("}\n"));
        assert_eq!(text.matches("mountPoint").count(), 1);
    }
}
