//! Running "latest" time records.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, Utc};
use compact_str::CompactString;

use crate::entry::EntryTimes;

/// One of the four filesystem timestamp categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeCategory {
    Access,
    Modify,
    Change,
    Birth,
}

impl TimeCategory {
    /// All categories in report order.
    pub const ALL: [TimeCategory; 4] = [Self::Access, Self::Modify, Self::Change, Self::Birth];

    /// Pick this category's timestamp out of an entry's times.
    pub fn select(self, times: &EntryTimes) -> Option<SystemTime> {
        match self {
            Self::Access => Some(times.accessed),
            Self::Modify => Some(times.modified),
            Self::Change => Some(times.changed),
            Self::Birth => times.born,
        }
    }
}

/// The entry holding the most recent value for one timestamp category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeRecord {
    /// Full path of the entry.
    pub path: PathBuf,
    /// Base name of the entry.
    pub file_name: CompactString,
    /// The timestamp.
    pub time: SystemTime,
}

impl TimeRecord {
    /// Create a new time record.
    pub fn new(path: impl Into<PathBuf>, file_name: impl Into<CompactString>, time: SystemTime) -> Self {
        Self {
            path: path.into(),
            file_name: file_name.into(),
            time,
        }
    }

    /// Whole seconds elapsed between the record's time and `now`.
    ///
    /// Truncated toward zero; negative when the record lies in the future.
    pub fn seconds_since(&self, now: SystemTime) -> i64 {
        let now: DateTime<Utc> = now.into();
        let time: DateTime<Utc> = self.time.into();
        now.signed_duration_since(time).num_seconds()
    }
}

/// Running maxima for the four timestamp categories.
///
/// `None` is the zero value: nothing has been observed for that category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LatestTimes {
    pub access: Option<TimeRecord>,
    pub modify: Option<TimeRecord>,
    pub change: Option<TimeRecord>,
    pub birth: Option<TimeRecord>,
}

impl LatestTimes {
    /// Create an empty set of records.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the record for a category.
    pub fn get(&self, category: TimeCategory) -> Option<&TimeRecord> {
        match category {
            TimeCategory::Access => self.access.as_ref(),
            TimeCategory::Modify => self.modify.as_ref(),
            TimeCategory::Change => self.change.as_ref(),
            TimeCategory::Birth => self.birth.as_ref(),
        }
    }

    fn slot_mut(&mut self, category: TimeCategory) -> &mut Option<TimeRecord> {
        match category {
            TimeCategory::Access => &mut self.access,
            TimeCategory::Modify => &mut self.modify,
            TimeCategory::Change => &mut self.change,
            TimeCategory::Birth => &mut self.birth,
        }
    }

    /// Whether no category holds a record.
    pub fn is_zero(&self) -> bool {
        TimeCategory::ALL.iter().all(|c| self.get(*c).is_none())
    }

    /// Fold one entry's timestamps into the running maxima.
    ///
    /// A category is replaced only when the entry is strictly later, so
    /// among equal timestamps the first entry observed keeps the record.
    pub fn observe(&mut self, path: &Path, file_name: &str, times: &EntryTimes) {
        for category in TimeCategory::ALL {
            let Some(time) = category.select(times) else {
                continue;
            };
            let slot = self.slot_mut(category);
            if slot.as_ref().is_none_or(|current| time > current.time) {
                *slot = Some(TimeRecord::new(path, file_name, time));
            }
        }
    }
}
