use super::day_record::DayRecord;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_DAILY_TARGET_MINUTES: i64 = 8 * 60;

/// Everything the tracker persists: one record per date plus the daily target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerState {
    pub records: BTreeMap<NaiveDate, DayRecord>,
    pub daily_target_minutes: i64,
}

impl Default for TrackerState {
    fn default() -> Self {
        Self::with_target(DEFAULT_DAILY_TARGET_MINUTES)
    }
}

/// On-disk / export shape:
/// `{ "entries": [DayRecord], "dailyTargetMinutes": n }`.
#[derive(Debug, Serialize, Deserialize)]
pub struct StateDocument {
    pub entries: Vec<DayRecord>,
    #[serde(rename = "dailyTargetMinutes")]
    pub daily_target_minutes: i64,
}

impl TrackerState {
    pub fn with_target(daily_target_minutes: i64) -> Self {
        Self {
            records: BTreeMap::new(),
            daily_target_minutes,
        }
    }

    /// Builds a state from a list of records; a later duplicate date wins.
    pub fn from_records(records: Vec<DayRecord>, daily_target_minutes: i64) -> Self {
        Self {
            records: records.into_iter().map(|r| (r.date, r)).collect(),
            daily_target_minutes,
        }
    }

    pub fn record(&self, date: NaiveDate) -> Option<&DayRecord> {
        self.records.get(&date)
    }

    /// Stored record, or a display-only empty one. Never inserts.
    pub fn record_or_empty(&self, date: NaiveDate) -> DayRecord {
        self.records
            .get(&date)
            .cloned()
            .unwrap_or_else(|| DayRecord::empty(date))
    }

    /// Record for `date`, created on first mutation.
    pub fn record_mut(&mut self, date: NaiveDate) -> &mut DayRecord {
        self.records
            .entry(date)
            .or_insert_with(|| DayRecord::empty(date))
    }

    /// Stored records with `start <= date <= end`, in date order.
    pub fn records_between(&self, start: NaiveDate, end: NaiveDate) -> Vec<DayRecord> {
        self.records.range(start..=end).map(|(_, r)| r.clone()).collect()
    }

    pub fn all_records(&self) -> Vec<DayRecord> {
        self.records.values().cloned().collect()
    }

    pub fn to_document(&self) -> StateDocument {
        StateDocument {
            entries: self.all_records(),
            daily_target_minutes: self.daily_target_minutes,
        }
    }
}
