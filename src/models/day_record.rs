use super::period::TimePeriod;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// All periods logged for one calendar date, plus an optional note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    pub date: NaiveDate, // "YYYY-MM-DD"
    #[serde(default)]
    pub periods: Vec<TimePeriod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl DayRecord {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            periods: Vec::new(),
            note: None,
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// 1-based lookup, matching the numbering shown by `list`.
    pub fn period_mut(&mut self, index: usize) -> Option<&mut TimePeriod> {
        index.checked_sub(1).and_then(|i| self.periods.get_mut(i))
    }
}
