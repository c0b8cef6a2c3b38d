// src/export/model.rs

use crate::core::calculator::period::period_minutes;
use crate::models::day_record::DayRecord;
use crate::utils::time::format_minutes;

/// Header of the tabular export.
pub const CSV_HEADERS: [&str; 5] = ["Datum", "Start", "Ende", "Dauer [min]", "Dauer [hh:mm]"];

/// Flat row: one per period, or one placeholder for an empty day.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PeriodExport {
    pub date: String,
    pub start: String,
    pub end: String,
    pub minutes: i64,
    pub duration: String,
}

impl PeriodExport {
    pub fn to_row(&self) -> [String; 5] {
        [
            self.date.clone(),
            self.start.clone(),
            self.end.clone(),
            self.minutes.to_string(),
            self.duration.clone(),
        ]
    }
}

/// Flattens records (already in date order) into export rows.
pub fn records_to_rows(records: &[DayRecord]) -> Vec<PeriodExport> {
    let mut rows = Vec::new();

    for r in records {
        let date = r.date_str();

        if r.periods.is_empty() {
            rows.push(PeriodExport {
                date,
                start: String::new(),
                end: String::new(),
                minutes: 0,
                duration: format_minutes(0),
            });
            continue;
        }

        for p in &r.periods {
            let minutes = period_minutes(p);
            rows.push(PeriodExport {
                date: date.clone(),
                start: p.start().unwrap_or_default().to_string(),
                end: p.end().unwrap_or_default().to_string(),
                minutes,
                duration: format_minutes(minutes),
            });
        }
    }

    rows
}
