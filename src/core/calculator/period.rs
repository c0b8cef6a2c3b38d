//! Worked minutes per period and per day.

use crate::models::day_record::DayRecord;
use crate::models::period::TimePeriod;
use crate::utils::time::{MINUTES_PER_DAY, parse_minutes};

/// Minutes covered by one period. Open or start-less periods count 0;
/// an end before the start wraps over midnight.
pub fn period_minutes(period: &TimePeriod) -> i64 {
    let (Some(start), Some(end)) = (period.start(), period.end()) else {
        return 0;
    };

    let diff = parse_minutes(end) - parse_minutes(start);
    if diff < 0 { diff + MINUTES_PER_DAY } else { diff }
}

/// Sum over all periods. Overlaps are not merged.
pub fn day_total(record: &DayRecord) -> i64 {
    record.periods.iter().map(period_minutes).sum()
}

/// True when the last period was clocked in but not yet out.
pub fn has_open_period(record: &DayRecord) -> bool {
    record.periods.last().is_some_and(TimePeriod::is_open)
}
