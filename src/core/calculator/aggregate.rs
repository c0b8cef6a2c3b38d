//! Totals and balance against the daily target.

use crate::core::calculator::period::day_total;
use crate::models::day_record::DayRecord;
use crate::models::day_summary::Summary;
use crate::utils::date::month_key;
use std::collections::BTreeMap;

/// Only days with at least one logged minute add to the expected target,
/// so days off without entries do not count against the balance.
pub fn aggregate(records: &[DayRecord], daily_target_minutes: i64) -> Summary {
    let mut total: i64 = 0;
    let mut worked_days: i64 = 0;

    for r in records {
        let t = day_total(r);
        total = total.saturating_add(t);
        if t > 0 {
            worked_days += 1;
        }
    }

    let target = worked_days.saturating_mul(daily_target_minutes);

    Summary {
        total,
        target,
        delta: total.saturating_sub(target),
        worked_days,
    }
}

/// One summary per `YYYY-MM` bucket, ordered by month.
pub fn aggregate_by_month(
    records: &[DayRecord],
    daily_target_minutes: i64,
) -> Vec<(String, Summary)> {
    let mut buckets: BTreeMap<String, Vec<DayRecord>> = BTreeMap::new();
    for r in records {
        buckets.entry(month_key(r.date)).or_default().push(r.clone());
    }

    buckets
        .into_iter()
        .map(|(k, days)| (k, aggregate(&days, daily_target_minutes)))
        .collect()
}
