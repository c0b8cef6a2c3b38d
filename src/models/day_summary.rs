use serde::Serialize;

/// Totals over a set of days: worked vs. expected minutes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: i64,
    pub target: i64,
    pub delta: i64,
    pub worked_days: i64,
}
