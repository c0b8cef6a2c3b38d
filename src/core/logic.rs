use crate::config::Config;
use crate::core::calculator::aggregate::aggregate;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::store::{load_state, save_state};
use crate::errors::AppResult;
use crate::models::day_record::DayRecord;
use crate::models::day_summary::Summary;
use crate::models::state::TrackerState;
use chrono::NaiveDate;
use tracing::{info, warn};

pub struct Core;

impl Core {
    /// Opens the configured store and loads the state once.
    pub fn open(cfg: &Config) -> AppResult<(DbPool, TrackerState)> {
        let pool = DbPool::new(&cfg.database)?;
        let state = load_state(&pool, cfg.daily_target_minutes()?)?;
        Ok((pool, state))
    }

    /// Persists the whole state, then records the operation in the audit log.
    pub fn commit(
        pool: &DbPool,
        state: &TrackerState,
        operation: &str,
        target: &str,
        message: &str,
    ) -> AppResult<()> {
        save_state(pool, state)?;
        info!(operation, key = target, "state committed");

        if let Err(e) = ttlog(&pool.conn, operation, target, message) {
            warn!(error = %e, "failed to write internal log");
        }
        Ok(())
    }

    /// Records for `dates`, synthesizing empty ones where nothing is stored.
    pub fn records_for(state: &TrackerState, dates: &[NaiveDate]) -> Vec<DayRecord> {
        dates.iter().map(|d| state.record_or_empty(*d)).collect()
    }

    pub fn summarize(state: &TrackerState, records: &[DayRecord]) -> Summary {
        aggregate(records, state.daily_target_minutes)
    }
}
