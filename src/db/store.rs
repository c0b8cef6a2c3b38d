//! Load/save boundary for the tracker state.
//!
//! The whole state is one JSON document stored under a single key of the
//! `kv` table; every save rewrites it (last write wins).

use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::import::parse_document;
use crate::models::state::TrackerState;
use crate::ui::messages::warning;
use rusqlite::{OptionalExtension, params};
use tracing::{debug, warn};

pub const STATE_KEY: &str = "worklog.state";
/// Unreadable documents are copied here before anything can overwrite them.
pub const CORRUPT_STATE_KEY: &str = "worklog.state.corrupt";

/// Raw stored document, if any.
pub fn load_raw(pool: &DbPool) -> AppResult<Option<String>> {
    let raw = pool
        .conn
        .query_row(
            "SELECT value FROM kv WHERE key = ?1",
            params![STATE_KEY],
            |row| row.get::<_, String>(0),
        )
        .optional()?;
    Ok(raw)
}

/// Loads the persisted state.
///
/// An empty store yields a fresh state with `default_target`. A corrupt
/// document is copied to `CORRUPT_STATE_KEY` first, then reported and
/// ignored the same way; the next save only replaces the main key.
pub fn load_state(pool: &DbPool, default_target: i64) -> AppResult<TrackerState> {
    let fresh = TrackerState::with_target(default_target);

    let Some(raw) = load_raw(pool)? else {
        debug!("no stored state, starting empty");
        return Ok(fresh);
    };

    match parse_document(&raw, &fresh) {
        Ok(state) => {
            debug!(records = state.records.len(), "state loaded");
            Ok(state)
        }
        Err(e) => {
            warn!(error = %e, "stored state is unreadable, ignoring it");
            backup_raw(pool, &raw)?;
            warning(format!(
                "Stored data could not be read and was ignored ({e}). \
                 A copy was kept under '{CORRUPT_STATE_KEY}'."
            ));
            Ok(fresh)
        }
    }
}

pub fn save_state(pool: &DbPool, state: &TrackerState) -> AppResult<()> {
    let json = serde_json::to_string(&state.to_document())?;

    pool.conn.execute(
        "INSERT INTO kv (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        params![STATE_KEY, json],
    )?;

    debug!(records = state.records.len(), bytes = json.len(), "state saved");
    Ok(())
}

fn backup_raw(pool: &DbPool, raw: &str) -> AppResult<()> {
    pool.conn.execute(
        "INSERT INTO kv (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        params![CORRUPT_STATE_KEY, raw],
    )?;
    Ok(())
}
