// src/export/import.rs

use crate::errors::{AppError, AppResult};
use crate::models::day_record::DayRecord;
use crate::models::state::TrackerState;
use crate::ui::messages::warning;
use crate::utils::time::MINUTES_PER_DAY;
use serde_json::Value;
use std::path::Path;
use tracing::{debug, warn};

/// Builds a new state from a persisted/exported JSON document.
///
/// - `entries` must be an array of day records, otherwise the document is rejected;
/// - `dailyTargetMinutes` replaces the target only when it is a number within
///   `0..=MINUTES_PER_DAY`.
///
/// `current` is only read; on error nothing has been applied anywhere.
pub fn parse_document(text: &str, current: &TrackerState) -> AppResult<TrackerState> {
    let doc: Value =
        serde_json::from_str(text).map_err(|e| AppError::Import(format!("invalid JSON: {e}")))?;

    let Some(obj) = doc.as_object() else {
        return Err(AppError::Import("document is not a JSON object".into()));
    };

    let entries = match obj.get("entries") {
        Some(Value::Array(items)) => items.clone(),
        Some(_) => return Err(AppError::Import("`entries` is not an array".into())),
        None => return Err(AppError::Import("missing `entries`".into())),
    };

    let records: Vec<DayRecord> = serde_json::from_value(Value::Array(entries))
        .map_err(|e| AppError::Import(format!("invalid entry: {e}")))?;

    let target = match obj.get("dailyTargetMinutes").and_then(Value::as_f64) {
        Some(n) if (0.0..=MINUTES_PER_DAY as f64).contains(&n) => n.round() as i64,
        Some(n) => {
            warn!(value = n, "ignoring out-of-range daily target");
            warning(format!(
                "Imported daily target is outside 0..={MINUTES_PER_DAY} minutes, keeping {} min.",
                current.daily_target_minutes
            ));
            current.daily_target_minutes
        }
        None => current.daily_target_minutes,
    };

    Ok(TrackerState::from_records(records, target))
}

pub struct ImportLogic;

impl ImportLogic {
    /// Reads `path` and returns the state that should replace the current one.
    pub fn import(path: &Path, current: &TrackerState) -> AppResult<TrackerState> {
        let text = std::fs::read_to_string(path)?;
        let state = parse_document(&text, current)?;
        debug!(
            records = state.records.len(),
            daily_target = state.daily_target_minutes,
            "import parsed"
        );
        Ok(state)
    }
}
