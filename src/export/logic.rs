// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::records_to_rows;
use crate::models::state::TrackerState;
use crate::ui::messages::warning;
use crate::utils::date::parse_range;
use std::path::Path;
use tracing::debug;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the stored records.
    ///
    /// - `format`: csv | json
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"`, or a `YYYY[-MM[-DD]]` expression, optionally `A:B`
    ///
    /// JSON always carries the daily target so the file can be imported back.
    pub fn export(
        state: &TrackerState,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        let selected = match range {
            None => state.clone(),
            Some(r) if r.eq_ignore_ascii_case("all") => state.clone(),
            Some(r) => {
                let (start, end) = parse_range(r)?;
                TrackerState::from_records(
                    state.records_between(start, end),
                    state.daily_target_minutes,
                )
            }
        };

        // JSON is written even when empty so the target still round-trips.
        if selected.records.is_empty() && matches!(format, ExportFormat::Csv) {
            warning("No records found for selected range.");
            return Ok(());
        }

        ensure_writable(path, force)?;
        debug!(format = format.as_str(), records = selected.records.len(), "exporting");

        match format {
            ExportFormat::Csv => export_csv(&records_to_rows(&selected.all_records()), path)?,
            ExportFormat::Json => export_json(&selected, path)?,
        }

        Ok(())
    }
}
