// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{CSV_HEADERS, PeriodExport};
use crate::export::notify_export_success;
use crate::models::state::TrackerState;
use crate::ui::messages::info;
use csv::WriterBuilder;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Pretty-printed persisted shape.
pub fn render_json(state: &TrackerState) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(&state.to_document())?)
}

/// `;`-separated table. Fields holding the delimiter or quotes are quoted.
pub fn render_csv<W: Write>(rows: &[PeriodExport], out: W) -> AppResult<()> {
    let mut wtr = WriterBuilder::new()
        .delimiter(b';')
        .from_writer(out);

    wtr.write_record(CSV_HEADERS)
        .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;

    for row in rows {
        wtr.write_record(row.to_row())
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()?;
    Ok(())
}

/// Export JSON pretty-printed.
pub(crate) fn export_json(state: &TrackerState, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = render_json(state)?;
    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV (header row first).
pub(crate) fn export_csv(rows: &[PeriodExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let file = File::create(path)?;
    render_csv(rows, file)?;

    notify_export_success("CSV", path);
    Ok(())
}
