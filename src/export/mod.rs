// src/export/mod.rs

mod fs_utils;
pub mod import;
mod json_csv;
pub mod logic;
mod model;

pub use import::ImportLogic;
pub use json_csv::{render_csv, render_json};
pub use logic::ExportLogic;
pub use model::{CSV_HEADERS, PeriodExport, records_to_rows};

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Helper comune per messaggi di completamento export.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}
