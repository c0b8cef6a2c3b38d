use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::export::ImportLogic;
use crate::ui::messages::{info, success};
use crate::utils::time::format_minutes;
use std::path::Path;

/// Replace all records with the content of a JSON export.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let (pool, state) = Core::open(cfg)?;
        info(format!("Importing from: {file}"));

        // the stored state is only replaced once the whole document validated
        let imported = ImportLogic::import(Path::new(file), &state)?;

        Core::commit(
            &pool,
            &imported,
            "import",
            file,
            &format!(
                "Imported {} records (previously {})",
                imported.records.len(),
                state.records.len()
            ),
        )?;

        success(format!(
            "Imported {} day records, daily target {}",
            imported.records.len(),
            format_minutes(imported.daily_target_minutes)
        ));
    }

    Ok(())
}
