use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::entry::EntryLogic;
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::time::parse_optional_time;

/// Add a period manually.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { date, start, end } = cmd {
        //
        // 1. Parse input before touching the store
        //
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
        let start = parse_optional_time(start.as_ref())?;
        let end = parse_optional_time(end.as_ref())?;

        //
        // 2. Apply and persist
        //
        let (pool, mut state) = Core::open(cfg)?;
        let label = format!(
            "{} - {}",
            start.as_deref().unwrap_or("--:--"),
            end.as_deref().unwrap_or("--:--")
        );
        let index = EntryLogic::add_period(&mut state, d, start, end)?;

        Core::commit(
            &pool,
            &state,
            "add",
            &format!("{d} #{index}"),
            &format!("Added period {label}"),
        )?;

        success(format!("Added period #{index} on {d}: {label}"));
    }

    Ok(())
}
