use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::entry::EntryLogic;
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::time::parse_optional_time;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        date,
        period,
        start,
        end,
        reopen,
    } = cmd
    {
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
        let start = parse_optional_time(start.as_ref())?;
        let end = parse_optional_time(end.as_ref())?;

        let (pool, mut state) = Core::open(cfg)?;
        EntryLogic::edit_period(&mut state, d, *period, start, end, *reopen)?;

        let (s, e) = state
            .record(d)
            .and_then(|r| r.periods.get(period - 1))
            .map(|p| (p.start_str().to_string(), p.end_str().to_string()))
            .unwrap_or_default();

        Core::commit(
            &pool,
            &state,
            "edit",
            &format!("{d} #{period}"),
            &format!("Period is now {s} - {e}"),
        )?;

        success(format!("Period #{period} on {d} updated: {s} - {e}"));
    }

    Ok(())
}
