use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::entry::EntryLogic;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date::parse_date_or_today;
use crate::utils::time::{now_hhmm, parse_optional_time};

/// Handle `in` and `out`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::In { date, at } => {
            let d = parse_date_or_today(date.as_ref())?;
            let time = parse_optional_time(at.as_ref())?.unwrap_or_else(now_hhmm);

            let (pool, mut state) = Core::open(cfg)?;
            EntryLogic::clock_in(&mut state, d, &time)?;
            Core::commit(&pool, &state, "in", &d.to_string(), &format!("Clock-in at {time}"))?;

            success(format!("Clocked in on {d} at {time}"));
        }
        Commands::Out { date, at } => {
            let d = parse_date_or_today(date.as_ref())?;
            let time = parse_optional_time(at.as_ref())?.unwrap_or_else(now_hhmm);

            let (pool, mut state) = Core::open(cfg)?;
            EntryLogic::clock_out(&mut state, d, &time)?;
            Core::commit(&pool, &state, "out", &d.to_string(), &format!("Clock-out at {time}"))?;

            success(format!("Clocked out on {d} at {time}"));
        }
        _ => {}
    }

    Ok(())
}
