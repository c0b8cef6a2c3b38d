use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::entry::EntryLogic;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::time::{format_minutes, parse_duration};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Target { value } = cmd {
        let (pool, mut state) = Core::open(cfg)?;

        let Some(raw) = value else {
            info(format!(
                "Daily target: {} ({} min)",
                format_minutes(state.daily_target_minutes),
                state.daily_target_minutes
            ));
            return Ok(());
        };

        let minutes = parse_duration(raw)?;
        let previous = state.daily_target_minutes;
        EntryLogic::set_target(&mut state, minutes)?;

        Core::commit(
            &pool,
            &state,
            "target",
            "",
            &format!("Daily target {previous} -> {minutes} min"),
        )?;

        success(format!(
            "Daily target set to {} ({minutes} min)",
            format_minutes(minutes)
        ));
    }

    Ok(())
}
