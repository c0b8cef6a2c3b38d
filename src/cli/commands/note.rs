use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::entry::EntryLogic;
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Note { date, text } = cmd {
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        let (pool, mut state) = Core::open(cfg)?;
        EntryLogic::set_note(&mut state, d, text.clone());

        let msg = match state.record(d).and_then(|r| r.note.as_deref()) {
            Some(n) => format!("Note set: {n}"),
            None => "Note cleared".to_string(),
        };
        Core::commit(&pool, &state, "note", &d.to_string(), &msg)?;

        success(format!("{msg} ({d})"));
    }

    Ok(())
}
