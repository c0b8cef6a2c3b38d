use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::entry::EntryLogic;
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use crate::utils::date;

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del {
        date: date_str,
        period,
        yes,
    } = cmd
    {
        let d = date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.into()))?;

        if !*yes
            && !ask_confirmation(&format!(
                "Delete period #{period} for {d}? This action is irreversible."
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let (pool, mut state) = Core::open(cfg)?;
        let removed = EntryLogic::delete_period(&mut state, d, *period)?;

        Core::commit(
            &pool,
            &state,
            "del",
            &format!("{d} #{period}"),
            &format!(
                "Deleted period {} - {}",
                removed.start_str(),
                removed.end_str()
            ),
        )?;

        success(format!("Period #{period} for {d} has been deleted."));
    }

    Ok(())
}
