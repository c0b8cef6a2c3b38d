use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::db::log::ttlog;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use tracing::warn;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let (pool, state) = Core::open(cfg)?;
        ExportLogic::export(&state, *format, file, range, *force)?;

        // read-only: only the audit trail is written
        if let Err(e) = ttlog(
            &pool.conn,
            "export",
            format.as_str(),
            &format!("Exported to {file}"),
        ) {
            warn!(error = %e, "failed to write internal log");
        }
    }
    Ok(())
}
