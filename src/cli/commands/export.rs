use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        out,
        badge,
        force,
    } = cmd
    {
        let store = open_store(cfg);
        let out = expand_tilde(out);
        ExportLogic::export(&store, *format, &out, badge.as_deref(), *force)?;
    }
    Ok(())
}
