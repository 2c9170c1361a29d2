use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::SessionStore;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let store = SessionStore::open(&cfg.store)?;
        ExportLogic::export(&store, cfg, *format, file, range.as_deref(), *force)?;
    }
    Ok(())
}
