use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::SessionStore;
use crate::ui::messages::info;
use crate::ui::report::print_sessions;
use crate::utils::range::resolve_range;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { range } = cmd {
        let store = SessionStore::open(&cfg.store)?;
        let bounds = resolve_range(range.as_deref())?;
        let sessions = store.sessions_in(bounds);

        if sessions.is_empty() {
            info("No ride sessions recorded for the selected range.");
            return Ok(());
        }

        print_sessions(&sessions, &cfg.currency);
    }
    Ok(())
}
