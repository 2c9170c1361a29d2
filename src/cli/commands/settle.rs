use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::store::SessionStore;
use crate::ui::messages::{info, warning};
use crate::ui::report::print_settlement;
use crate::utils::range::resolve_range;

/// Compute and print the settlement for the selected period.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Settle { range } = cmd {
        let store = SessionStore::open(&cfg.store)?;

        if store.members.is_empty() {
            warning("No regular members defined: every ride counts as 'no regulars'.");
        }

        let bounds = resolve_range(range.as_deref())?;
        let report = Core::build_settlement(&store, cfg, bounds);

        if report.daily_breakdown.is_empty() {
            info("No ride sessions recorded for the selected range.");
            return Ok(());
        }

        print_settlement(&report, &store.members, &cfg.currency);
    }
    Ok(())
}
