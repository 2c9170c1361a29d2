use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::errors::{AppError, AppResult};
use crate::models::SessionKey;
use crate::store::SessionStore;
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
        slot,
        force,
    } = cmd
    {
        let d = date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.into()))?;

        let prompt = match slot {
            Some(s) => format!(
                "Delete the ride {}? This action is irreversible.",
                SessionKey::new(d, Some(*s))
            ),
            None => format!("Delete ALL rides for {}? This action is irreversible.", d),
        };

        if !*force && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut store = SessionStore::open(&cfg.store)?;
        let removed = DeleteLogic::apply(&mut store, d, *slot)?;
        store.save(&cfg.store)?;

        success(format!("{} ride(s) deleted for {}.", removed, d));
    }

    Ok(())
}
