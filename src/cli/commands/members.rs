use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::SessionStore;
use crate::ui::messages::{info, success, warning};
use crate::utils::formatting::split_names;

/// Show or update the roster of regular members.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Members { set, add, remove } = cmd {
        let mut store = SessionStore::open(&cfg.store)?;
        let mut changed = false;

        if let Some(list) = set {
            store.set_members(split_names(list));
            changed = true;
        }

        for name in add {
            if store.add_member(name) {
                changed = true;
            } else {
                warning(format!("'{}' skipped (blank or already a member)", name.trim()));
            }
        }

        for name in remove {
            if store.remove_member(name) {
                changed = true;
            } else {
                warning(format!("'{}' is not a member", name.trim()));
            }
        }

        if changed {
            store.save(&cfg.store)?;
            success("Members updated.");
        }

        if store.members.is_empty() {
            info("No regular members yet. Use --set \"A, B, C\".");
        } else {
            println!("Regular members ({}):", store.members.len());
            for (i, m) in store.members.iter().enumerate() {
                println!("  {}. {}", i + 1, m);
            }
        }
    }

    Ok(())
}
