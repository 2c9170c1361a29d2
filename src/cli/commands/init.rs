use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::SessionStore;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - an empty JSON session store, unless one already exists
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.store.as_deref(), cli.test)?;

    println!("⚙️  Initializing carpool-ledger…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗂️  Store       : {}", &cfg.store);

    let store = SessionStore::open(&cfg.store)?;
    success(format!(
        "Store ready: {} members, {} sessions",
        store.members.len(),
        store.sessions.len()
    ));

    Ok(())
}
