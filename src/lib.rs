//! carpool-ledger library root.
//! Exposes the CLI parser, the high-level run() function and the pure
//! settlement calculator for direct use.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

pub use crate::core::calculator::settlement::{
    DEFAULT_SESSION_COST, compute_weekly_settlement, share_per_person,
};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Members { .. } => cli::commands::members::handle(&cli.command, cfg),
        Commands::Ride { .. } => cli::commands::ride::handle(&cli.command, cfg),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Settle { .. } => cli::commands::settle::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // diagnostics stay silent unless RUST_LOG is set
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off"))
        .try_init();

    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    if let Some(custom_store) = &cli.store {
        cfg.store = custom_store.clone();
    }

    log::debug!("using store {}", cfg.store);
    dispatch(&cli, &cfg)
}
