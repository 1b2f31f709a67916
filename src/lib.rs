//! rMotoHours library root.
//! Exposes the core model (repository, daily aggregator, persistence store),
//! the CLI parser and the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod storage;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::Hours { .. } | Commands::Rename { .. } => {
            cli::commands::edit::handle(&cli.command, cfg)
        }
        Commands::Del { .. } | Commands::Unsave { .. } => {
            cli::commands::del::handle(&cli.command, cfg)
        }
        Commands::List { .. } | Commands::Total { .. } => {
            cli::commands::list::handle(&cli.command, cfg)
        }
        Commands::Save { .. } | Commands::Saved => cli::commands::save::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1. parse CLI
    let cli = Cli::parse();

    // 2. load config once
    let mut cfg = Config::load()?;

    // 3. command-line DB override
    if let Some(custom_db) = &cli.db {
        cfg.database = utils::path::expand_tilde(custom_db)
            .to_string_lossy()
            .to_string();
    }

    // 4. dispatch
    dispatch(&cli, &cfg)
}
