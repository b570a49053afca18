//! trackr library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Start { .. } => cli::commands::start::handle(&cli.command, cfg),
        Commands::Stop { .. } => cli::commands::stop::handle(&cli.command, cfg),
        Commands::Cancel => cli::commands::cancel::handle(&cli.command, cfg),
        Commands::Status { .. } => cli::commands::status::handle(&cli.command, cfg),
        Commands::Shift { .. } => cli::commands::shift::handle(&cli.command, cfg),
        Commands::Current { .. } => cli::commands::current::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Daily { .. } => cli::commands::daily::handle(&cli.command, cfg),
        Commands::Report { .. } => cli::commands::report::handle(&cli.command, cfg),
        Commands::Timeline { .. } => cli::commands::timeline::handle(&cli.command, cfg),
        Commands::Frame { .. } => cli::commands::frame::handle(&cli.command, cfg),
        Commands::Task { .. } => cli::commands::task::handle(&cli.command, cfg),
        Commands::Project { .. } | Commands::Projects => {
            cli::commands::project::handle(&cli.command, cfg)
        }
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load();

    // write the defaults on first run so the file is there to edit
    if !Config::config_file().exists() {
        cfg.save()?;
    }

    // command-line DB override wins over the config file
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}
