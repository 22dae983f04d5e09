//! eventboard library root.
//! Exposes the event store and edit dialog state machine, the CLI parser,
//! and the high-level run() function used by main.rs.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod logging;
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
        None | Some(Commands::Shell) => cli::commands::shell::handle(cli, cfg),
        Some(Commands::Run { .. }) => cli::commands::run::handle(cli, cfg),
        Some(Commands::Config { .. }) => cli::commands::config::handle(cli, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let cfg = Config::load(cli.config.as_deref())?;

    // 3️⃣ status messages follow the color settings too
    ui::messages::set_color_enabled(cfg.color && !cli.no_color);

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
