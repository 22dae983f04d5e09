pub mod config;
pub mod run;
pub mod shell;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::{Board, Clock, EventStore, SystemClock};

/// Fresh board for a shell or script session.
pub(crate) fn build_board(cli: &Cli, cfg: &Config) -> Board {
    let clock = SystemClock;
    let store = if cfg.seed_demo_events && !cli.no_seed {
        EventStore::seeded(clock.now())
    } else {
        EventStore::default()
    };
    Board::new(
        store.with_title_prefix(cfg.new_title_prefix.clone()),
        Box::new(clock),
    )
}
