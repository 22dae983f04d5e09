use super::shell::{Echo, Flow, execute};
use crate::cli::input::parse_line;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::header;
use crate::ui::render::{RenderOptions, render_json, render_list};

use std::fs;

/// Handle the `run` command: replay a script of shell commands, then print
/// the resulting list. The first bad line aborts the run.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Some(Commands::Run { script, json }) = &cli.command {
        let content = fs::read_to_string(script)?;
        let mut board = super::build_board(cli, cfg);
        let opts = RenderOptions::from_config(cfg, !cli.no_color);
        let echo = if *json { Echo::Silent } else { Echo::Status };

        for (idx, line) in content.lines().enumerate() {
            let cmd = parse_line(line).map_err(|e| AppError::Script {
                line: idx + 1,
                source: Box::new(e),
            })?;
            if execute(&mut board, cmd, &opts, echo)? == Flow::Quit {
                break;
            }
        }

        tracing::debug!(
            script = %script.display(),
            events = board.store().len(),
            "script finished"
        );

        if *json {
            println!("{}", render_json(board.store().events())?);
        } else {
            header("Events");
            print!("{}", render_list(board.store().events(), &opts));
        }
    }

    Ok(())
}
