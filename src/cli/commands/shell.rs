use crate::cli::input::{HELP, ShellCommand, parse_line};
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::{Board, Outcome};
use crate::errors::AppResult;
use crate::ui::messages::{error, header, info, success, warning};
use crate::ui::render::{
    RenderOptions, describe_outcome, render_activity, render_dialog, render_json, render_list,
};

use std::io::{self, BufRead, IsTerminal, Write};

/// How much of each command's effect gets printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Echo {
    /// Status line, then the list after every change and the open dialog.
    Full,
    /// Status lines and explicit view commands only.
    Status,
    /// Nothing at all; view commands are skipped.
    Silent,
}

/// Whether the read loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Handle the `shell` command (also the default with no subcommand).
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let mut board = super::build_board(cli, cfg);
    let opts = RenderOptions::from_config(cfg, !cli.no_color);

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();

    header("Events");
    print!("{}", render_list(board.store().events(), &opts));
    if interactive {
        info("Type 'help' for the list of commands.");
    }

    let mut reader = stdin.lock();
    let mut buf = Vec::new();
    loop {
        if interactive {
            print!("{}", cfg.prompt);
            io::stdout().flush()?;
        }

        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let Ok(line) = std::str::from_utf8(&buf) else {
            error("Input is not valid UTF-8, line ignored");
            continue;
        };

        match parse_line(line) {
            Ok(cmd) => {
                if execute(&mut board, cmd, &opts, Echo::Full)? == Flow::Quit {
                    break;
                }
            }
            Err(e) => error(e),
        }
    }

    tracing::debug!(events = board.store().len(), "shell closed");
    Ok(())
}

/// Apply one parsed command to the board and print its effect.
pub fn execute(
    board: &mut Board,
    cmd: ShellCommand,
    opts: &RenderOptions,
    echo: Echo,
) -> AppResult<Flow> {
    if echo == Echo::Silent {
        return Ok(match cmd {
            ShellCommand::Intent(intent) => {
                board.dispatch(intent);
                Flow::Continue
            }
            ShellCommand::Quit => Flow::Quit,
            _ => Flow::Continue,
        });
    }

    match cmd {
        ShellCommand::Intent(intent) => {
            let outcome = board.dispatch(intent);
            report(&outcome);

            if echo == Echo::Full {
                if outcome.list_changed() {
                    print!("{}", render_list(board.store().events(), opts));
                }
                if let Some(dialog) = render_dialog(board.session(), opts) {
                    print!("{dialog}");
                }
            }
        }
        ShellCommand::List => print!("{}", render_list(board.store().events(), opts)),
        ShellCommand::Show => match render_dialog(board.session(), opts) {
            Some(dialog) => print!("{dialog}"),
            None => info("The edit dialog is closed."),
        },
        ShellCommand::Json => println!("{}", render_json(board.store().events())?),
        ShellCommand::Log => print!("{}", render_activity(board.activity(), opts)),
        ShellCommand::Help => println!("{HELP}"),
        ShellCommand::Quit => return Ok(Flow::Quit),
        ShellCommand::Nothing => {}
    }

    Ok(Flow::Continue)
}

fn report(outcome: &Outcome) {
    let Some(msg) = describe_outcome(outcome) else {
        return;
    };
    match outcome {
        Outcome::Ignored(_) | Outcome::Dropped(_) => warning(msg),
        Outcome::Cancelled => info(msg),
        _ => success(msg),
    }
}
