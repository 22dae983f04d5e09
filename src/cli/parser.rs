use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for eventboard
#[derive(Parser, Debug)]
#[command(
    name = "eventboard",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small in-memory event list editor: add, delete and edit events from the terminal",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Start with an empty list instead of the three demo events
    #[arg(global = true, long = "no-seed")]
    pub no_seed: bool,

    /// Disable ANSI colors in the output
    #[arg(global = true, long = "no-color")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive shell (default when no command is given)
    Shell,

    /// Run shell commands from a script file, then print the final list
    Run {
        /// Script file: one shell command per line, '#' starts a comment
        #[arg(value_name = "SCRIPT")]
        script: PathBuf,

        /// Print the final list as JSON instead of a table
        #[arg(long = "json")]
        json: bool,
    },

    /// View or create the configuration file
    Config {
        /// Print the effective configuration
        #[arg(long = "print", help = "Print the effective configuration as YAML")]
        print_config: bool,

        /// Write a default configuration file
        #[arg(long = "init", help = "Write a default configuration file")]
        init: bool,

        /// Overwrite an existing file (with --init)
        #[arg(long = "force", requires = "init")]
        force: bool,
    },
}
