use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `config` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Some(Commands::Config {
        print_config,
        init,
        force,
    }) = &cli.command
    {
        // ---- INIT CONFIG ----
        if *init {
            let path = Config::init(cli.config.as_deref(), *force)?;
            success(format!("Config file written: {}", path.display()));
        }

        // ---- PRINT CONFIG ----
        if *print_config {
            print!("{}", cfg.to_yaml()?);
        }

        if !*init && !*print_config {
            let path = cli.config.clone().unwrap_or_else(Config::config_file);
            info(format!("Config file: {}", path.display()));
        }
    }

    Ok(())
}
