//! Pagewright CLI - minimal static site builder
//!
//! Usage: pagewright <COMMAND>
//!
//! Commands:
//!   run       Clean, build, then rebuild on change until Ctrl+C
//!   generate  Build every page once
//!   clean     Delete generated pages

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use pagewright::Config;

mod cli;
mod commands;
mod ui;

use cli::{Cli, Commands};
use ui::context::UiContext;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let json = cli.json;

    match dispatch(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            ui::error::print_error(&err, json);
            ExitCode::FAILURE
        }
    }
}

fn dispatch(cli: Cli) -> Result<()> {
    let Cli {
        json,
        verbose,
        command,
    } = cli;

    match command {
        None => {
            println!("{}", cli::USAGE);
            Ok(())
        }
        Some(command) if !command.extra_args().is_empty() => {
            println!("{}", cli::USAGE);
            Ok(())
        }
        Some(Commands::Unknown(args)) => {
            print!("{}", cli::unknown_command(&args));
            Ok(())
        }
        Some(Commands::Run(_)) => {
            let (config, ui) = setup(json, verbose)?;
            commands::run::cmd_run(&config, &ui)
        }
        Some(Commands::Generate(_)) => {
            let (config, ui) = setup(json, verbose)?;
            commands::generate::cmd_generate(&config, &ui)
        }
        Some(Commands::Clean(_)) => {
            let (config, ui) = setup(json, verbose)?;
            commands::clean::cmd_clean(&config, &ui)
        }
    }
}

/// Load configuration and start logging
fn setup(json: bool, verbose: u8) -> Result<(Config, UiContext)> {
    let (config, warnings) = Config::load_or_default(Path::new("."))?;
    pagewright::logging::init(verbose, &config.logging);

    for warning in &warnings {
        tracing::warn!("{}", warning);
    }

    let ui = UiContext::new(json, verbose, &config);
    Ok((config, ui))
}
