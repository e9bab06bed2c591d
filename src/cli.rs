use clap::{Args, CommandFactory, Parser, Subcommand};

/// Short usage shown when no command is given
pub const USAGE: &str = "Usage: pagewright [run/generate/clean]";

/// Pagewright - minimal static site builder
#[derive(Parser, Debug)]
#[command(name = "pagewright")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Layout is read from pagewright.toml in the working directory, if present.")]
pub struct Cli {
    /// Emit NDJSON events instead of human output
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Clean the output tree, build every page, then rebuild on change
    Run(ExtraArgs),

    /// Build every page once and exit
    Generate(ExtraArgs),

    /// Delete generated pages from the output tree
    Clean(ExtraArgs),

    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

impl Commands {
    /// Arguments given after a known command; any at all means usage
    pub fn extra_args(&self) -> &[String] {
        match self {
            Commands::Run(extra) | Commands::Generate(extra) | Commands::Clean(extra) => {
                &extra.args
            }
            Commands::Unknown(_) => &[],
        }
    }
}

/// Commands take no operands; anything trailing is collected here
#[derive(Args, Debug, Default, PartialEq, Eq)]
pub struct ExtraArgs {
    #[arg(hide = true, trailing_var_arg = true)]
    pub args: Vec<String>,
}

/// Full help page
pub fn long_help() -> String {
    Cli::command().render_long_help().to_string()
}

/// Message for a command that does not exist
pub fn unknown_command(args: &[String]) -> String {
    let name = args.first().map(String::as_str).unwrap_or_default();
    format!("Command \"{}\" not found\n\n{}", name, long_help())
}
