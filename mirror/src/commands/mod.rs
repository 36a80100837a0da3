mod check;
mod completions;
mod convert;

use check::CheckCommand;
use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use convert::ConvertCommand;
use eyre::Result;

/// Extension trait for exiting on source errors with pretty formatting
pub(crate) trait ExitOnSourceError<T> {
    /// Print a parse or discovery error as a miette report and exit with
    /// status 1; any other error is passed through.
    fn or_exit(self) -> Result<T>;
}

impl<T> ExitOnSourceError<T> for Result<T> {
    fn or_exit(self) -> Result<T> {
        self.map_err(|report| match report.downcast::<tsmirror_source::Error>() {
            Ok(e) => {
                eprintln!("{:?}", miette::Report::new(e));
                std::process::exit(1);
            }
            Err(report) => report,
        })
    }
}

#[derive(Parser)]
#[command(name = "tsmirror")]
#[command(version)]
#[command(about = "Convert C# model classes into TypeScript declarations")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Convert(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Convert C# models into TypeScript files
    Convert(ConvertCommand),

    /// Parse and link models without writing anything
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
