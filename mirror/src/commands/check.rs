use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};

use super::ExitOnSourceError;
use crate::{
    config::Config,
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to tsmirror.toml (defaults to ./tsmirror.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory containing the C# models (overrides the config file)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Print the linked units as JSON
    #[arg(long)]
    pub json: bool,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let config = Config::open(self.config.as_deref())?;
        let input_dir = self.input.clone().unwrap_or(config.convert.input);

        let report = ops::check(&input_dir).or_exit()?;

        if self.json {
            let json =
                serde_json::to_string_pretty(&report).wrap_err("Failed to serialize units")?;
            println!("{json}");
        } else {
            report.render(&mut TerminalOutput::new());
        }

        Ok(())
    }
}
