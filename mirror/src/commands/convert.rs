use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::ExitOnSourceError;
use crate::{
    config::Config,
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ConvertCommand {
    /// Path to tsmirror.toml (defaults to ./tsmirror.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory containing the C# models (overrides the config file)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Directory receiving the TypeScript files (overrides the config file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Omit the auto-generated banner comment
    #[arg(long)]
    pub no_banner: bool,

    /// Preview generated files without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Keep existing files in the output directory
    #[arg(long)]
    pub no_clean: bool,
}

impl ConvertCommand {
    /// Run the convert command
    pub fn run(&self) -> Result<()> {
        let config = Config::open(self.config.as_deref())?;

        let input_dir = self.input.clone().unwrap_or(config.convert.input);
        let output_dir = self.output.clone().unwrap_or(config.convert.output);

        let report = ops::convert(ops::convert::ConvertOptions {
            input_dir: &input_dir,
            output_dir: &output_dir,
            banner: config.convert.banner && !self.no_banner,
            dry_run: self.dry_run,
            clean: !self.no_clean,
        })
        .or_exit()?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
