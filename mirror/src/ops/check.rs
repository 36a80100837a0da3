//! Check operation - parse and link without generating.

use std::path::Path;

use eyre::{Result, bail};
use tsmirror_codegen::pipeline::Pipeline;

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Runs discovery and the pipeline, returning the linked units together
/// with every diagnostic.
pub fn check(input_dir: &Path) -> Result<CheckReport> {
    if !input_dir.is_dir() {
        bail!("input directory {} does not exist", input_dir.display());
    }

    let sources = tsmirror_source::discover(input_dir).map_err(|e| eyre::Report::new(*e))?;
    let locations = sources.iter().map(|s| s.display_path()).collect();
    let mut ctx = Pipeline::new().run(sources)?;

    Ok(CheckReport {
        input_dir: input_dir.to_path_buf(),
        diagnostics: std::mem::take(&mut ctx.diagnostics),
        locations,
        units: ctx.take_units(),
    })
}
