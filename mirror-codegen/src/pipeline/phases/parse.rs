//! Parse phase - turns every source unit into a unit.

use eyre::Result;

use crate::pipeline::{CompilationContext, Phase};

/// Parses all discovered sources, failing on the first structural or
/// numeric error.
pub struct ParsePhase;

impl Phase for ParsePhase {
    fn name(&self) -> &'static str {
        "parse"
    }

    fn description(&self) -> &'static str {
        "Parse declaration files into units"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        ctx.units = tsmirror_source::parse_all(&ctx.sources).map_err(|e| eyre::Report::new(*e))?;
        tracing::debug!(units = ctx.units.len(), "parse complete");
        Ok(())
    }
}
