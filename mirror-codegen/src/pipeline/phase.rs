//! Pipeline phase trait.

use eyre::Result;

use super::CompilationContext;

/// A phase in the conversion pipeline.
///
/// Phases are executed in order by the pipeline. Each phase can read and
/// modify the compilation context.
///
/// Built-in phases:
/// - `ParsePhase` - parses every source unit, failing fast
/// - `LinkPhase` - resolves type references across units
pub trait Phase: Send + Sync {
    /// The name of this phase (used in diagnostics and logs).
    fn name(&self) -> &'static str;

    /// A human-readable description of what this phase does.
    fn description(&self) -> &'static str;

    /// Run this phase on the compilation context.
    ///
    /// # Errors
    ///
    /// Returns an error if the phase fails fatally. Non-fatal issues should
    /// be recorded as diagnostics instead.
    fn run(&self, ctx: &mut CompilationContext) -> Result<()>;
}
