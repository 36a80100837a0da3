//! Pipeline orchestrator.

use eyre::Result;
use tsmirror_source::SourceUnit;

use super::{
    CompilationContext, Phase,
    phases::{LinkPhase, ParsePhase},
};

/// The conversion pipeline orchestrator.
///
/// Runs the built-in phases (parse, link) followed by any user phases.
/// A phase error aborts the run immediately.
///
/// # Example
///
/// ```ignore
/// let ctx = Pipeline::new().phase(MyCustomPhase).run(sources)?;
/// ```
pub struct Pipeline {
    phases: Vec<Box<dyn Phase>>,
}

impl Pipeline {
    /// Create a new pipeline with only the built-in phases.
    pub fn new() -> Self {
        Self { phases: Vec::new() }
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Run the pipeline over discovered source units.
    ///
    /// Executes all phases in order:
    /// 1. ParsePhase - parses every unit (fails on the first structural error)
    /// 2. LinkPhase - resolves type references against the full unit set
    /// 3. User phases (if any)
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails fatally. Parse failures carry a
    /// [`tsmirror_source::Error`] that can be recovered with `downcast_ref`.
    pub fn run(&self, sources: Vec<SourceUnit>) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(sources);

        let builtin_phases: Vec<Box<dyn Phase>> = vec![Box::new(ParsePhase), Box::new(LinkPhase)];

        for phase in builtin_phases.iter().chain(self.phases.iter()) {
            tracing::debug!(phase = phase.name(), "running phase");
            phase.run(&mut ctx)?;
        }

        Ok(ctx)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
