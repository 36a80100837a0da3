//! Compilation context passed through pipeline phases.

use tsmirror_ir::Unit;
use tsmirror_source::SourceUnit;

use super::diagnostic::Diagnostic;

/// Context passed through all pipeline phases.
///
/// Owns the unit collection for the whole run: it is filled by the parse
/// phase and only replaced wholesale by later phases.
#[derive(Debug)]
pub struct CompilationContext {
    /// Discovered source units, in discovery order.
    pub sources: Vec<SourceUnit>,
    /// Parsed units, in the same order (populated by ParsePhase).
    pub units: Vec<Unit>,
    /// Diagnostics collected during the run.
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    /// Create a new compilation context from discovered sources.
    pub fn new(sources: Vec<SourceUnit>) -> Self {
        Self {
            sources,
            units: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Get all warning diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_warning())
    }

    /// Take the linked units out of the context.
    pub fn take_units(&mut self) -> Vec<Unit> {
        std::mem::take(&mut self.units)
    }
}
