//! Link phase - resolves type references across the unit set.

use eyre::Result;
use tsmirror_ir::{FieldType, PrimitiveType, Unit};

use crate::{
    linker::link,
    pipeline::{CompilationContext, Diagnostic, Phase},
};

/// Resolves field types and base types against all parsed units.
///
/// Unresolved names are not errors: fields fall back to the primitive alias
/// table, and base types keep their name without an import. Both cases are
/// recorded as diagnostics so `check` can surface them.
pub struct LinkPhase;

impl Phase for LinkPhase {
    fn name(&self) -> &'static str {
        "link"
    }

    fn description(&self) -> &'static str {
        "Resolve type references between units"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let linked = link(&ctx.units);

        let diagnostics: Vec<Diagnostic> = linked
            .iter()
            .zip(&ctx.sources)
            .flat_map(|(unit, source)| {
                unresolved_references(self.name(), unit)
                    .into_iter()
                    .map(move |d| d.at(source.display_path()))
            })
            .collect();

        ctx.diagnostics.extend(diagnostics);
        ctx.units = linked;
        tracing::debug!(units = ctx.units.len(), "link complete");
        Ok(())
    }
}

fn unresolved_references(phase: &str, unit: &Unit) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    if let Some(parent) = unit.inherits().filter(|p| p.import_path.is_none()) {
        tracing::debug!(unit = %unit.name, parent = %parent.name, "base type not found");
        diagnostics.push(Diagnostic::warning(
            phase,
            format!(
                "base type '{}' of '{}' is not a declared type; no import is generated for it",
                parent.name, unit.name
            ),
        ));
    }

    for field in unit.fields() {
        if field.ty == FieldType::Primitive(PrimitiveType::Unknown) {
            diagnostics.push(Diagnostic::info(
                phase,
                format!(
                    "'{}.{}' has no type mapping and is emitted as the unknown type",
                    unit.name, field.variable_name
                ),
            ));
        }
    }

    diagnostics
}

#[cfg(test)]
mod tests {
    use tsmirror_source::SourceUnit;

    use super::*;
    use crate::pipeline::{Severity, phases::ParsePhase};

    fn run(sources: Vec<SourceUnit>) -> CompilationContext {
        let mut ctx = CompilationContext::new(sources);
        ParsePhase.run(&mut ctx).unwrap();
        LinkPhase.run(&mut ctx).unwrap();
        ctx
    }

    #[test]
    fn test_link_phase_resolves_units() {
        let ctx = run(vec![
            SourceUnit::from_text("Car", "Vehicles", "class Car : Vehicle\n{\n}"),
            SourceUnit::from_text("Vehicle", "Vehicles", "class Vehicle\n{\n}"),
        ]);

        let parent = ctx.units[0].inherits().unwrap();
        assert_eq!(parent.import_path.as_deref(), Some("./vehicle"));
        assert!(ctx.diagnostics.is_empty());
    }

    #[test]
    fn test_link_phase_reports_missing_base_type() {
        let ctx = run(vec![SourceUnit::from_text(
            "Vehicle",
            "Vehicles",
            "class Vehicle : Entity\n{\n}",
        )]);

        assert_eq!(ctx.diagnostics.len(), 1);
        let diag = &ctx.diagnostics[0];
        assert_eq!(diag.severity, Severity::Warning);
        assert_eq!(diag.phase, "link");
        assert!(diag.message.contains("'Entity'"));
        assert_eq!(diag.location.as_deref(), Some("Vehicles/Vehicle.cs"));
    }

    #[test]
    fn test_link_phase_reports_unmapped_fields() {
        let ctx = run(vec![SourceUnit::from_text(
            "Car",
            "",
            "class Car\n{\n    public Guid Id;\n    public int Year;\n}",
        )]);

        let infos: Vec<_> = ctx.diagnostics.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(
            infos,
            vec!["'Car.Id' has no type mapping and is emitted as the unknown type"]
        );
    }
}
