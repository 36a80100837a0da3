//! Check command report data structures.

use std::path::PathBuf;

use serde::Serialize;
use tsmirror_codegen::pipeline::{Diagnostic, Severity};
use tsmirror_ir::{Unit, UnitKind};

use super::output::{Output, Report};

/// Report data from parsing and linking a model tree.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// Directory the models were read from.
    pub input_dir: PathBuf,
    /// Diagnostics from all phases.
    pub diagnostics: Vec<Diagnostic>,
    /// Source path of each unit, parallel to `units`.
    #[serde(skip)]
    pub locations: Vec<String>,
    /// Linked units.
    pub units: Vec<Unit>,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for diag in &self.diagnostics {
            let msg = match &diag.location {
                Some(loc) => format!("{}\n  --> {}", diag.message, loc),
                None => diag.message.clone(),
            };
            match diag.severity {
                Severity::Warning => out.warning(&msg),
                Severity::Info => out.preformatted(&format!("info: {}", msg)),
            }
        }

        if !self.diagnostics.is_empty() {
            out.newline();
        }

        out.preformatted(&format!("✓ {} is valid", self.input_dir.display()));
        out.newline();

        let count = self.units.len();
        out.section(&format!(
            "  {} unit{}",
            count,
            if count == 1 { "" } else { "s" }
        ));
        for (unit, location) in self.units.iter().zip(&self.locations) {
            out.list_item(&format!("{} ({})", location, describe(unit)));
        }
    }
}

fn describe(unit: &Unit) -> String {
    match &unit.kind {
        UnitKind::Enum { members, .. } => plural(members.len(), "enum member"),
        UnitKind::Record { inherits, fields } => {
            let count = fields.iter().filter(|f| !f.is_placeholder()).count();
            match inherits {
                Some(parent) => format!("{}, extends {}", plural(count, "field"), parent.name),
                None => plural(count, "field"),
            }
        }
    }
}

fn plural(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, if count == 1 { "" } else { "s" })
}
