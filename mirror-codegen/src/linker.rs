//! Cross-unit type resolution.
//!
//! A type name found in one unit is resolved against the complete set of
//! parsed units. A hit yields an import path relative to the requesting
//! unit's directory; a miss simply means the name is not a declared unit.

use tsmirror_core::to_lower_camel;
use tsmirror_ir::{Field, FieldType, PrimitiveType, Unit, UnitKind};

/// Resolves type names against a complete unit set.
pub struct Linker<'a> {
    units: &'a [Unit],
}

impl<'a> Linker<'a> {
    pub fn new(units: &'a [Unit]) -> Self {
        Self { units }
    }

    /// Find the unit named `name` and return its import path as seen from
    /// `requesting`, e.g. `./../parts/part`.
    pub fn find(&self, name: &str, requesting: &Unit) -> Option<String> {
        self.units.iter().find(|unit| unit.name == name).map(|unit| {
            format!(
                "{}{}",
                relative_dir(&requesting.structure, &unit.structure),
                to_lower_camel(&unit.name)
            )
        })
    }

    /// Return a copy of `unit` with every type reference resolved.
    pub fn link_unit(&self, unit: &Unit) -> Unit {
        let kind = match &unit.kind {
            UnitKind::Record { inherits, fields } => UnitKind::Record {
                inherits: inherits.clone().map(|mut parent| {
                    parent.import_path = self.find(&parent.name, unit);
                    parent
                }),
                fields: fields
                    .iter()
                    .map(|field| self.link_field(field, unit))
                    .collect(),
            },
            UnitKind::Enum { .. } => unit.kind.clone(),
        };

        unit.clone().with_kind(kind)
    }

    fn link_field(&self, field: &Field, unit: &Unit) -> Field {
        let FieldType::Unresolved(name) = &field.ty else {
            return field.clone();
        };
        if field.is_placeholder() {
            return field.clone();
        }

        let ty = match self.find(name, unit) {
            Some(import_path) => FieldType::UserDefined {
                name: name.clone(),
                import_path,
            },
            None => FieldType::Primitive(PrimitiveType::from_source(name)),
        };

        Field {
            ty,
            ..field.clone()
        }
    }
}

/// Resolve every unit against the whole set.
pub fn link(units: &[Unit]) -> Vec<Unit> {
    let linker = Linker::new(units);
    units.iter().map(|unit| linker.link_unit(unit)).collect()
}

/// Relative path from directory `from` to directory `to`, both relative to
/// the same root. The result is prefixed with `./` and ends with `/`.
///
/// ```
/// use tsmirror_codegen::relative_dir;
///
/// assert_eq!(relative_dir("x/y", "x/z"), "./../z/");
/// assert_eq!(relative_dir("x", "x"), "./");
/// ```
pub fn relative_dir(from: &str, to: &str) -> String {
    let from = segments(from);
    let to = segments(to);
    let common = from.iter().zip(&to).take_while(|(a, b)| a == b).count();

    let mut rel = "../".repeat(from.len() - common);
    for segment in &to[common..] {
        rel.push_str(segment);
        rel.push('/');
    }

    format!("./{rel}")
}

fn segments(dir: &str) -> Vec<&str> {
    dir.split(['/', '\\'])
        .filter(|s| !s.is_empty() && *s != ".")
        .collect()
}
