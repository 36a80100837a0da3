//! Rendering of one linked unit into a TypeScript file.

use indexmap::IndexSet;
use tsmirror_core::to_lower_camel;
use tsmirror_ir::{EnumMember, Field, FieldType, Inheritance, Unit, UnitKind};

use crate::{
    CodeFile, FILE_EXTENSION, TypeScriptTypeMapper,
    ast::{self, Import, Interface, InterfaceField, TsEnum},
};

/// Comment line written at the top of every generated file.
pub const BANNER: &str = "/* Auto Generated */";

/// Options affecting rendered output.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Prepend [`BANNER`] followed by a blank line.
    pub banner: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { banner: true }
    }
}

/// Render a linked unit as the content of its `.ts` file.
pub fn render_unit(unit: &Unit, options: &RenderOptions) -> String {
    let file = match &unit.kind {
        UnitKind::Enum { members, .. } => CodeFile::new().add(enum_decl(&unit.name, members)),
        UnitKind::Record { inherits, fields } => CodeFile::new()
            .imports(record_imports(inherits.as_ref(), fields))
            .add(interface_decl(&unit.name, inherits.as_ref(), fields)),
    };

    let file = if options.banner {
        file.banner(BANNER)
    } else {
        file
    };
    file.render()
}

/// Output path of a unit relative to the output root, `/`-separated.
pub fn output_path(unit: &Unit) -> String {
    let file_name = format!("{}.{}", to_lower_camel(&unit.name), FILE_EXTENSION);
    let dir = unit.structure.trim_matches('/');
    if dir.is_empty() {
        file_name
    } else {
        format!("{dir}/{file_name}")
    }
}

fn enum_decl(name: &str, members: &[EnumMember]) -> TsEnum {
    members
        .iter()
        .filter(|member| !member.name.is_empty())
        .fold(TsEnum::new(name), |decl, member| {
            let rendered = ast::EnumMember::new(to_lower_camel(&member.name));
            decl.member(if member.is_implicit {
                rendered
            } else {
                rendered.value(member.value)
            })
        })
}

/// Imports in first-use order: the resolved parent, then each user-defined
/// field type. Identical lines collapse into one.
fn record_imports(inherits: Option<&Inheritance>, fields: &[Field]) -> IndexSet<Import> {
    let parent = inherits.and_then(|parent| {
        parent
            .import_path
            .as_ref()
            .map(|path| Import::new(&parent.name, path))
    });

    let field_types = fields.iter().filter_map(|field| match &field.ty {
        FieldType::UserDefined { name, import_path } => Some(Import::new(name, import_path)),
        _ => None,
    });

    parent.into_iter().chain(field_types).collect()
}

fn interface_decl(name: &str, inherits: Option<&Inheritance>, fields: &[Field]) -> Interface {
    let mapper = TypeScriptTypeMapper;
    let decl = match inherits {
        Some(parent) => Interface::new(name).extends(&parent.name),
        None => Interface::new(name),
    };

    fields
        .iter()
        .filter(|field| !field.variable_name.is_empty())
        .fold(decl, |decl, field| {
            decl.field(InterfaceField {
                optional: field.is_optional,
                array: field.is_array,
                ..InterfaceField::new(
                    to_lower_camel(&field.variable_name),
                    mapper.map_field_type(&field.ty),
                )
            })
        })
}
