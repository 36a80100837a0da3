//! TypeScript type mapper implementation.

use tsmirror_codegen::TypeMapper;
use tsmirror_ir::{FieldType, PrimitiveType};

/// TypeScript type mapper implementation.
pub struct TypeScriptTypeMapper;

impl TypeScriptTypeMapper {
    /// Type name of a linked field type, without array suffix.
    pub fn map_field_type<'a>(&self, ty: &'a FieldType) -> &'a str {
        match ty {
            FieldType::UserDefined { name, .. } => name,
            FieldType::Primitive(primitive) => self.map_primitive(*primitive),
            FieldType::Unresolved(token) => self.map_source(token),
        }
    }
}

impl TypeMapper for TypeScriptTypeMapper {
    fn map_primitive(&self, ty: PrimitiveType) -> &'static str {
        match ty {
            PrimitiveType::Number => "number",
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Text => "string",
            PrimitiveType::DateTime => "Date",
            PrimitiveType::Unknown => "any",
        }
    }
}
