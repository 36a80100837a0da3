//! Primitive type classification.

use serde::Serialize;

/// Language-agnostic primitive type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveType {
    Number,
    Boolean,
    Text,
    DateTime,
    /// Anything not in the alias table.
    Unknown,
}

impl PrimitiveType {
    /// Classify a cleaned C# type name using the fixed alias table.
    pub fn from_source(token: &str) -> Self {
        match token {
            "byte" | "sbyte" | "decimal" | "double" | "float" | "int" | "uint" | "long"
            | "ulong" | "short" | "ushort" | "Byte" | "Decimal" | "Double" | "Int16" | "Int32"
            | "Int64" | "SByte" | "UInt16" | "UInt32" | "UInt64" | "Single" => Self::Number,
            "bool" | "Boolean" => Self::Boolean,
            "string" | "char" | "String" | "Char" => Self::Text,
            "DateTime" => Self::DateTime,
            _ => Self::Unknown,
        }
    }

    /// Get the lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Text => "text",
            Self::DateTime => "date_time",
            Self::Unknown => "unknown",
        }
    }
}
