//! Declared-type units.

use serde::Serialize;

use crate::PrimitiveType;

/// One declared type, parsed from one source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Unit {
    /// Capitalized type name, taken from the file name.
    pub name: String,
    /// Directory of the declaration relative to the input root, `/`-separated.
    /// Empty for files at the root.
    pub structure: String,
    /// Raw source lines, kept for the enum member re-scan.
    #[serde(skip)]
    pub lines: Vec<String>,
    pub kind: UnitKind,
}

/// Record or enumeration payload of a [`Unit`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UnitKind {
    Record {
        inherits: Option<Inheritance>,
        fields: Vec<Field>,
    },
    Enum {
        /// Underlying integral type (`enum Flags : byte`), not rendered.
        underlying: Option<String>,
        members: Vec<EnumMember>,
    },
}

impl Unit {
    /// Create an empty record unit.
    pub fn record(name: impl Into<String>, structure: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            structure: structure.into(),
            lines: Vec::new(),
            kind: UnitKind::Record {
                inherits: None,
                fields: Vec::new(),
            },
        }
    }

    /// Attach the raw source lines.
    pub fn with_lines(mut self, lines: Vec<String>) -> Self {
        self.lines = lines;
        self
    }

    /// Replace the unit's payload.
    pub fn with_kind(mut self, kind: UnitKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn is_enum(&self) -> bool {
        matches!(self.kind, UnitKind::Enum { .. })
    }

    /// Record fields, empty for enums.
    pub fn fields(&self) -> &[Field] {
        match &self.kind {
            UnitKind::Record { fields, .. } => fields,
            UnitKind::Enum { .. } => &[],
        }
    }

    /// Enum members, empty for records.
    pub fn enum_members(&self) -> &[EnumMember] {
        match &self.kind {
            UnitKind::Enum { members, .. } => members,
            UnitKind::Record { .. } => &[],
        }
    }

    /// Parent type of a record.
    pub fn inherits(&self) -> Option<&Inheritance> {
        match &self.kind {
            UnitKind::Record { inherits, .. } => inherits.as_ref(),
            UnitKind::Enum { .. } => None,
        }
    }
}

/// Parent type of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inheritance {
    pub name: String,
    /// Relative import path, set when the parent is a known unit.
    pub import_path: Option<String>,
}

impl Inheritance {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            import_path: None,
        }
    }
}

/// One record member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub variable_name: String,
    pub ty: FieldType,
    pub is_array: bool,
    pub is_optional: bool,
}

impl Field {
    pub fn new(variable_name: impl Into<String>, ty: FieldType) -> Self {
        Self {
            variable_name: variable_name.into(),
            ty,
            is_array: false,
            is_optional: false,
        }
    }

    /// The all-empty field pushed for records that only declare inheritance.
    pub fn placeholder() -> Self {
        Self::new("", FieldType::Unresolved(String::new()))
    }

    pub fn array(mut self) -> Self {
        self.is_array = true;
        self
    }

    pub fn optional(mut self) -> Self {
        self.is_optional = true;
        self
    }

    pub fn is_placeholder(&self) -> bool {
        self.variable_name.is_empty()
    }

    pub fn is_user_defined(&self) -> bool {
        matches!(self.ty, FieldType::UserDefined { .. })
    }
}

/// Type of a record member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum FieldType {
    /// Cleaned source type name, before linking.
    Unresolved(String),
    /// Not a declared unit; mapped through the primitive alias table.
    Primitive(PrimitiveType),
    /// Another unit in the tree.
    UserDefined { name: String, import_path: String },
}

/// One enumeration member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumMember {
    pub name: String,
    pub value: i32,
    /// True when the source line carried no `= value`.
    pub is_implicit: bool,
}

impl EnumMember {
    pub fn explicit(name: impl Into<String>, value: i32) -> Self {
        Self {
            name: name.into(),
            value,
            is_implicit: false,
        }
    }

    pub fn implicit(name: impl Into<String>, carried: i32) -> Self {
        Self {
            name: name.into(),
            value: carried,
            is_implicit: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_accessors() {
        let unit = Unit::record("Car", "Vehicles").with_kind(UnitKind::Record {
            inherits: Some(Inheritance::new("Vehicle")),
            fields: vec![Field::placeholder()],
        });

        assert!(!unit.is_enum());
        assert_eq!(unit.fields().len(), 1);
        assert!(unit.fields()[0].is_placeholder());
        assert_eq!(unit.inherits().map(|i| i.name.as_str()), Some("Vehicle"));
        assert!(unit.enum_members().is_empty());
    }

    #[test]
    fn test_enum_accessors() {
        let unit = Unit::record("Status", "").with_kind(UnitKind::Enum {
            underlying: None,
            members: vec![EnumMember::implicit("Active", 0)],
        });

        assert!(unit.is_enum());
        assert!(unit.fields().is_empty());
        assert!(unit.inherits().is_none());
        assert_eq!(unit.enum_members().len(), 1);
    }

    #[test]
    fn test_field_builders() {
        let field = Field::new("Parts", FieldType::Unresolved("Part".into()))
            .array()
            .optional();

        assert!(field.is_array);
        assert!(field.is_optional);
        assert!(!field.is_user_defined());
        assert!(!field.is_placeholder());
    }

    #[test]
    fn test_serialize_skips_raw_lines() {
        let unit = Unit::record("Part", "Parts").with_lines(vec!["class Part".into()]);
        let json = serde_json::to_value(&unit).unwrap();

        assert_eq!(json["name"], "Part");
        assert_eq!(json["kind"]["type"], "record");
        assert!(json.get("lines").is_none());
    }
}
