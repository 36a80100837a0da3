//! TypeScript interface builder.

use tsmirror_codegen::builder::{CodeFragment, Renderable};

/// A field in a TypeScript interface.
#[derive(Debug, Clone)]
pub struct InterfaceField {
    pub name: String,
    pub ty: String,
    pub optional: bool,
    pub array: bool,
}

impl InterfaceField {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            optional: false,
            array: false,
        }
    }

    fn to_line(&self) -> String {
        let optional = if self.optional { "?" } else { "" };
        let array = if self.array { "[]" } else { "" };
        format!("{}{}: {}{};", self.name, optional, self.ty, array)
    }
}

/// Builder for exported TypeScript interfaces.
///
/// The body is always rendered as a block, so an interface without fields
/// still spans an opening and a closing line.
#[derive(Debug, Clone)]
pub struct Interface {
    name: String,
    extends: Option<String>,
    fields: Vec<InterfaceField>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extends: None,
            fields: Vec::new(),
        }
    }

    /// Extend a parent interface.
    pub fn extends(mut self, parent: impl Into<String>) -> Self {
        self.extends = Some(parent.into());
        self
    }

    /// Add a field.
    pub fn field(mut self, field: InterfaceField) -> Self {
        self.fields.push(field);
        self
    }

    fn header(&self) -> String {
        match &self.extends {
            Some(parent) => format!("export interface {} extends {} {{", self.name, parent),
            None => format!("export interface {} {{", self.name),
        }
    }
}

impl Renderable for Interface {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::block(
            self.header(),
            self.fields
                .iter()
                .map(|field| CodeFragment::line(field.to_line()))
                .collect(),
            "}",
        )]
    }
}
