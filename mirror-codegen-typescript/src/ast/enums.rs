//! TypeScript enum builder.

use tsmirror_codegen::builder::{CodeFragment, Renderable};

/// A member of a TypeScript enum.
#[derive(Debug, Clone)]
pub struct EnumMember {
    pub name: String,
    /// Explicit initializer; `None` renders the bare name.
    pub value: Option<i32>,
}

impl EnumMember {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    pub fn value(mut self, value: i32) -> Self {
        self.value = Some(value);
        self
    }

    fn to_line(&self) -> String {
        match self.value {
            Some(value) => format!("{} = {},", self.name, value),
            None => format!("{},", self.name),
        }
    }
}

/// Builder for exported TypeScript enums.
#[derive(Debug, Clone)]
pub struct TsEnum {
    name: String,
    members: Vec<EnumMember>,
}

impl TsEnum {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    pub fn member(mut self, member: EnumMember) -> Self {
        self.members.push(member);
        self
    }
}

impl Renderable for TsEnum {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::block(
            format!("export enum {} {{", self.name),
            self.members
                .iter()
                .map(|member| CodeFragment::line(member.to_line()))
                .collect(),
            "}",
        )]
    }
}

#[cfg(test)]
mod tests {
    use tsmirror_codegen::builder::CodeBuilder;

    use super::*;

    #[test]
    fn test_enum_members() {
        let e = TsEnum::new("Status")
            .member(EnumMember::new("active"))
            .member(EnumMember::new("inactive").value(3))
            .member(EnumMember::new("flagged").value(-1));

        let mut builder = CodeBuilder::default();
        builder.emit(&e);

        assert_eq!(
            builder.build(),
            "export enum Status {\n    active,\n    inactive = 3,\n    flagged = -1,\n}\n"
        );
    }

    #[test]
    fn test_empty_enum() {
        let mut builder = CodeBuilder::default();
        builder.emit(&TsEnum::new("Nothing"));
        assert_eq!(builder.build(), "export enum Nothing {\n}\n");
    }
}
