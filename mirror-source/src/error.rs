use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for tsmirror-source operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Holds the raw text of one declaration file so errors can point at the
/// offending line.
///
/// # Example
///
/// ```ignore
/// let ctx = SourceContext::new(text, "Vehicles/Vehicle.cs");
/// ctx.brace_on_header_error("Vehicle", 5, "public class Vehicle {");
/// ```
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Byte span of the zero-based line `index`, if it exists.
    pub fn line_span(&self, index: usize) -> Option<SourceSpan> {
        let mut offset = 0;
        for (i, line) in self.src.split('\n').enumerate() {
            if i == index {
                return Some(SourceSpan::from((offset, line.len())));
            }
            offset += line.len() + 1;
        }
        None
    }

    /// Create a structural error for a header with its brace on the same line.
    pub fn brace_on_header_error(
        &self,
        unit: impl Into<String>,
        index: usize,
        line: impl Into<String>,
    ) -> Box<Error> {
        Box::new(Error::BraceOnHeader {
            src: self.named_source(),
            span: self.line_span(index),
            unit: unit.into(),
            line: line.into(),
        })
    }

    /// Create an error for an enum value that is not a valid integer literal.
    pub fn invalid_enum_value_error(
        &self,
        unit: impl Into<String>,
        index: usize,
        token: impl Into<String>,
    ) -> Box<Error> {
        Box::new(Error::InvalidEnumValue {
            src: self.named_source(),
            span: self.line_span(index),
            unit: unit.into(),
            token: token.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(tsmirror::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("declaration header in '{unit}' must have its opening brace on the next line: `{line}`")]
    #[diagnostic(
        code(tsmirror::brace_on_header),
        help("move the opening brace of the class or enum onto its own line")
    )]
    BraceOnHeader {
        #[source_code]
        src: NamedSource<String>,
        #[label("brace on the header line")]
        span: Option<SourceSpan>,
        unit: String,
        line: String,
    },

    #[error("invalid enum value '{token}' in '{unit}'")]
    #[diagnostic(
        code(tsmirror::invalid_enum_value),
        help("enum values must be 32-bit decimal integers or 0x-prefixed hexadecimal literals")
    )]
    InvalidEnumValue {
        #[source_code]
        src: NamedSource<String>,
        #[label("not an integer literal")]
        span: Option<SourceSpan>,
        unit: String,
        token: String,
    },
}

impl Error {
    /// Name of the unit the error was raised for, if any.
    pub fn unit(&self) -> Option<&str> {
        match self {
            Error::Io { .. } => None,
            Error::BraceOnHeader { unit, .. } | Error::InvalidEnumValue { unit, .. } => Some(unit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_span() {
        let ctx = SourceContext::new("enum Status\n{\n    Active,\n}", "Status.cs");

        assert_eq!(ctx.line_span(0), Some(SourceSpan::from((0, 11))));
        assert_eq!(ctx.line_span(2), Some(SourceSpan::from((14, 11))));
        assert_eq!(ctx.line_span(9), None);
    }

    #[test]
    fn test_brace_on_header_error() {
        let ctx = SourceContext::new("public class Car {\n}", "Car.cs");
        let err = ctx.brace_on_header_error("Car", 0, "public class Car {");

        assert_eq!(err.unit(), Some("Car"));
        let msg = err.to_string();
        assert!(msg.contains("'Car'"));
        assert!(msg.contains("public class Car {"));
    }

    #[test]
    fn test_invalid_enum_value_error() {
        let ctx = SourceContext::new("enum E\n{\n    A = 0xZZ,\n}", "E.cs");
        let err = ctx.invalid_enum_value_error("E", 2, "0xZZ");

        assert_eq!(err.to_string(), "invalid enum value '0xZZ' in 'E'");
    }
}
