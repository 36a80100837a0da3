//! C# declaration scanning and parsing for tsmirror.
//!
//! This crate turns the raw lines of one `.cs` file into a [`Unit`]. It is a
//! line-oriented heuristic classifier, not a C# grammar: one declared type per
//! file, opening braces on their own line.
//!
//! # Example
//!
//! ```
//! use tsmirror_source::{SourceUnit, parse_unit};
//!
//! let source = SourceUnit::from_text(
//!     "Status",
//!     "",
//!     "enum Status\n{\n    Active,\n    Inactive = 3,\n}\n",
//! );
//! let unit = parse_unit(&source).unwrap();
//!
//! assert!(unit.is_enum());
//! assert_eq!(unit.enum_members()[1].value, 3);
//! ```
//!
//! [`Unit`]: tsmirror_ir::Unit

mod discover;
mod error;
mod parser;
pub mod scanner;
pub mod types;

pub use discover::{SOURCE_EXTENSION, SourceUnit, discover};
pub use error::{Error, Result, SourceContext};
pub use parser::{parse_all, parse_unit};
