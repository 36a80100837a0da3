//! Declared-type model for tsmirror.
//!
//! This crate provides the types shared by the parser and the code
//! generators. A [`Unit`] is one declared C# type; it is either a record
//! (class) with [`Field`]s or an enumeration with [`EnumMember`]s.
//!
//! # Architecture
//!
//! ```text
//! *.cs (lines) → tsmirror-source (parse) → tsmirror-ir (units) → link → codegen
//! ```
//!
//! The IR is language-agnostic on the output side: primitive types are kept
//! as [`PrimitiveType`] and mapped to target tokens by each generator.

mod types;
mod unit;

pub use types::PrimitiveType;
pub use unit::{EnumMember, Field, FieldType, Inheritance, Unit, UnitKind};
