//! TypeScript AST builders for the declarations tsmirror emits.
//!
//! These provide a high-level API for constructing TypeScript syntax,
//! which can then be rendered via CodeBuilder.

mod enums;
mod imports;
mod interface;

pub use enums::{EnumMember, TsEnum};
pub use imports::Import;
pub use interface::{Interface, InterfaceField};
