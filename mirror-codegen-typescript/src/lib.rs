//! TypeScript declaration generator for tsmirror.
//!
//! Each linked unit becomes one `.ts` file: records are emitted as
//! `export interface` declarations with their imports, enums as
//! `export enum` declarations.
//!
//! # Usage
//!
//! ```ignore
//! use tsmirror_codegen::{LanguageCodegen, pipeline::Pipeline};
//! use tsmirror_codegen_typescript::Generator;
//!
//! let sources = tsmirror_source::discover(Path::new("Models"))?;
//! let mut ctx = Pipeline::new().run(sources)?;
//! let generator = Generator::new(ctx.take_units()).with_banner(true);
//!
//! // Preview files without writing
//! let files = generator.preview();
//!
//! // Generate files to disk
//! generator.generate(Path::new("models"))?;
//! ```

mod code_file;
mod generator;
mod renderer;
mod type_mapper;

pub mod ast;

pub use code_file::CodeFile;
pub use generator::{FILE_EXTENSION, Generator};
pub use renderer::{BANNER, RenderOptions, output_path, render_unit};
pub use type_mapper::TypeScriptTypeMapper;
