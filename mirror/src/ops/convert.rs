//! Convert operation - C# models to TypeScript files.

use std::path::Path;

use eyre::{Context, Result};
use tsmirror_codegen::{LanguageCodegen, pipeline::Pipeline};
use tsmirror_codegen_typescript::Generator;
use tsmirror_core::clear_dir;

use crate::reports::{ConvertReport, ConvertResult, WrittenResult};

/// Options for the convert operation.
pub struct ConvertOptions<'a> {
    /// Directory scanned for `.cs` files.
    pub input_dir: &'a Path,
    /// Directory receiving the generated files.
    pub output_dir: &'a Path,
    /// Whether to prepend the banner comment.
    pub banner: bool,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// Whether to empty the output directory before writing.
    pub clean: bool,
}

/// Execute the convert operation.
///
/// Every unit is parsed and linked before anything touches the output
/// directory, so a parse error leaves it unchanged.
pub fn convert(opts: ConvertOptions) -> Result<ConvertReport> {
    if !opts.input_dir.exists() {
        tracing::warn!(path = %opts.input_dir.display(), "input directory missing, creating it");
        std::fs::create_dir_all(opts.input_dir).wrap_err_with(|| {
            format!("Failed to create input directory {}", opts.input_dir.display())
        })?;
    }

    let sources = tsmirror_source::discover(opts.input_dir).map_err(|e| eyre::Report::new(*e))?;
    let mut ctx = Pipeline::new().run(sources)?;

    let warnings = ctx
        .warnings()
        .map(|d| match &d.location {
            Some(loc) => format!("{}\n  --> {}", d.message, loc),
            None => d.message.clone(),
        })
        .collect();
    let unit_count = ctx.units.len();
    let generator = Generator::new(ctx.take_units()).with_banner(opts.banner);

    let result = if opts.dry_run {
        ConvertResult::Preview(generator.preview())
    } else {
        let cleaned = opts.clean && !contains(opts.output_dir, opts.input_dir);
        if cleaned {
            tracing::info!(path = %opts.output_dir.display(), "clearing output directory");
            clear_dir(opts.output_dir)?;
        }

        let written = generator
            .generate(opts.output_dir)
            .wrap_err("Failed to write TypeScript files")?;

        ConvertResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            files: written
                .written
                .iter()
                .map(|path| {
                    path.strip_prefix(opts.output_dir)
                        .unwrap_or(path)
                        .to_path_buf()
                })
                .collect(),
            cleaned,
        })
    };

    Ok(ConvertReport {
        input_dir: opts.input_dir.to_path_buf(),
        unit_count,
        warnings,
        result,
    })
}

/// True if `inner` is `dir` itself or lies below it.
fn contains(dir: &Path, inner: &Path) -> bool {
    match (dir.canonicalize(), inner.canonicalize()) {
        (Ok(dir), Ok(inner)) => inner.starts_with(dir),
        _ => false,
    }
}
