//! Convert command report data structures.

use std::path::PathBuf;

use tsmirror_codegen::GeneratedFile;

use super::output::{Output, Report};

/// Report data from a conversion run.
#[derive(Debug)]
pub struct ConvertReport {
    /// Directory the models were read from.
    pub input_dir: PathBuf,

    /// Number of units parsed.
    pub unit_count: usize,

    /// Warning messages from the pipeline.
    pub warnings: Vec<String>,

    /// Files written, or the preview.
    pub result: ConvertResult,
}

/// Result of the generation step.
#[derive(Debug)]
pub enum ConvertResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(Vec<GeneratedFile>),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Output directory.
    pub output_dir: PathBuf,
    /// Written files, relative to the output directory.
    pub files: Vec<PathBuf>,
    /// Whether the output directory was emptied first.
    pub cleaned: bool,
}

impl Report for ConvertReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            ConvertResult::Written(written) => self.render_written(out, written),
            ConvertResult::Preview(files) => self.render_preview(out, files),
        }
    }
}

impl ConvertReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.key_value("Input", &self.input_dir.display().to_string());
        out.key_value("Output", &written.output_dir.display().to_string());
        out.newline();

        out.section(&format!("Generated ({})", written.files.len()));
        for file in &written.files {
            out.added_item(&file.display().to_string());
        }

        if written.cleaned {
            out.newline();
            out.preformatted("Previous contents of the output directory were removed.");
        }
    }

    fn render_preview(&self, out: &mut dyn Output, files: &[GeneratedFile]) {
        for file in files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!(
            "{} units, {} files would be generated",
            self.unit_count,
            files.len()
        ));
    }
}
