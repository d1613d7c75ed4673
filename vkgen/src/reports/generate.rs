//! Generate command report data structures.

use std::path::PathBuf;

use vkgen_codegen::pipeline::Diagnostic;
use vkgen_codegen_rust::PreviewFile;

use super::{
    diagnostics,
    output::{Output, Report},
    summary::ModelSummary,
};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Everything the pipeline reported, in order.
    pub diagnostics: Vec<Diagnostic>,
    pub summary: ModelSummary,
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// The output directory was replaced.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

#[derive(Debug)]
pub struct WrittenResult {
    pub output_dir: PathBuf,
    /// Number of files written.
    pub files: usize,
    /// Path to debug snapshots, if visualization was enabled.
    pub debug_dir: Option<PathBuf>,
}

#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        if let Some(debug_dir) = &written.debug_dir {
            out.key_value(
                "Pipeline snapshots written to",
                &debug_dir.display().to_string(),
            );
            out.newline();
        }

        diagnostics::render(&self.diagnostics, out);
        if !self.diagnostics.is_empty() {
            out.newline();
        }

        self.summary.render(out);
        out.newline();
        out.key_value(
            "Generated",
            &format!("{} files in {}", written.files, written.output_dir.display()),
        );
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        diagnostics::render(&self.diagnostics, out);
        out.preformatted(&format!("{} files would be generated", preview.files.len()));
    }
}
