//! Check command report data structures.

use vkgen_codegen::pipeline::Diagnostic;

use super::{
    diagnostics,
    output::{Output, Report},
    summary::ModelSummary,
};

/// Report data from a pipeline run without generation.
#[derive(Debug)]
pub struct CheckReport {
    pub diagnostics: Vec<Diagnostic>,
    pub summary: ModelSummary,
}

impl CheckReport {
    /// Whether the check passed (no error diagnostics).
    pub fn is_valid(&self) -> bool {
        self.error_count() == 0
    }

    fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_error())
            .count()
    }

    fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_warning())
            .count()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        diagnostics::render(&self.diagnostics, out);
        if !self.diagnostics.is_empty() {
            out.newline();
        }

        self.summary.render(out);
        out.newline();

        let (errors, warnings) = (self.error_count(), self.warning_count());
        if self.is_valid() {
            out.preformatted(&format!("✓ schema is valid ({} warnings)", warnings));
        } else {
            out.preformatted(&format!(
                "✗ {} errors, {} warnings",
                errors, warnings
            ));
        }
    }
}
