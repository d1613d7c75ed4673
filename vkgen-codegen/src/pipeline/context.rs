//! Compilation context passed through pipeline phases.

use eyre::{Result, eyre};
use vkgen_ir::ApiModel;
use vkgen_schema::Schema;

use super::diagnostic::{Diagnostic, Severity};
use crate::ComputedData;

/// State carried through every pipeline phase.
///
/// The context exclusively owns the schema and the descriptor model for
/// the duration of a run.
#[derive(Debug)]
pub struct CompilationContext {
    /// The parsed schema being compiled.
    pub schema: Schema,
    /// The descriptor model (populated by the lower phase).
    pub model: Option<ApiModel>,
    /// Pre-computed analysis data (populated by the analyze phase).
    pub computed: Option<ComputedData>,
    /// Diagnostics collected during compilation.
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
            model: None,
            computed: None,
            diagnostics: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn add_error(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::error(phase, message));
    }

    pub fn add_warning(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(phase, message));
    }

    pub fn add_info(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::info(phase, message));
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Error))
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }

    /// Borrow the model, failing if the lower phase has not run.
    pub fn model_mut(&mut self) -> Result<&mut ApiModel> {
        self.model
            .as_mut()
            .ok_or_else(|| eyre!("descriptor model not built - did the lower phase run?"))
    }

    /// Take the model out of the context.
    pub fn take_model(&mut self) -> Result<ApiModel> {
        self.model
            .take()
            .ok_or_else(|| eyre!("descriptor model not built - did the lower phase run?"))
    }

    /// Take the computed data out of the context.
    pub fn take_computed(&mut self) -> Result<ComputedData> {
        self.computed
            .take()
            .ok_or_else(|| eyre!("computed data missing - did the analyze phase run?"))
    }
}
