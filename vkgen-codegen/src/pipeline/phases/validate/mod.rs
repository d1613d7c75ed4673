//! Validate phase - runs lints over the descriptor model.

mod lint;
pub mod lints;

use eyre::{Result, bail};
pub use lint::{Lint, LintInfo};
pub use lints::{AliasedScalarLint, DuplicateNameLint, UndefinedTypeLint};

use crate::pipeline::{CompilationContext, Phase};

/// Phase that checks the flattened, linked model with configurable lints.
///
/// Diagnostics from earlier phases never fail this phase; only errors
/// raised by its own lints do.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// Create a validate phase with the built-in lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(DuplicateNameLint),
                Box::new(AliasedScalarLint),
                Box::new(UndefinedTypeLint),
            ],
        }
    }

    /// Create a validate phase with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    pub fn lint_names(&self) -> Vec<&'static str> {
        self.lints.iter().map(|l| l.name()).collect()
    }

    pub fn lint_info(&self) -> Vec<LintInfo> {
        self.lints.iter().map(|l| l.info()).collect()
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Run lints over the descriptor model"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let errors_before = ctx.error_count();
        let CompilationContext {
            model, diagnostics, ..
        } = ctx;
        let Some(model) = model.as_ref() else {
            bail!("descriptor model not built - did the lower phase run?");
        };

        for lint in &self.lints {
            lint.check(model, diagnostics);
        }

        let raised = ctx.error_count() - errors_before;
        if raised > 0 {
            bail!("Validation failed with {} error(s)", raised);
        }

        Ok(())
    }
}
