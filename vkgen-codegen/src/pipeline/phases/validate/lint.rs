//! Lint trait for model validation.

use vkgen_ir::ApiModel;

use crate::pipeline::Diagnostic;

/// Name and description of a lint.
#[derive(Debug, Clone)]
pub struct LintInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// A check over the finished descriptor model.
pub trait Lint: Send + Sync {
    /// The name of this lint (kebab-case).
    fn name(&self) -> &'static str;

    /// A human-readable description of what this lint checks.
    fn description(&self) -> &'static str;

    /// Check the model and add any diagnostics.
    fn check(&self, model: &ApiModel, diagnostics: &mut Vec<Diagnostic>);

    fn info(&self) -> LintInfo {
        LintInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}
