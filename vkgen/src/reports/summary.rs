//! Model statistics shared by the generate and check reports.

use super::output::Output;

/// Counts taken from a finished pipeline run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ModelSummary {
    pub classes: usize,
    pub enums: usize,
    pub aliases: usize,
    pub methods: usize,
    pub scopes: usize,
    /// Properties stored behind a `Box` to break reference cycles.
    pub boxed_fields: usize,
    /// Type references that degraded to an untyped JSON value.
    pub undefined_types: usize,
}

impl ModelSummary {
    pub(super) fn render(&self, out: &mut dyn Output) {
        out.section("Model");
        out.key_value_indented(
            "Types",
            &format!(
                "{} classes, {} enums, {} aliases",
                self.classes, self.enums, self.aliases
            ),
        );
        out.key_value_indented(
            "Methods",
            &format!("{} in {} scopes", self.methods, self.scopes),
        );
        if self.boxed_fields > 0 {
            out.key_value_indented("Boxed fields", &self.boxed_fields.to_string());
        }
        if self.undefined_types > 0 {
            out.key_value_indented("Untyped references", &self.undefined_types.to_string());
        }
    }
}
