//! Core operations.
//!
//! This module contains the business logic for vkgen commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod clean;
pub mod generate;

pub use check::check;
pub use clean::clean;
pub use generate::generate;

use eyre::{Result, eyre};
use vkgen_codegen::pipeline::CompilationContext;

use crate::reports::ModelSummary;

/// Count what a finished pipeline run produced.
fn summarize(ctx: &CompilationContext) -> Result<ModelSummary> {
    let model = ctx
        .model
        .as_ref()
        .ok_or_else(|| eyre!("descriptor model not built"))?;
    let computed = ctx
        .computed
        .as_ref()
        .ok_or_else(|| eyre!("computed data missing"))?;

    Ok(ModelSummary {
        classes: model.classes.len(),
        enums: model.enums.len(),
        aliases: model.aliases.len(),
        methods: model.methods.len(),
        scopes: computed.method_scopes.len(),
        boxed_fields: computed.boxed_fields.len(),
        undefined_types: computed.undefined_types,
    })
}
