//! Lint summarizing type references that stayed undefined.

use vkgen_ir::{ApiModel, TypeReference};

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that reports how many type references degraded to free-form JSON.
///
/// Each degradation already has its own warning; this adds a single summary.
pub struct UndefinedTypeLint;

impl Lint for UndefinedTypeLint {
    fn name(&self) -> &'static str {
        "undefined-type"
    }

    fn description(&self) -> &'static str {
        "Summarize type references emitted as free-form JSON"
    }

    fn check(&self, model: &ApiModel, diagnostics: &mut Vec<Diagnostic>) {
        let locations: Vec<String> = model
            .type_references()
            .into_iter()
            .filter(|(_, ty)| is_undefined(ty))
            .map(|(location, _)| location)
            .collect();

        if locations.is_empty() {
            return;
        }

        let mut message = format!(
            "{} type reference(s) could not be classified and are emitted as free-form JSON",
            locations.len()
        );
        const SHOWN: usize = 5;
        message.push_str(": ");
        message.push_str(&locations[..locations.len().min(SHOWN)].join(", "));
        if locations.len() > SHOWN {
            message.push_str(", ...");
        }
        diagnostics.push(Diagnostic::info("validate", message));
    }
}

fn is_undefined(ty: &TypeReference) -> bool {
    match ty {
        TypeReference::Undefined(_) => true,
        TypeReference::ArrayOf(inner) => is_undefined(inner),
        _ => false,
    }
}
