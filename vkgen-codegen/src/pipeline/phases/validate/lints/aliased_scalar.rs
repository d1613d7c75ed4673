//! Lint summarizing legacy type tags rewritten by the alias table.

use indexmap::IndexMap;
use vkgen_ir::{ApiModel, ScalarKind, ScalarType, TypeReference};

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that reports each legacy type tag once, with its use count.
///
/// The alias table maps e.g. `integer` to int and `base_bool_int` to int;
/// this lint makes those rewrites visible so schema and output can be
/// compared.
pub struct AliasedScalarLint;

impl Lint for AliasedScalarLint {
    fn name(&self) -> &'static str {
        "aliased-scalar"
    }

    fn description(&self) -> &'static str {
        "Report legacy type tags read through the alias table"
    }

    fn check(&self, model: &ApiModel, diagnostics: &mut Vec<Diagnostic>) {
        let mut tags: IndexMap<(&str, ScalarKind), usize> = IndexMap::new();
        for (_, ty) in model.type_references() {
            collect(ty, &mut tags);
        }

        for ((tag, kind), count) in tags {
            diagnostics.push(Diagnostic::info(
                "validate",
                format!(
                    "type tag '{}' read as {} ({} use{})",
                    tag,
                    kind.as_str(),
                    count,
                    if count == 1 { "" } else { "s" }
                ),
            ));
        }
    }
}

fn collect<'a>(ty: &'a TypeReference, tags: &mut IndexMap<(&'a str, ScalarKind), usize>) {
    match ty {
        TypeReference::Scalar(ScalarType {
            kind,
            aliased_from: Some(tag),
        }) => *tags.entry((tag.as_str(), *kind)).or_default() += 1,
        TypeReference::ArrayOf(inner) => collect(inner, tags),
        _ => {}
    }
}
