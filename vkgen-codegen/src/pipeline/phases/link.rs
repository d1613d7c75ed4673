//! Link phase - checks references against the name table.

use std::collections::HashSet;

use eyre::{Result, bail};
use indexmap::IndexMap;
use vkgen_ir::{ApiModel, NameTable, TypeReference};

use crate::pipeline::{CompilationContext, Diagnostic, Phase};

const PHASE: &str = "link";

/// Phase that resolves named references once every declaration is known.
///
/// References to unknown names, and aliases that only lead back to
/// themselves, degrade to an undefined type.
pub struct LinkPhase;

impl Phase for LinkPhase {
    fn name(&self) -> &'static str {
        "link"
    }

    fn description(&self) -> &'static str {
        "Check references against the name table"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let CompilationContext {
            model, diagnostics, ..
        } = ctx;
        let Some(model) = model.as_mut() else {
            bail!("descriptor model not built - did the lower phase run?");
        };

        break_alias_cycles(model, diagnostics);
        degrade_unknown_references(model, diagnostics);
        Ok(())
    }
}

fn break_alias_cycles(model: &mut ApiModel, diagnostics: &mut Vec<Diagnostic>) {
    let mut cyclic = Vec::new();
    for alias in &model.aliases {
        let mut visited = HashSet::from([alias.name()]);
        let mut current = &alias.target;
        while let TypeReference::Reference(name) = current {
            if !visited.insert(name.as_str()) {
                cyclic.push(alias.name().to_string());
                break;
            }
            match model.aliases.iter().find(|a| a.name() == name.as_str()) {
                Some(next) => current = &next.target,
                None => break,
            }
        }
    }

    for alias in model
        .aliases
        .iter_mut()
        .filter(|a| cyclic.iter().any(|c| c.as_str() == a.name()))
    {
        diagnostics.push(
            Diagnostic::warning(
                PHASE,
                format!("alias '{}' never resolves to a concrete type", alias.name()),
            )
            .at(format!("{}.{}", alias.category.as_str(), alias.name())),
        );
        alias.target = TypeReference::undefined();
    }
}

fn degrade_unknown_references(model: &mut ApiModel, diagnostics: &mut Vec<Diagnostic>) {
    let (table, _) = NameTable::from_model(model);
    let mut unresolved: IndexMap<String, Vec<String>> = IndexMap::new();

    for (location, ty) in model.type_references_mut() {
        degrade(ty, &table, &location, &mut unresolved);
    }

    for (name, locations) in unresolved {
        let message = match locations.len() {
            1 => format!("unresolved reference '{}'", name),
            n => format!("unresolved reference '{}' ({} uses)", name, n),
        };
        diagnostics.push(Diagnostic::warning(PHASE, message).at(locations[0].clone()));
    }
}

fn degrade(
    ty: &mut TypeReference,
    table: &NameTable,
    location: &str,
    unresolved: &mut IndexMap<String, Vec<String>>,
) {
    match ty {
        TypeReference::ArrayOf(inner) => degrade(inner, table, location, unresolved),
        TypeReference::Reference(name) => {
            if table.contains(name) {
                return;
            }
            unresolved
                .entry(std::mem::take(name))
                .or_default()
                .push(location.to_string());
            *ty = TypeReference::undefined();
        }
        _ => {}
    }
}
