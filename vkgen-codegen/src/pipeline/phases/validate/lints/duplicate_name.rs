//! Lint for wire names that collapse to the same generated identifier.

use std::collections::HashMap;

use vkgen_ir::{ApiModel, Category, NamingTitle};

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns when distinct wire names share a canonical form within
/// one output unit, e.g. `users_userMin` and `users_user_min`.
///
/// Emitters disambiguate such names with a numeric suffix.
pub struct DuplicateNameLint;

impl Lint for DuplicateNameLint {
    fn name(&self) -> &'static str {
        "duplicate-name"
    }

    fn description(&self) -> &'static str {
        "Detect names that collide after case normalization"
    }

    fn check(&self, model: &ApiModel, diagnostics: &mut Vec<Diagnostic>) {
        let mut types: HashMap<(Category, &str, &str), &NamingTitle> = HashMap::new();
        let titles = model
            .classes
            .iter()
            .map(|c| (c.category, c.scope.as_str(), &c.title))
            .chain(model.enums.iter().map(|e| (e.category, e.scope.as_str(), &e.title)))
            .chain(model.aliases.iter().map(|a| (a.category, a.scope.as_str(), &a.title)));

        for (category, scope, title) in titles {
            if let Some(first) = types.insert((category, scope, title.canonical()), title) {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!(
                            "type '{}' collides with '{}' after normalization",
                            title, first
                        ),
                    )
                    .at(format!("{}.{}", category.as_str(), title)),
                );
            }
        }

        let mut methods: HashMap<(&str, &str), &NamingTitle> = HashMap::new();
        for method in &model.methods {
            let key = (method.scope.as_str(), method.name.canonical());
            if let Some(first) = methods.insert(key, &method.title) {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!(
                            "method '{}' collides with '{}' after normalization",
                            method.title, first
                        ),
                    )
                    .at(format!("methods.{}", method.title)),
                );
            }
        }
    }
}
