//! Inheritance flattening.
//!
//! After [`flatten`] every surviving class carries its complete property
//! set: inherited properties first (most-base ancestor first), then its own.
//! A property declared again further down the hierarchy replaces the
//! inherited one, so the most-derived declaration wins.

use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;
use vkgen_ir::{ClassDescriptor, PropertyDescriptor};

use crate::pipeline::Diagnostic;

const PHASE: &str = "flatten";

/// Flatten every class in place.
///
/// Classes whose ancestry contains a cycle are removed with an error
/// diagnostic. Unknown base names are reported and skipped. Already
/// flattened classes are left untouched, so running this twice is a no-op.
pub fn flatten(classes: &mut Vec<ClassDescriptor>, diagnostics: &mut Vec<Diagnostic>) {
    reject_cycles(classes, diagnostics);

    let own: HashMap<String, (Vec<String>, Vec<PropertyDescriptor>)> = classes
        .iter()
        .map(|c| {
            (
                c.name().to_string(),
                (c.base_class_names.clone(), c.properties.clone()),
            )
        })
        .collect();

    for class in classes.iter_mut().filter(|c| !c.is_flattened) {
        let mut merged: IndexMap<String, PropertyDescriptor> = IndexMap::new();

        for ancestor in ancestors(class, &own, diagnostics) {
            for property in &own[ancestor].1 {
                // insert() keeps the position of an existing key
                merged.insert(property.name.wire().to_string(), property.clone());
            }
        }

        for property in class.properties.drain(..) {
            let wire = property.name.wire().to_string();
            merged.shift_remove(&wire);
            merged.insert(wire, property);
        }

        class.properties = merged.into_values().collect();
        class.is_flattened = true;
    }
}

/// Ancestors of `class`, most-base level first, each listed once.
///
/// Only the class's own unknown bases are reported; deeper ones are
/// reported when their owner is flattened.
fn ancestors<'a>(
    class: &ClassDescriptor,
    own: &'a HashMap<String, (Vec<String>, Vec<PropertyDescriptor>)>,
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<&'a str> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut levels: Vec<Vec<&'a str>> = Vec::new();
    let mut frontier: Vec<String> = class.base_class_names.clone();
    let mut direct = true;

    while !frontier.is_empty() {
        let mut level = Vec::new();
        let mut next = Vec::new();
        for name in &frontier {
            let Some((key, (bases, _))) = own.get_key_value(name.as_str()) else {
                if direct {
                    diagnostics.push(
                        Diagnostic::warning(
                            PHASE,
                            format!("unknown base class '{}' of '{}'", name, class.name()),
                        )
                        .at(format!("{}.{}", class.category.as_str(), class.name())),
                    );
                }
                continue;
            };
            if seen.insert(key.as_str()) {
                level.push(key.as_str());
                next.extend(bases.iter().cloned());
            }
        }
        levels.push(level);
        frontier = next;
        direct = false;
    }

    levels.into_iter().rev().flatten().collect()
}

/// Remove every class whose ancestor chain revisits a name.
fn reject_cycles(classes: &mut Vec<ClassDescriptor>, diagnostics: &mut Vec<Diagnostic>) {
    let bases: HashMap<&str, &[String]> = classes
        .iter()
        .map(|c| (c.name(), c.base_class_names.as_slice()))
        .collect();

    let mut acyclic: HashSet<&str> = HashSet::new();
    let mut rejected: HashSet<String> = HashSet::new();

    for class in classes.iter() {
        let mut path = Vec::new();
        let Some(cycle) = find_cycle(class.name(), &bases, &mut path, &mut acyclic) else {
            continue;
        };

        let chain = cycle.join(" -> ");
        let message = if cycle.first() == Some(&class.name()) {
            format!("class '{}' inherits from itself: {}", class.name(), chain)
        } else {
            format!(
                "class '{}' extends a cyclic hierarchy: {}",
                class.name(),
                chain
            )
        };
        diagnostics.push(
            Diagnostic::error(PHASE, message)
                .at(format!("{}.{}", class.category.as_str(), class.name())),
        );
        rejected.insert(class.name().to_string());
    }

    if !rejected.is_empty() {
        classes.retain(|c| !rejected.contains(c.name()));
    }
}

/// Depth-first walk with an on-path stack. Returns the cycle, closed by its
/// repeated name, if one is reachable from `name`.
fn find_cycle<'a>(
    name: &'a str,
    bases: &HashMap<&'a str, &'a [String]>,
    path: &mut Vec<&'a str>,
    acyclic: &mut HashSet<&'a str>,
) -> Option<Vec<&'a str>> {
    if acyclic.contains(name) {
        return None;
    }
    if let Some(pos) = path.iter().position(|p| *p == name) {
        let mut cycle = path[pos..].to_vec();
        cycle.push(name);
        return Some(cycle);
    }

    path.push(name);
    for base in bases.get(name).copied().unwrap_or_default() {
        if let Some(cycle) = find_cycle(base, bases, path, acyclic) {
            return Some(cycle);
        }
    }
    path.pop();

    acyclic.insert(name);
    None
}

#[cfg(test)]
mod tests {
    use vkgen_ir::{Category, ScalarKind, TypeReference};

    use super::*;

    fn class(name: &str, bases: &[&str], props: &[(&str, ScalarKind)]) -> ClassDescriptor {
        let mut class = ClassDescriptor::new(name, "test", Category::Objects);
        for base in bases {
            class = class.base(*base);
        }
        for (prop, kind) in props {
            class = class.property(PropertyDescriptor::new(*prop, TypeReference::scalar(*kind)));
        }
        class
    }

    fn names(class: &ClassDescriptor) -> Vec<&str> {
        class.properties.iter().map(|p| p.name.wire()).collect()
    }

    #[test]
    fn test_chain_order_most_base_first() {
        let mut classes = vec![
            class("c", &["b"], &[("c1", ScalarKind::Int)]),
            class("b", &["a"], &[("b1", ScalarKind::Int)]),
            class("a", &[], &[("a1", ScalarKind::Int)]),
        ];
        let mut diags = Vec::new();
        flatten(&mut classes, &mut diags);

        assert!(diags.is_empty());
        assert_eq!(names(&classes[0]), ["a1", "b1", "c1"]);
        assert_eq!(names(&classes[1]), ["a1", "b1"]);
        assert_eq!(names(&classes[2]), ["a1"]);
        assert!(classes.iter().all(|c| c.is_flattened));
    }

    #[test]
    fn test_shadowed_property_most_derived_wins() {
        let mut classes = vec![
            class("b", &[], &[("a1", ScalarKind::Int), ("b1", ScalarKind::Int)]),
            class("c", &["b"], &[("a1", ScalarKind::String)]),
        ];
        let mut diags = Vec::new();
        flatten(&mut classes, &mut diags);

        let c = &classes[1];
        assert_eq!(names(c), ["b1", "a1"]);
        assert_eq!(c.properties[1].ty, TypeReference::scalar(ScalarKind::String));
    }

    #[test]
    fn test_ancestor_shadowing_keeps_position() {
        let mut classes = vec![
            class("a", &[], &[("x", ScalarKind::Int), ("y", ScalarKind::Int)]),
            class("b", &["a"], &[("x", ScalarKind::String)]),
            class("c", &["b"], &[("z", ScalarKind::Int)]),
        ];
        let mut diags = Vec::new();
        flatten(&mut classes, &mut diags);

        let c = &classes[2];
        assert_eq!(names(c), ["x", "y", "z"]);
        assert_eq!(c.properties[0].ty, TypeReference::scalar(ScalarKind::String));
    }

    #[test]
    fn test_diamond_lists_shared_ancestor_once() {
        let mut classes = vec![
            class("root", &[], &[("id", ScalarKind::Int)]),
            class("left", &["root"], &[("l", ScalarKind::Int)]),
            class("right", &["root"], &[("r", ScalarKind::Int)]),
            class("leaf", &["left", "right"], &[("own", ScalarKind::Int)]),
        ];
        let mut diags = Vec::new();
        flatten(&mut classes, &mut diags);

        assert!(diags.is_empty());
        assert_eq!(names(&classes[3]), ["id", "l", "r", "own"]);
    }

    #[test]
    fn test_cycle_rejects_both_classes() {
        let mut classes = vec![
            class("a", &["b"], &[("a1", ScalarKind::Int)]),
            class("b", &["a"], &[("b1", ScalarKind::Int)]),
            class("ok", &[], &[("id", ScalarKind::Int)]),
        ];
        let mut diags = Vec::new();
        flatten(&mut classes, &mut diags);

        assert_eq!(classes.len(), 1);
        assert_eq!(classes[0].name(), "ok");
        assert_eq!(diags.len(), 2);
        assert!(diags.iter().all(|d| d.severity.is_error()));
        assert_eq!(
            diags[0].message,
            "class 'a' inherits from itself: a -> b -> a"
        );
    }

    #[test]
    fn test_class_below_cycle_is_rejected() {
        let mut classes = vec![
            class("a", &["b"], &[]),
            class("b", &["a"], &[]),
            class("c", &["a"], &[]),
        ];
        let mut diags = Vec::new();
        flatten(&mut classes, &mut diags);

        assert!(classes.is_empty());
        assert!(diags[2].message.contains("extends a cyclic hierarchy"));
    }

    #[test]
    fn test_self_inheritance() {
        let mut classes = vec![class("a", &["a"], &[("x", ScalarKind::Int)])];
        let mut diags = Vec::new();
        flatten(&mut classes, &mut diags);

        assert!(classes.is_empty());
        assert_eq!(diags[0].message, "class 'a' inherits from itself: a -> a");
    }

    #[test]
    fn test_unknown_base_is_skipped() {
        let mut classes = vec![class("a", &["missing"], &[("x", ScalarKind::Int)])];
        let mut diags = Vec::new();
        flatten(&mut classes, &mut diags);

        assert_eq!(names(&classes[0]), ["x"]);
        assert_eq!(diags.len(), 1);
        assert!(diags[0].severity.is_warning());
        assert!(diags[0].message.contains("'missing'"));
    }

    #[test]
    fn test_flatten_is_idempotent() {
        let mut classes = vec![
            class("b", &[], &[("b1", ScalarKind::Int)]),
            class("c", &["b"], &[("c1", ScalarKind::Int)]),
        ];
        let mut diags = Vec::new();
        flatten(&mut classes, &mut diags);
        let once = classes.clone();
        flatten(&mut classes, &mut diags);

        assert_eq!(classes, once);
    }
}
