//! Data computed once from the finalized model and shared by emitters.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use serde::Serialize;
use vkgen_ir::{ApiModel, NameTable, TypeReference};

/// A class property that must be stored behind a `Box`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct BoxedField {
    /// Wire name of the owning class.
    pub class: String,
    /// Wire name of the property.
    pub property: String,
}

/// Pre-computed analysis of an [`ApiModel`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct ComputedData {
    /// Every named type, first declaration wins.
    pub names: NameTable,
    /// Properties closing a direct (non-array) reference cycle between classes.
    pub boxed_fields: BTreeSet<BoxedField>,
    /// Method wire names per scope, scopes sorted.
    pub method_scopes: BTreeMap<String, Vec<String>>,
    /// Type references left undefined after linking.
    pub undefined_types: usize,
}

impl ComputedData {
    pub fn from_model(model: &ApiModel) -> Self {
        let (names, _) = NameTable::from_model(model);

        let method_scopes = model
            .methods_by_scope()
            .into_iter()
            .map(|(scope, methods)| {
                let wires = methods.iter().map(|m| m.title.wire().to_string()).collect();
                (scope.to_string(), wires)
            })
            .collect();

        let undefined_types = model
            .type_references()
            .into_iter()
            .filter(|(_, ty)| contains_undefined(ty))
            .count();

        Self {
            names,
            boxed_fields: boxed_fields(model),
            method_scopes,
            undefined_types,
        }
    }

    /// Whether `property` of `class` must be boxed.
    pub fn is_boxed(&self, class: &str, property: &str) -> bool {
        self.boxed_fields.contains(&BoxedField {
            class: class.to_string(),
            property: property.to_string(),
        })
    }
}

fn contains_undefined(ty: &TypeReference) -> bool {
    match ty {
        TypeReference::Undefined(_) => true,
        TypeReference::ArrayOf(inner) => contains_undefined(inner),
        _ => false,
    }
}

/// Find class properties that would make a struct infinitely sized.
///
/// An edge `class -> target` exists for every property whose type is the
/// target class directly or through aliases. Arrays add indirection and
/// do not count. An edge is boxed when its target can reach its owner.
fn boxed_fields(model: &ApiModel) -> BTreeSet<BoxedField> {
    let classes: HashSet<&str> = model.classes.iter().map(|c| c.name()).collect();
    let aliases: HashMap<&str, &TypeReference> = model
        .aliases
        .iter()
        .map(|a| (a.name(), &a.target))
        .collect();

    let mut edges: Vec<(&str, &str, &str)> = Vec::new();
    let mut adjacency: HashMap<&str, Vec<&str>> = HashMap::new();
    for class in &model.classes {
        for property in &class.properties {
            if let Some(target) = direct_class(&property.ty, &classes, &aliases) {
                edges.push((class.name(), property.name.wire(), target));
                adjacency.entry(class.name()).or_default().push(target);
            }
        }
    }

    edges
        .into_iter()
        .filter(|(owner, _, target)| reaches(target, owner, &adjacency))
        .map(|(owner, property, _)| BoxedField {
            class: owner.to_string(),
            property: property.to_string(),
        })
        .collect()
}

/// The class `ty` names, looking through aliases.
fn direct_class<'a>(
    ty: &'a TypeReference,
    classes: &HashSet<&str>,
    aliases: &HashMap<&'a str, &'a TypeReference>,
) -> Option<&'a str> {
    let mut current = ty;
    let mut visited = HashSet::new();
    loop {
        let TypeReference::Reference(name) = current else {
            return None;
        };
        if classes.contains(name.as_str()) {
            return Some(name.as_str());
        }
        if !visited.insert(name.as_str()) {
            return None;
        }
        current = aliases.get(name.as_str()).copied()?;
    }
}

fn reaches(from: &str, to: &str, adjacency: &HashMap<&str, Vec<&str>>) -> bool {
    let mut stack = vec![from];
    let mut visited = HashSet::new();
    while let Some(node) = stack.pop() {
        if node == to {
            return true;
        }
        if visited.insert(node) {
            if let Some(next) = adjacency.get(node) {
                stack.extend(next.iter().copied());
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use vkgen_ir::{AliasDescriptor, Category, ClassDescriptor, NamingTitle, PropertyDescriptor};

    use super::*;

    fn reference(name: &str) -> TypeReference {
        TypeReference::Reference(name.to_string())
    }

    #[test]
    fn test_self_reference_is_boxed() {
        let model = ApiModel {
            classes: vec![
                ClassDescriptor::new("wall_wallpost", "wall", Category::Objects)
                    .property(PropertyDescriptor::new(
                        "copy_history",
                        TypeReference::array(reference("wall_wallpost")),
                    ))
                    .property(PropertyDescriptor::new("reply_post", reference("wall_wallpost"))),
            ],
            ..Default::default()
        };

        let computed = ComputedData::from_model(&model);
        assert!(computed.is_boxed("wall_wallpost", "reply_post"));
        assert!(!computed.is_boxed("wall_wallpost", "copy_history"));
    }

    #[test]
    fn test_mutual_reference_through_alias() {
        let model = ApiModel {
            classes: vec![
                ClassDescriptor::new("a", "a", Category::Objects)
                    .property(PropertyDescriptor::new("b", reference("b_alias"))),
                ClassDescriptor::new("b", "b", Category::Objects)
                    .property(PropertyDescriptor::new("a", reference("a")))
                    .property(PropertyDescriptor::new("leaf", reference("c"))),
                ClassDescriptor::new("c", "c", Category::Objects),
            ],
            aliases: vec![AliasDescriptor {
                title: NamingTitle::new("b_alias"),
                scope: "b".into(),
                category: Category::Objects,
                description: None,
                target: reference("b"),
            }],
            ..Default::default()
        };

        let computed = ComputedData::from_model(&model);
        let boxed: Vec<_> = computed
            .boxed_fields
            .iter()
            .map(|f| (f.class.as_str(), f.property.as_str()))
            .collect();
        assert_eq!(boxed, [("a", "b"), ("b", "a")]);
    }

    #[test]
    fn test_counts_undefined_and_scopes() {
        let model = ApiModel {
            classes: vec![
                ClassDescriptor::new("x", "x", Category::Objects)
                    .property(PropertyDescriptor::new(
                        "raw",
                        TypeReference::array(TypeReference::undefined()),
                    )),
            ],
            ..Default::default()
        };

        let computed = ComputedData::from_model(&model);
        assert_eq!(computed.undefined_types, 1);
        assert!(computed.method_scopes.is_empty());
        assert!(computed.names.contains("x"));
    }
}
