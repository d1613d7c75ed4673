//! The complete descriptor model and its name table.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::Serialize;

use crate::{
    AliasDescriptor, Category, ClassDescriptor, EnumDescriptor, MethodDescriptor, NamingTitle,
    TypeReference,
};

/// Every descriptor built from one schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ApiModel {
    pub classes: Vec<ClassDescriptor>,
    pub enums: Vec<EnumDescriptor>,
    pub aliases: Vec<AliasDescriptor>,
    pub methods: Vec<MethodDescriptor>,
}

impl ApiModel {
    /// Find a class by wire name.
    pub fn class(&self, name: &str) -> Option<&ClassDescriptor> {
        self.classes.iter().find(|c| c.name() == name)
    }

    /// Methods grouped by scope, scopes sorted, methods in declaration order.
    pub fn methods_by_scope(&self) -> BTreeMap<&str, Vec<&MethodDescriptor>> {
        let mut scopes: BTreeMap<&str, Vec<&MethodDescriptor>> = BTreeMap::new();
        for method in &self.methods {
            scopes.entry(method.scope.as_str()).or_default().push(method);
        }
        scopes
    }

    /// Every top-level type reference with its schema location, in model
    /// order: class properties, alias targets, then method parameters and
    /// responses.
    pub fn type_references(&self) -> Vec<(String, &TypeReference)> {
        let properties = self.classes.iter().flat_map(|c| {
            c.properties.iter().map(move |p| {
                (
                    format!("{}.{}.{}", c.category.as_str(), c.name(), p.name),
                    &p.ty,
                )
            })
        });
        let aliases = self
            .aliases
            .iter()
            .map(|a| (format!("{}.{}", a.category.as_str(), a.name()), &a.target));
        let methods = self.methods.iter().flat_map(|m| {
            m.parameters
                .iter()
                .map(move |p| (format!("methods.{}.{}", m.title, p.title), &p.ty))
                .chain(std::iter::once((
                    format!("methods.{}.response", m.title),
                    &m.response_type,
                )))
        });
        properties.chain(aliases).chain(methods).collect()
    }

    /// Mutable counterpart of [`ApiModel::type_references`].
    pub fn type_references_mut(&mut self) -> Vec<(String, &mut TypeReference)> {
        let properties = self.classes.iter_mut().flat_map(|c| {
            let owner = format!("{}.{}", c.category.as_str(), c.title);
            c.properties
                .iter_mut()
                .map(move |p| (format!("{}.{}", owner, p.name), &mut p.ty))
        });
        let aliases = self.aliases.iter_mut().map(|a| {
            (
                format!("{}.{}", a.category.as_str(), a.title),
                &mut a.target,
            )
        });
        let methods = self.methods.iter_mut().flat_map(|m| {
            let owner = format!("methods.{}", m.title);
            let response = (format!("{}.response", owner), &mut m.response_type);
            m.parameters
                .iter_mut()
                .map(move |p| (format!("{}.{}", owner, p.title), &mut p.ty))
                .chain(std::iter::once(response))
        });
        properties.chain(aliases).chain(methods).collect()
    }
}

/// What kind of declaration a name refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    Class,
    Enum,
    Alias,
}

/// A name table entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeEntry {
    pub kind: TypeKind,
    pub category: Category,
    pub scope: String,
    pub title: NamingTitle,
}

/// Wire name to declaration lookup, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NameTable {
    entries: IndexMap<String, TypeEntry>,
}

impl NameTable {
    /// Build the table from a model.
    ///
    /// The first declaration of a name wins; the names of later duplicates
    /// are returned so the caller can report them.
    pub fn from_model(model: &ApiModel) -> (Self, Vec<String>) {
        let mut table = Self::default();
        let mut duplicates = Vec::new();

        let classes = model.classes.iter().map(|c| {
            (TypeKind::Class, c.category, &c.scope, &c.title)
        });
        let enums = model
            .enums
            .iter()
            .map(|e| (TypeKind::Enum, e.category, &e.scope, &e.title));
        let aliases = model
            .aliases
            .iter()
            .map(|a| (TypeKind::Alias, a.category, &a.scope, &a.title));

        for (kind, category, scope, title) in classes.chain(enums).chain(aliases) {
            let entry = TypeEntry {
                kind,
                category,
                scope: scope.clone(),
                title: title.clone(),
            };
            if !table.insert(entry) {
                duplicates.push(title.wire().to_string());
            }
        }

        (table, duplicates)
    }

    /// Insert an entry; returns false if the name is already taken.
    pub fn insert(&mut self, entry: TypeEntry) -> bool {
        let name = entry.title.wire().to_string();
        if self.entries.contains_key(&name) {
            return false;
        }
        self.entries.insert(name, entry);
        true
    }

    pub fn get(&self, name: &str) -> Option<&TypeEntry> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TypeEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EnumRepr, ScalarKind, TypeReference};

    fn method(wire: &str, scope: &str) -> MethodDescriptor {
        let local = wire.split_once('.').map_or(wire, |(_, l)| l);
        MethodDescriptor {
            title: NamingTitle::new(wire),
            name: NamingTitle::new(local),
            scope: scope.to_string(),
            response_type: TypeReference::scalar(ScalarKind::Int),
            parameters: Vec::new(),
            description: None,
        }
    }

    #[test]
    fn test_methods_by_scope() {
        let model = ApiModel {
            methods: vec![
                method("users.get", "users"),
                method("friends.get", "friends"),
                method("friends.add", "friends"),
            ],
            ..Default::default()
        };

        let scopes = model.methods_by_scope();
        let keys: Vec<_> = scopes.keys().copied().collect();
        assert_eq!(keys, ["friends", "users"]);

        let friends: Vec<_> = scopes["friends"].iter().map(|m| m.title.wire()).collect();
        assert_eq!(friends, ["friends.get", "friends.add"]);
    }

    #[test]
    fn test_type_references_locations() {
        let mut model = ApiModel {
            classes: vec![
                ClassDescriptor::new("users_user", "users", Category::Objects).property(
                    crate::PropertyDescriptor::new("online", TypeReference::scalar(ScalarKind::Bool)),
                ),
            ],
            methods: vec![method("users.get", "users")],
            ..Default::default()
        };

        let locations: Vec<_> = model.type_references().into_iter().map(|(l, _)| l).collect();
        assert_eq!(
            locations,
            ["objects.users_user.online", "methods.users.get.response"]
        );

        for (_, ty) in model.type_references_mut() {
            *ty = TypeReference::undefined();
        }
        assert!(model.classes[0].properties[0].ty.is_undefined());
        assert!(model.methods[0].response_type.is_undefined());
    }

    #[test]
    fn test_name_table_first_declaration_wins() {
        let model = ApiModel {
            classes: vec![ClassDescriptor::new("ok_response", "ok", Category::Objects)],
            enums: vec![EnumDescriptor::new(
                "ok_response",
                "ok",
                Category::Responses,
                EnumRepr::String,
            )],
            ..Default::default()
        };

        let (table, duplicates) = NameTable::from_model(&model);

        assert_eq!(table.len(), 1);
        assert_eq!(table.get("ok_response").unwrap().kind, TypeKind::Class);
        assert_eq!(duplicates, ["ok_response"]);
    }
}
