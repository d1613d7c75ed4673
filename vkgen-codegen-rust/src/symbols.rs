//! Rust names and locations of every declared type.

use std::{
    collections::{BTreeMap, HashMap},
    path::PathBuf,
};

use indexmap::IndexMap;
use vkgen_core::{NamingConvention, NamingTitle};
use vkgen_ir::{Category, NameTable, TypeEntry, TypeKind};

use crate::naming::UniqueNames;

/// Where a type is declared in the generated tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub kind: TypeKind,
    pub category: Category,
    /// `mod` name of the scope; may be a raw identifier.
    pub scope_module: String,
    /// Directory holding the scope.
    pub scope_dir: String,
    /// `mod` name of the declaring file.
    pub file_module: String,
    pub type_name: String,
}

impl Symbol {
    /// Path of the declaring file, relative to the output directory.
    pub fn file_path(&self) -> PathBuf {
        let stem = self
            .file_module
            .strip_prefix("r#")
            .unwrap_or(&self.file_module);
        PathBuf::from(self.category.as_str())
            .join(&self.scope_dir)
            .join(format!("{}.rs", stem))
    }
}

/// Wire name to [`Symbol`] lookup.
///
/// Type names and file names are unique within a scope; the second
/// `UsersUser` in a scope becomes `UsersUser2` in `users_user_2.rs`.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    module_path: String,
    symbols: IndexMap<String, Symbol>,
}

impl SymbolTable {
    pub fn new(names: &NameTable, naming: &NamingConvention, module_path: impl Into<String>) -> Self {
        let mut namespaces: HashMap<(Category, String), UniqueNames> = HashMap::new();
        let symbols = names
            .iter()
            .map(|(wire, entry)| {
                let symbol = place(entry, naming, &mut namespaces);
                (wire.to_string(), symbol)
            })
            .collect();

        Self {
            module_path: module_path.into(),
            symbols,
        }
    }

    pub fn get(&self, wire: &str) -> Option<&Symbol> {
        self.symbols.get(wire)
    }

    /// Fully qualified Rust path of a type, e.g.
    /// `crate::api::objects::users::UsersUser`.
    pub fn path(&self, wire: &str) -> Option<String> {
        self.get(wire).map(|s| {
            format!(
                "{}::{}::{}::{}",
                self.module_path,
                s.category.as_str(),
                s.scope_module,
                s.type_name
            )
        })
    }

    /// Symbols of one category grouped by scope, scopes sorted by directory.
    pub fn scopes(&self, category: Category) -> BTreeMap<&str, Vec<(&str, &Symbol)>> {
        let mut scopes: BTreeMap<&str, Vec<(&str, &Symbol)>> = BTreeMap::new();
        for (wire, symbol) in self.symbols.iter().filter(|(_, s)| s.category == category) {
            scopes
                .entry(symbol.scope_dir.as_str())
                .or_default()
                .push((wire.as_str(), symbol));
        }
        scopes
    }

    pub fn module_path(&self) -> &str {
        &self.module_path
    }
}

fn place(
    entry: &TypeEntry,
    naming: &NamingConvention,
    namespaces: &mut HashMap<(Category, String), UniqueNames>,
) -> Symbol {
    let scope = NamingTitle::new(entry.scope.as_str());
    let scope_dir = scope.file_name(naming);

    // Modules and types share the type namespace of the scope module.
    let names = namespaces
        .entry((entry.category, scope_dir.clone()))
        .or_default();
    let type_name = names.claim(entry.title.type_name(naming));
    let file_module = names.claim(entry.title.module_name(naming));

    Symbol {
        kind: entry.kind,
        category: entry.category,
        scope_module: scope.module_name(naming),
        scope_dir,
        file_module,
        type_name,
    }
}

#[cfg(test)]
mod tests {
    use vkgen_core::RUST_NAMING;

    use super::*;

    fn entry(kind: TypeKind, category: Category, scope: &str, name: &str) -> TypeEntry {
        TypeEntry {
            kind,
            category,
            scope: scope.into(),
            title: NamingTitle::new(name),
        }
    }

    fn table(entries: Vec<TypeEntry>) -> SymbolTable {
        let mut names = NameTable::default();
        for e in entries {
            names.insert(e);
        }
        SymbolTable::new(&names, &RUST_NAMING, "crate::api")
    }

    #[test]
    fn test_paths() {
        let symbols = table(vec![
            entry(TypeKind::Class, Category::Objects, "users", "users_user"),
            entry(TypeKind::Alias, Category::Responses, "users", "users_get_response"),
        ]);

        assert_eq!(
            symbols.path("users_user").as_deref(),
            Some("crate::api::objects::users::UsersUser")
        );
        assert_eq!(
            symbols.get("users_get_response").map(Symbol::file_path),
            Some(PathBuf::from("responses/users/users_get_response.rs"))
        );
        assert!(symbols.path("missing").is_none());
    }

    #[test]
    fn test_canonical_collisions_in_one_scope() {
        let symbols = table(vec![
            entry(TypeKind::Class, Category::Objects, "photos", "photos_photo"),
            entry(TypeKind::Class, Category::Objects, "photos", "photosPhoto"),
        ]);

        let second = symbols.get("photosPhoto").unwrap();
        assert_eq!(second.type_name, "PhotosPhoto2");
        assert_eq!(second.file_module, "photos_photo_2");
    }

    #[test]
    fn test_same_name_in_other_category_is_not_a_collision() {
        let symbols = table(vec![
            entry(TypeKind::Class, Category::Objects, "base", "base_ok"),
            entry(TypeKind::Enum, Category::Responses, "base", "baseOk"),
        ]);

        assert_eq!(symbols.get("baseOk").unwrap().type_name, "BaseOk");
    }

    #[test]
    fn test_reserved_scope_and_file() {
        let symbols = table(vec![entry(TypeKind::Alias, Category::Objects, "type", "type")]);

        let symbol = symbols.get("type").unwrap();
        assert_eq!(symbol.scope_module, "r#type");
        assert_eq!(symbol.scope_dir, "type");
        assert_eq!(symbol.file_module, "r#type");
        assert_eq!(symbol.file_path(), PathBuf::from("objects/type/type.rs"));
        assert_eq!(
            symbols.path("type").as_deref(),
            Some("crate::api::objects::r#type::Type")
        );
    }

    #[test]
    fn test_scopes_are_sorted() {
        let symbols = table(vec![
            entry(TypeKind::Class, Category::Objects, "wall", "wall_wallpost"),
            entry(TypeKind::Class, Category::Objects, "base", "base_object"),
            entry(TypeKind::Class, Category::Responses, "base", "base_ok_response"),
        ]);

        let scopes: Vec<_> = symbols.scopes(Category::Objects).into_keys().collect();
        assert_eq!(scopes, ["base", "wall"]);
    }
}
