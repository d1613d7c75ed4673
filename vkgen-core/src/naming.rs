//! Naming conventions for generated identifiers.

use crate::{to_pascal_case, to_snake_case};

/// Language-specific naming conventions.
///
/// Defines how wire names become type, field and file names, and how
/// names that collide with the target language are repaired. The
/// collision rule lives here so callers pick it instead of the title.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a name to a type name (e.g., "users_user" -> "UsersUser")
    pub type_case: fn(&str) -> String,
    /// Transform a name to a field or function name
    pub field_case: fn(&str) -> String,
    /// Transform a name to a file or module name
    pub file_case: fn(&str) -> String,
    /// Keywords of the target language
    pub reserved_words: &'static [&'static str],
    /// Type names that would shadow prelude items in generated code
    pub reserved_type_names: &'static [&'static str],
    /// Escape a reserved field name (e.g., "type" -> "r#type")
    pub escape_reserved: fn(&str) -> String,
    /// Name used when a wire name has no usable characters
    pub placeholder: &'static str,
    /// Decorate an element type as a collection (e.g., "Foo" -> "Vec<Foo>")
    pub collection: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Transform and make safe for use as a type name.
    pub fn type_name(&self, name: &str) -> String {
        let transformed = self.non_empty(name, self.type_case);
        let transformed = prefix_leading_digit(transformed);
        if self.is_reserved(&transformed) || self.reserved_type_names.contains(&transformed.as_str())
        {
            format!("{}_", transformed)
        } else {
            transformed
        }
    }

    /// Transform and make safe for use as a field name.
    pub fn field_name(&self, name: &str) -> String {
        let transformed = self.non_empty(name, self.field_case);
        self.safe_name(&prefix_leading_digit(transformed))
    }

    /// Transform and make safe for use in a `mod` declaration.
    pub fn module_name(&self, name: &str) -> String {
        let transformed = self.non_empty(name, self.file_case);
        self.safe_name(&prefix_leading_digit(transformed))
    }

    /// File stem backing [`module_name`](Self::module_name).
    ///
    /// `mod r#type;` is loaded from `type.rs`, so the raw prefix is dropped.
    pub fn file_name(&self, name: &str) -> String {
        let module = self.module_name(name);
        match module.strip_prefix("r#") {
            Some(stem) => stem.to_string(),
            None => module,
        }
    }

    /// Decorate a rendered type name as a collection.
    pub fn collection_name(&self, type_name: &str) -> String {
        (self.collection)(type_name)
    }

    fn non_empty(&self, name: &str, case: fn(&str) -> String) -> String {
        let transformed = case(name);
        if transformed.is_empty() {
            case(self.placeholder)
        } else {
            transformed
        }
    }
}

fn prefix_leading_digit(name: String) -> String {
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{}", name)
    } else {
        name
    }
}

fn escape_rust_raw(name: &str) -> String {
    match name {
        // Not allowed as raw identifiers
        "self" | "Self" | "super" | "crate" => format!("{}_", name),
        _ => format!("r#{}", name),
    }
}

fn escape_with_suffix(name: &str) -> String {
    format!("{}_", name)
}

fn rust_vec(inner: &str) -> String {
    format!("Vec<{}>", inner)
}

const RUST_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum", "extern",
    "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut",
    "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true", "type",
    "unsafe", "use", "where", "while", "abstract", "become", "box", "do", "final", "macro",
    "override", "priv", "try", "typeof", "unsized", "virtual", "yield",
];

const RUST_PRELUDE_TYPES: &[&str] = &[
    "Option", "Result", "Vec", "String", "Box", "Some", "None", "Ok", "Err",
];

/// Rust naming conventions, escaping keywords as raw identifiers.
pub const RUST_NAMING: NamingConvention = NamingConvention {
    type_case: to_pascal_case,
    field_case: to_snake_case,
    file_case: to_snake_case,
    reserved_words: RUST_KEYWORDS,
    reserved_type_names: RUST_PRELUDE_TYPES,
    escape_reserved: escape_rust_raw,
    placeholder: "unnamed",
    collection: rust_vec,
};

/// Rust naming conventions, escaping keywords with a trailing underscore.
pub const RUST_NAMING_SUFFIXED: NamingConvention = NamingConvention {
    escape_reserved: escape_with_suffix,
    ..RUST_NAMING
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_field_names() {
        assert_eq!(RUST_NAMING.field_name("type"), "r#type");
        assert_eq!(RUST_NAMING.field_name("self"), "self_");
        assert_eq!(RUST_NAMING_SUFFIXED.field_name("type"), "type_");
        assert_eq!(RUST_NAMING.field_name("first_name"), "first_name");
    }

    #[test]
    fn test_reserved_type_names() {
        assert_eq!(RUST_NAMING.type_name("self"), "Self_");
        assert_eq!(RUST_NAMING.type_name("option"), "Option_");
        assert_eq!(RUST_NAMING.type_name("users_user"), "UsersUser");
    }

    #[test]
    fn test_leading_digit() {
        assert_eq!(RUST_NAMING.field_name("2fa_required"), "_2fa_required");
        assert_eq!(RUST_NAMING.type_name("100"), "_100");
    }

    #[test]
    fn test_empty_names_use_placeholder() {
        assert_eq!(RUST_NAMING.field_name(""), "unnamed");
        assert_eq!(RUST_NAMING.field_name("__"), "unnamed");
        assert_eq!(RUST_NAMING.type_name("-"), "Unnamed");
        assert_eq!(RUST_NAMING.file_name(""), "unnamed");
    }

    #[test]
    fn test_module_and_file_names() {
        assert_eq!(RUST_NAMING.file_name("UsersUser"), "users_user");
        assert_eq!(RUST_NAMING.module_name("type"), "r#type");
        assert_eq!(RUST_NAMING.file_name("type"), "type");
        assert_eq!(RUST_NAMING_SUFFIXED.module_name("type"), "type_");
        assert_eq!(RUST_NAMING_SUFFIXED.file_name("type"), "type_");
    }

    #[test]
    fn test_collection_name() {
        assert_eq!(RUST_NAMING.collection_name("UsersUser"), "Vec<UsersUser>");
    }
}
