//! Rust type mapper implementation.

use vkgen_codegen::TypeMapper;
use vkgen_core::NamingConvention;
use vkgen_ir::ScalarKind;

use crate::symbols::SymbolTable;

/// Free-form JSON, the fallback for anything without a precise type.
pub const JSON_VALUE: &str = "serde_json::Value";

/// Maps type references to Rust types, resolving named types through the
/// symbol table.
#[derive(Debug, Clone, Copy)]
pub struct RustTypeMapper<'a> {
    symbols: &'a SymbolTable,
    naming: &'a NamingConvention,
}

impl<'a> RustTypeMapper<'a> {
    pub fn new(symbols: &'a SymbolTable, naming: &'a NamingConvention) -> Self {
        Self { symbols, naming }
    }

    pub fn map_boxed(&self, inner: &str) -> String {
        format!("Box<{}>", inner)
    }
}

impl TypeMapper for RustTypeMapper<'_> {
    fn language(&self) -> &'static str {
        "rust"
    }

    fn map_scalar(&self, kind: ScalarKind) -> String {
        match kind {
            ScalarKind::Int => "i64",
            ScalarKind::Bool => "bool",
            ScalarKind::Double => "f64",
            ScalarKind::String => "String",
            ScalarKind::Any => JSON_VALUE,
        }
        .to_string()
    }

    fn map_reference(&self, name: &str) -> String {
        self.symbols
            .path(name)
            .unwrap_or_else(|| self.map_undefined())
    }

    fn map_undefined(&self) -> String {
        JSON_VALUE.to_string()
    }

    fn map_array(&self, element: &str) -> String {
        self.naming.collection_name(element)
    }

    fn map_optional(&self, inner: &str) -> String {
        format!("Option<{}>", inner)
    }
}
