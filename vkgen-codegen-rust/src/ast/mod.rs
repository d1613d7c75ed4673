//! Rust AST builders for the items the emitters produce.
//!
//! Each builder describes itself as [`CodeFragment`](vkgen_codegen::CodeFragment)s,
//! so items compose into a [`RustFile`](crate::RustFile) without holding a builder.

mod enums;
mod fns;
mod impls;
mod structs;

pub use enums::{Enum, Variant};
pub use fns::{Arm, Fn, Match, Param};
pub use impls::Impl;
pub use structs::{Field, Struct};

use vkgen_codegen::CodeFragment;

/// Doc, derive and attribute lines shared by every item.
fn preamble(doc: Option<&str>, derives: &[String], attrs: &[String]) -> Vec<CodeFragment> {
    let mut fragments = vec![CodeFragment::doc_opt(doc)];
    if !derives.is_empty() {
        fragments.push(CodeFragment::line(format!(
            "#[derive({})]",
            derives.join(", ")
        )));
    }
    fragments.extend(attrs.iter().map(|a| CodeFragment::line(format!("#[{}]", a))));
    fragments
}
