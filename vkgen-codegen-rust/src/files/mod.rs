//! One type per generated file.

pub use vkgen_core::GENERATED_HEADER;

use crate::Use;

/// Common use statement helpers for generated files.
pub mod uses {
    use super::Use;

    /// `use serde::{Deserialize, Serialize};`
    pub fn serde() -> Use {
        Use::new("serde").symbols(["Deserialize", "Serialize"])
    }

    /// `use std::fmt;`
    pub fn fmt() -> Use {
        Use::new("std::fmt")
    }

    /// `use std::collections::BTreeMap;`
    pub fn btree_map() -> Use {
        Use::new("std::collections").symbol("BTreeMap")
    }
}

mod alias_rs;
mod category_mod;
mod class_rs;
mod enum_rs;
mod method_group_rs;
mod methods_mod;
mod root_mod;
mod scope_mod;

pub use alias_rs::AliasRs;
pub use category_mod::CategoryMod;
pub use class_rs::{ClassField, ClassRs};
pub use enum_rs::{EnumRs, Member};
pub use method_group_rs::{CallParam, MethodFn, MethodGroupRs};
pub use methods_mod::{MethodGroup, MethodsMod};
pub use root_mod::RootMod;
pub use scope_mod::ScopeMod;

/// The last segment of a Rust path, e.g. `Transport` for
/// `crate::transport::Transport`.
fn last_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}
