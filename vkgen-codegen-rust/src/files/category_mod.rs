use std::path::PathBuf;

use vkgen_core::GeneratedFile;
use vkgen_ir::Category;

use super::GENERATED_HEADER;
use crate::{RawCode, RustFile};

/// `<category>/mod.rs`: one public module per scope.
#[derive(Debug, Clone)]
pub struct CategoryMod {
    pub category: Category,
    pub scopes: Vec<String>,
}

impl GeneratedFile for CategoryMod {
    fn path(&self) -> PathBuf {
        PathBuf::from(self.category.as_str()).join("mod.rs")
    }

    fn render(&self) -> String {
        RustFile::new()
            .add(RawCode::lines(
                self.scopes.iter().map(|s| format!("pub mod {};", s)),
            ))
            .render_with_header(GENERATED_HEADER)
    }
}
