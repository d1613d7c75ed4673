use std::path::PathBuf;

use vkgen_core::GeneratedFile;
use vkgen_ir::Category;

use super::GENERATED_HEADER;
use crate::{RawCode, RustFile};

/// The top-level `mod.rs` of the output directory.
#[derive(Debug, Clone)]
pub struct RootMod {
    /// Categories with at least one declaration.
    pub categories: Vec<Category>,
}

impl GeneratedFile for RootMod {
    fn path(&self) -> PathBuf {
        PathBuf::from("mod.rs")
    }

    fn render(&self) -> String {
        let mut modules: Vec<&str> = self.categories.iter().map(Category::as_str).collect();
        modules.push("methods");
        modules.sort_unstable();

        RustFile::new()
            .add(RawCode::lines(
                modules.iter().map(|m| format!("pub mod {};", m)),
            ))
            .add(RawCode::new("pub use methods::Api;"))
            .render_with_header(GENERATED_HEADER)
    }
}
