use std::path::PathBuf;

use vkgen_core::GeneratedFile;

use super::GENERATED_HEADER;
use crate::{RawCode, RustFile};

/// `<category>/<scope>/mod.rs`: declares the scope's files and re-exports
/// their types.
#[derive(Debug, Clone)]
pub struct ScopeMod {
    pub dir: PathBuf,
    /// `(file module, type name)`
    pub items: Vec<(String, String)>,
}

impl ScopeMod {
    pub fn new(dir: impl Into<PathBuf>, mut items: Vec<(String, String)>) -> Self {
        items.sort();
        Self {
            dir: dir.into(),
            items,
        }
    }
}

impl GeneratedFile for ScopeMod {
    fn path(&self) -> PathBuf {
        self.dir.join("mod.rs")
    }

    fn render(&self) -> String {
        let mods = self.items.iter().map(|(module, _)| format!("mod {};", module));
        let uses = self
            .items
            .iter()
            .map(|(module, name)| format!("pub use {}::{};", module, name));

        RustFile::new()
            .add(RawCode::lines(mods))
            .add(RawCode::lines(uses))
            .render_with_header(GENERATED_HEADER)
    }
}
