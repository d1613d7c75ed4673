use std::path::PathBuf;

use vkgen_codegen::CodeFragment;
use vkgen_core::GeneratedFile;

use super::GENERATED_HEADER;
use crate::RustFile;

/// A type alias, e.g. a response envelope around a bare integer.
#[derive(Debug, Clone)]
pub struct AliasRs {
    pub path: PathBuf,
    pub name: String,
    pub doc: Option<String>,
    pub target: String,
}

impl GeneratedFile for AliasRs {
    fn path(&self) -> PathBuf {
        self.path.clone()
    }

    fn render(&self) -> String {
        RustFile::new()
            .add(vec![
                CodeFragment::doc_opt(self.doc.as_deref()),
                CodeFragment::line(format!("pub type {} = {};", self.name, self.target)),
            ])
            .render_with_header(GENERATED_HEADER)
    }
}
