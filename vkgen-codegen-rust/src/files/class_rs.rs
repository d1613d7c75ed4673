use std::path::PathBuf;

use vkgen_core::GeneratedFile;

use super::{GENERATED_HEADER, uses};
use crate::{Field, RustFile, Struct};

/// A struct field; rendered as `Option<ty>`.
#[derive(Debug, Clone)]
pub struct ClassField {
    pub name: String,
    pub wire: String,
    pub ty: String,
    pub doc: Option<String>,
}

/// A serde data struct for one flattened class.
#[derive(Debug, Clone)]
pub struct ClassRs {
    pub path: PathBuf,
    pub name: String,
    pub doc: Option<String>,
    pub fields: Vec<ClassField>,
}

impl GeneratedFile for ClassRs {
    fn path(&self) -> PathBuf {
        self.path.clone()
    }

    fn render(&self) -> String {
        let fields = self.fields.iter().map(|f| {
            Field::new(&f.name, format!("Option<{}>", f.ty))
                .doc(f.doc.as_deref())
                .attr(format!(
                    "serde(rename = {:?}, default, skip_serializing_if = \"Option::is_none\")",
                    f.wire
                ))
        });

        let data = Struct::new(&self.name)
            .doc(self.doc.as_deref())
            .derives(["Debug", "Clone", "Default", "PartialEq", "Serialize", "Deserialize"])
            .fields(fields);

        RustFile::new()
            .use_stmt(uses::serde())
            .add(data)
            .render_with_header(GENERATED_HEADER)
    }
}
