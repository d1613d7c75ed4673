//! Rust struct builder.

use vkgen_codegen::{CodeBuilder, CodeFragment, Renderable};

use super::preamble;

/// A field in a Rust struct.
#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    pub ty: String,
    pub doc: Option<String>,
    pub attrs: Vec<String>,
    pub is_public: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            doc: None,
            attrs: Vec::new(),
            is_public: true,
        }
    }

    pub fn doc(mut self, doc: Option<impl Into<String>>) -> Self {
        self.doc = doc.map(Into::into);
        self
    }

    pub fn attr(mut self, attr: impl Into<String>) -> Self {
        self.attrs.push(attr.into());
        self
    }

    pub fn private(mut self) -> Self {
        self.is_public = false;
        self
    }
}

impl Renderable for Field {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let vis = if self.is_public { "pub " } else { "" };
        let mut fragments = preamble(self.doc.as_deref(), &[], &self.attrs);
        fragments.push(CodeFragment::line(format!(
            "{}{}: {},",
            vis, self.name, self.ty
        )));
        fragments
    }
}

/// Builder for Rust structs.
///
/// The name may carry generics, e.g. `Friends<'a, T>`.
#[derive(Debug, Clone)]
pub struct Struct {
    name: String,
    doc: Option<String>,
    derives: Vec<String>,
    attrs: Vec<String>,
    fields: Vec<Field>,
}

impl Struct {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            derives: Vec::new(),
            attrs: Vec::new(),
            fields: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: Option<impl Into<String>>) -> Self {
        self.doc = doc.map(Into::into);
        self
    }

    pub fn derive(mut self, derive: impl Into<String>) -> Self {
        self.derives.push(derive.into());
        self
    }

    pub fn derives(mut self, derives: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.derives.extend(derives.into_iter().map(Into::into));
        self
    }

    pub fn attr(mut self, attr: impl Into<String>) -> Self {
        self.attrs.push(attr.into());
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn fields(mut self, fields: impl IntoIterator<Item = Field>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Build the struct as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::rust();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Struct {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = preamble(self.doc.as_deref(), &self.derives, &self.attrs);
        if self.fields.is_empty() {
            fragments.push(CodeFragment::line(format!("pub struct {} {{}}", self.name)));
        } else {
            fragments.push(CodeFragment::block(
                format!("pub struct {} {{", self.name),
                self.fields.to_fragments(),
            ));
        }
        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_struct() {
        assert_eq!(Struct::new("Empty").build(), "pub struct Empty {}\n");
    }

    #[test]
    fn test_struct_with_fields() {
        let s = Struct::new("UsersUserMin")
            .derives(["Debug", "Clone"])
            .field(Field::new("id", "Option<i64>").doc(Some("User ID")))
            .field(Field::new("transport", "&'a T").private())
            .build();
        assert_eq!(
            s,
            "#[derive(Debug, Clone)]\n\
             pub struct UsersUserMin {\n    \
             /// User ID\n    \
             pub id: Option<i64>,\n    \
             transport: &'a T,\n\
             }\n"
        );
    }

    #[test]
    fn test_multiline_doc_and_attrs() {
        let s = Struct::new("Photo")
            .doc(Some("First line\n\nSecond line"))
            .attr("non_exhaustive")
            .field(Field::new("r#type", "Option<String>").attr("serde(rename = \"type\")"))
            .build();
        assert!(s.starts_with("/// First line\n///\n/// Second line\n#[non_exhaustive]\n"));
        assert!(s.contains("    #[serde(rename = \"type\")]\n    pub r#type: Option<String>,\n"));
    }
}
