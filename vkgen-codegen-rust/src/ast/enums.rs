//! Rust enum builder.

use vkgen_codegen::{CodeBuilder, CodeFragment, Renderable};

use super::preamble;

/// A unit variant, optionally with an explicit discriminant.
#[derive(Debug, Clone)]
pub struct Variant {
    pub name: String,
    pub doc: Option<String>,
    pub attrs: Vec<String>,
    pub discriminant: Option<String>,
}

impl Variant {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            attrs: Vec::new(),
            discriminant: None,
        }
    }

    pub fn doc(mut self, doc: Option<impl Into<String>>) -> Self {
        self.doc = doc.map(Into::into);
        self
    }

    /// Add an attribute, e.g. `serde(rename = "hints")`.
    pub fn attr(mut self, attr: impl Into<String>) -> Self {
        self.attrs.push(attr.into());
        self
    }

    /// Set the discriminant, e.g. `Hints = 0`.
    pub fn discriminant(mut self, value: impl ToString) -> Self {
        self.discriminant = Some(value.to_string());
        self
    }
}

impl Renderable for Variant {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = preamble(self.doc.as_deref(), &[], &self.attrs);
        let line = match &self.discriminant {
            Some(value) => format!("{} = {},", self.name, value),
            None => format!("{},", self.name),
        };
        fragments.push(CodeFragment::line(line));
        fragments
    }
}

/// Builder for Rust enums.
#[derive(Debug, Clone)]
pub struct Enum {
    name: String,
    doc: Option<String>,
    derives: Vec<String>,
    attrs: Vec<String>,
    variants: Vec<Variant>,
}

impl Enum {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            derives: Vec::new(),
            attrs: Vec::new(),
            variants: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: Option<impl Into<String>>) -> Self {
        self.doc = doc.map(Into::into);
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

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variants.push(variant);
        self
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::rust();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Enum {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = preamble(self.doc.as_deref(), &self.derives, &self.attrs);
        if self.variants.is_empty() {
            fragments.push(CodeFragment::line(format!("pub enum {} {{}}", self.name)));
        } else {
            fragments.push(CodeFragment::block(
                format!("pub enum {} {{", self.name),
                self.variants.to_fragments(),
            ));
        }
        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_enum() {
        assert_eq!(Enum::new("Empty").build(), "pub enum Empty {}\n");
    }

    #[test]
    fn test_variants_with_discriminants() {
        let e = Enum::new("FriendsOrder")
            .derives(["Debug", "Clone", "Copy"])
            .variant(
                Variant::new("Hints")
                    .attr("serde(rename = \"hints\")")
                    .discriminant(0),
            )
            .variant(Variant::new("Name").doc(Some("By name")).discriminant(1))
            .build();
        assert_eq!(
            e,
            "#[derive(Debug, Clone, Copy)]\n\
             pub enum FriendsOrder {\n    \
             #[serde(rename = \"hints\")]\n    \
             Hints = 0,\n    \
             /// By name\n    \
             Name = 1,\n\
             }\n"
        );
    }

    #[test]
    fn test_enum_attrs_follow_derives() {
        let e = Enum::new("BaseSex")
            .derives(["Serialize"])
            .attr("serde(try_from = \"i64\", into = \"i64\")")
            .variant(Variant::new("Unknown"))
            .build();
        assert!(e.starts_with("#[derive(Serialize)]\n#[serde(try_from = \"i64\", into = \"i64\")]\n"));
        assert!(e.contains("    Unknown,\n"));
    }
}
