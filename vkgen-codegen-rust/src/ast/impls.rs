//! Rust impl block builder.

use vkgen_codegen::{CodeBuilder, CodeFragment, Renderable};

use super::Fn;

/// Builder for inherent and trait impl blocks.
#[derive(Debug, Clone)]
pub struct Impl {
    generics: Option<String>,
    type_name: String,
    trait_name: Option<String>,
    items: Vec<String>,
    methods: Vec<Fn>,
}

impl Impl {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            generics: None,
            type_name: type_name.into(),
            trait_name: None,
            items: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Declare generics, e.g. `'a, T: Transport`.
    pub fn generics(mut self, generics: impl Into<String>) -> Self {
        self.generics = Some(generics.into());
        self
    }

    pub fn for_trait(mut self, trait_name: impl Into<String>) -> Self {
        self.trait_name = Some(trait_name.into());
        self
    }

    /// Add an associated item line, e.g. `type Error = String;`.
    pub fn item(mut self, item: impl Into<String>) -> Self {
        self.items.push(item.into());
        self
    }

    pub fn method(mut self, method: Fn) -> Self {
        self.methods.push(method);
        self
    }

    pub fn methods(mut self, methods: impl IntoIterator<Item = Fn>) -> Self {
        self.methods.extend(methods);
        self
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::rust();
        builder.emit(self);
        builder.build()
    }

    fn header(&self) -> String {
        let generics = self
            .generics
            .as_ref()
            .map_or_else(String::new, |g| format!("<{}>", g));
        match &self.trait_name {
            Some(trait_name) => format!("impl{} {} for {} {{", generics, trait_name, self.type_name),
            None => format!("impl{} {} {{", generics, self.type_name),
        }
    }
}

impl Renderable for Impl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut body: Vec<CodeFragment> =
            self.items.iter().map(|i| CodeFragment::line(i.as_str())).collect();

        for method in &self.methods {
            if !body.is_empty() {
                body.push(CodeFragment::blank());
            }
            body.extend(method.to_fragments());
        }

        vec![CodeFragment::block(self.header(), body)]
    }
}
