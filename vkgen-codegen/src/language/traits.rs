//! Language-agnostic code generation traits.

use std::path::{Path, PathBuf};

use eyre::Result;
use vkgen_ir::{ScalarKind, TypeReference};

/// A code generator for one target language.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "rust").
    fn language(&self) -> &'static str;

    /// File extension of generated source files (e.g., "rs").
    fn file_extension(&self) -> &'static str;

    /// Render every file without touching the filesystem.
    fn preview(&self) -> Vec<PreviewFile>;

    /// Render every file and replace `output_dir` with them.
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

/// Outcome of [`LanguageCodegen::generate`].
#[derive(Debug, Default)]
pub struct GenerateResult {
    pub output_dir: PathBuf,
    /// Relative paths of the written files, in write order.
    pub files: Vec<String>,
}

/// A rendered file, for previews.
#[derive(Debug, Clone)]
pub struct PreviewFile {
    /// Relative path from the output directory.
    pub path: String,
    pub content: String,
}

/// Maps [`TypeReference`]s to type expressions of a target language.
pub trait TypeMapper {
    fn language(&self) -> &'static str;

    fn map_scalar(&self, kind: ScalarKind) -> String;

    /// A named class, enum or alias.
    fn map_reference(&self, name: &str) -> String;

    /// The fallback for types that could not be classified.
    fn map_undefined(&self) -> String;

    fn map_array(&self, element: &str) -> String;

    fn map_optional(&self, inner: &str) -> String;

    fn map_type(&self, ty: &TypeReference) -> String {
        match ty {
            TypeReference::Scalar(scalar) => self.map_scalar(scalar.kind),
            TypeReference::ArrayOf(inner) => self.map_array(&self.map_type(inner)),
            TypeReference::Reference(name) => self.map_reference(name),
            TypeReference::Undefined(_) => self.map_undefined(),
        }
    }
}
