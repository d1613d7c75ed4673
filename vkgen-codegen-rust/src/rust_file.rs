//! Structured Rust source files: grouped imports followed by items.

use vkgen_codegen::{CodeBuilder, CodeFragment, Indent, Renderable};

/// Import groups, in the order they are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum UseGroup {
    Std,
    External,
    Local,
}

/// A `use` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Use {
    path: String,
    symbols: Vec<String>,
}

impl Use {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            symbols: Vec::new(),
        }
    }

    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbols.push(symbol.into());
        self
    }

    pub fn symbols(mut self, symbols: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.symbols.extend(symbols.into_iter().map(Into::into));
        self
    }

    /// Import the last segment of a full path, e.g. `crate::transport::Transport`.
    ///
    /// Returns `None` for a single-segment path, which needs no import.
    pub fn item(path: &str) -> Option<Self> {
        let (module, name) = path.rsplit_once("::")?;
        Some(Self::new(module).symbol(name))
    }

    fn group(&self) -> UseGroup {
        match self.path.split("::").next() {
            Some("std" | "core" | "alloc") => UseGroup::Std,
            Some("crate" | "self" | "super") => UseGroup::Local,
            _ => UseGroup::External,
        }
    }

    fn format(&self) -> String {
        match self.symbols.as_slice() {
            [] => format!("use {};", self.path),
            [one] => format!("use {}::{};", self.path, one),
            many => format!("use {}::{{{}}};", self.path, many.join(", ")),
        }
    }
}

impl Renderable for Use {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(self.format())]
    }
}

/// A Rust source file.
///
/// Imports are sorted into std, external and crate-local groups separated
/// by blank lines; body items are separated by one blank line each.
#[derive(Debug, Default)]
pub struct RustFile {
    uses: Vec<Use>,
    body: Vec<Vec<CodeFragment>>,
}

impl RustFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn use_stmt(mut self, use_stmt: Use) -> Self {
        if !self.uses.contains(&use_stmt) {
            self.uses.push(use_stmt);
        }
        self
    }

    pub fn use_stmts(self, uses: impl IntoIterator<Item = Use>) -> Self {
        uses.into_iter().fold(self, Self::use_stmt)
    }

    /// Add a body item.
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.uses.is_empty() && self.body.is_empty()
    }

    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::new(Indent::RUST);

        let mut uses: Vec<&Use> = self.uses.iter().collect();
        uses.sort_by(|a, b| (a.group(), &a.path).cmp(&(b.group(), &b.path)));

        let mut previous = None;
        for use_stmt in uses {
            let group = use_stmt.group();
            if previous.is_some_and(|p| p != group) {
                builder.push_blank();
            }
            builder.emit(use_stmt);
            previous = Some(group);
        }

        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 || previous.is_some() {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }

    /// Render with `header` on the first line, followed by a blank line.
    pub fn render_with_header(&self, header: &str) -> String {
        let content = self.render();
        if content.is_empty() {
            format!("{}\n", header)
        } else {
            format!("{}\n\n{}", header, content)
        }
    }
}

/// Literal lines of code.
#[derive(Debug, Clone)]
pub struct RawCode(Vec<String>);

impl RawCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().lines().map(str::to_string).collect())
    }

    pub fn lines(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self(lines.into_iter().map(Into::into).collect())
    }
}

impl Renderable for RawCode {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.0.iter().map(|l| CodeFragment::line(l.as_str())).collect()
    }
}
