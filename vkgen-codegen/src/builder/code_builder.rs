//! Indented line writer.

use super::{CodeFragment, Indent, Renderable};

/// Builds source text line by line, tracking the indentation level.
///
/// Two styles are available: consuming methods (`line`, `block`, ...) for
/// chained construction, and `push_*` methods for use inside loops.
///
/// ```
/// use vkgen_codegen::CodeBuilder;
///
/// let code = CodeBuilder::rust()
///     .block("impl Foo {", |b| b.line("fn bar(&self) {}"))
///     .build();
/// assert_eq!(code, "impl Foo {\n    fn bar(&self) {}\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    buffer: String,
    level: usize,
    indent: Indent,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            buffer: String::new(),
            level: 0,
            indent,
        }
    }

    pub fn rust() -> Self {
        Self::new(Indent::RUST)
    }

    fn write_indent(&mut self) {
        for _ in 0..self.level {
            self.buffer.push_str(self.indent.unit());
        }
    }

    pub fn push_line(&mut self, s: &str) -> &mut Self {
        if s.is_empty() {
            self.buffer.push('\n');
            return self;
        }
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.level += 1;
        self
    }

    pub fn push_dedent(&mut self) -> &mut Self {
        self.level = self.level.saturating_sub(1);
        self
    }

    /// Write a `///` comment, one line per line of `text`.
    pub fn push_doc(&mut self, text: &str) -> &mut Self {
        for line in text.trim().lines() {
            let line = line.trim_end();
            if line.is_empty() {
                self.push_line("///");
            } else {
                self.push_line(&format!("/// {}", line));
            }
        }
        self
    }

    /// Write every fragment of `node`.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(close) = close {
                    self.push_line(&close);
                }
            }
            CodeFragment::Indent(fragments) => {
                self.push_indent();
                for f in fragments {
                    self.apply_fragment(f);
                }
                self.push_dedent();
            }
            CodeFragment::Sequence(fragments) => {
                for f in fragments {
                    self.apply_fragment(f);
                }
            }
            CodeFragment::Doc(text) => {
                self.push_doc(&text);
            }
        }
    }

    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    pub fn blank(mut self) -> Self {
        self.push_blank();
        self
    }

    pub fn indent(mut self) -> Self {
        self.push_indent();
        self
    }

    pub fn dedent(mut self) -> Self {
        self.push_dedent();
        self
    }

    pub fn doc(mut self, text: &str) -> Self {
        self.push_doc(text);
        self
    }

    /// A block closed by `}`.
    pub fn block<F>(self, header: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        self.block_with_close(header, "}", f)
    }

    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        f(self.line(header).indent()).dedent().line(close)
    }

    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    pub fn each<T, I, F>(mut self, items: I, mut f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: FnMut(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    pub fn build(self) -> String {
        self.buffer
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::rust()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_blocks() {
        let code = CodeBuilder::rust()
            .block("mod a {", |b| b.block("fn f() {", |b| b.line("g();")))
            .build();
        assert_eq!(code, "mod a {\n    fn f() {\n        g();\n    }\n}\n");
    }

    #[test]
    fn test_multi_line_doc() {
        let code = CodeBuilder::rust()
            .indent()
            .doc("Returns a list of friends.\n\nOrdered by hints. ")
            .build();
        assert_eq!(
            code,
            "    /// Returns a list of friends.\n    ///\n    /// Ordered by hints.\n"
        );
    }

    #[test]
    fn test_when_and_each() {
        let code = CodeBuilder::rust()
            .when(false, |b| b.line("skipped"))
            .each(["a", "b"], |b, s| b.line(s))
            .build();
        assert_eq!(code, "a\nb\n");
    }

    #[test]
    fn test_emit_fragments() {
        let fragment = CodeFragment::block(
            "impl X {",
            vec![CodeFragment::doc("Doc."), CodeFragment::line("fn y() {}")],
        );
        let mut builder = CodeBuilder::rust();
        builder.emit(&fragment).push_blank();
        assert_eq!(builder.build(), "impl X {\n    /// Doc.\n    fn y() {}\n}\n\n");
    }

    #[test]
    fn test_tab_indent() {
        let code = CodeBuilder::new(Indent::Tab)
            .block("{", |b| b.line("x"))
            .build();
        assert_eq!(code, "{\n\tx\n}\n");
    }
}
