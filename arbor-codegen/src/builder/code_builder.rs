//! Fluent builder for correctly indented source text.

use super::Indent;

/// Accumulates lines of code at a tracked indentation depth.
///
/// An emitter creates one builder per top-level `generate` call; the
/// depth counter is the only state and it lives here, so emitters stay
/// stateless across calls.
///
/// # Example
///
/// ```
/// use arbor_codegen::{CodeBuilder, Indent};
///
/// let text = CodeBuilder::new(Indent::CSHARP)
///     .line("public class Customer")
///     .scope(|b| b.line("public string Name { get; set; }"))
///     .build();
///
/// assert_eq!(
///     text,
///     "public class Customer\n{\n    public string Name { get; set; }\n}\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent: Indent,
    depth: usize,
    out: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            indent,
            depth: 0,
            out: String::new(),
        }
    }

    /// Append one line at the current depth.
    pub fn line(mut self, text: &str) -> Self {
        self.push_indent();
        self.out.push_str(text);
        self.out.push('\n');
        self
    }

    /// Append a blank line.
    pub fn blank(mut self) -> Self {
        self.out.push('\n');
        self
    }

    /// Increase depth for subsequent lines.
    pub fn indent(mut self) -> Self {
        self.depth += 1;
        self
    }

    /// Decrease depth for subsequent lines.
    pub fn dedent(mut self) -> Self {
        self.depth = self.depth.saturating_sub(1);
        self
    }

    /// Emit a braced block: `{`, the closure's lines one level deeper,
    /// then `}`.
    pub fn scope<F>(self, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line("{").indent();
        f(builder).dedent().line("}")
    }

    /// Emit `header`, then the closure's lines one level deeper, then
    /// `close`.
    pub fn block<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    /// Conditionally apply `f`.
    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    /// Apply `f` once per item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Current indentation depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Consume the builder, returning the accumulated text.
    pub fn build(self) -> String {
        self.out
    }

    fn push_indent(&mut self) {
        let unit = self.indent.unit();
        for _ in 0..self.depth {
            self.out.push_str(&unit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_and_depth() {
        let text = CodeBuilder::new(Indent::CSHARP)
            .line("if (ready)")
            .line("{")
            .indent()
            .line("Run();")
            .dedent()
            .line("}")
            .build();

        assert_eq!(text, "if (ready)\n{\n    Run();\n}\n");
    }

    #[test]
    fn test_scope_restores_depth() {
        let builder = CodeBuilder::new(Indent::CSHARP)
            .line("class A")
            .scope(|b| b.line("int x;"));
        assert_eq!(builder.depth(), 0);
        assert_eq!(builder.build(), "class A\n{\n    int x;\n}\n");
    }

    #[test]
    fn test_nested_scopes_indent_one_unit_each() {
        let text = CodeBuilder::new(Indent::Spaces(2))
            .line("a")
            .scope(|b| b.line("b").scope(|b| b.line("c")))
            .build();

        assert_eq!(text, "a\n{\n  b\n  {\n    c\n  }\n}\n");
    }

    #[test]
    fn test_when_and_each() {
        let text = CodeBuilder::new(Indent::CSHARP)
            .when(false, |b| b.line("skipped"))
            .each(["x", "y"], |b, name| b.line(&format!("int {name};")))
            .build();

        assert_eq!(text, "int x;\nint y;\n");
    }

    #[test]
    fn test_dedent_saturates_at_zero() {
        let text = CodeBuilder::new(Indent::CSHARP)
            .dedent()
            .line("top")
            .build();
        assert_eq!(text, "top\n");
    }
}
