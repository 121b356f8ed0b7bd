//! Indentation-aware text buffer.

use super::{CodeFragment, Indent, Renderable};

/// Accumulates generated lines while tracking the indentation level.
///
/// ```
/// use compwire_codegen::{CodeBuilder, CodeFragment};
///
/// let mut builder = CodeBuilder::js();
/// builder.apply(CodeFragment::block(
///     "for (const name in components) {",
///     vec![CodeFragment::line("nuxtApp.vueApp.component(name, components[name]);")],
///     "}",
/// ));
///
/// assert_eq!(
///     builder.build(),
///     "for (const name in components) {\n  nuxtApp.vueApp.component(name, components[name]);\n}\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Builder with two-space indentation.
    pub fn js() -> Self {
        Self::new(Indent::JS)
    }

    /// Append a line at the current indentation.
    pub fn line(&mut self, s: &str) -> &mut Self {
        for _ in 0..self.level {
            self.buffer.push_str(self.indent.as_str());
        }
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Append an empty line. Never indented.
    pub fn blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    pub fn comment(&mut self, text: &str) -> &mut Self {
        self.line(&format!("// {}", text))
    }

    pub fn indent(&mut self) -> &mut Self {
        self.level += 1;
        self
    }

    pub fn dedent(&mut self) -> &mut Self {
        self.level = self.level.saturating_sub(1);
        self
    }

    /// Append every fragment of a syntax node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply(fragment);
        }
        self
    }

    pub fn apply(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.line(&s);
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.line(&header).indent();
                for f in body {
                    self.apply(f);
                }
                self.dedent().line(&close);
            }
            CodeFragment::Sequence(fragments) => {
                for f in fragments {
                    self.apply(f);
                }
            }
            CodeFragment::Comment(text) => {
                self.comment(&text);
            }
        }
    }

    pub fn build(self) -> String {
        self.buffer
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::js()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_blocks() {
        let mut builder = CodeBuilder::js();
        builder.apply(CodeFragment::block(
            "export default defineNuxtPlugin(nuxtApp => {",
            vec![CodeFragment::block(
                "for (const name in components) {",
                vec![CodeFragment::line("register(name);")],
                "}",
            )],
            "});",
        ));

        assert_eq!(
            builder.build(),
            "export default defineNuxtPlugin(nuxtApp => {\n  for (const name in components) {\n    register(name);\n  }\n});\n"
        );
    }

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::js();
        builder.dedent().dedent().line("x;");
        assert_eq!(builder.build(), "x;\n");
    }

    #[test]
    fn test_blank_line_is_not_indented() {
        let mut builder = CodeBuilder::js();
        builder.indent().line("a;").blank().line("b;");
        assert_eq!(builder.build(), "  a;\n\n  b;\n");
    }

    #[test]
    fn test_comment_and_sequence() {
        let mut builder = CodeBuilder::js();
        builder.apply(CodeFragment::sequence(vec![
            CodeFragment::comment("Generated by components discovery"),
            CodeFragment::line("export {};"),
        ]));
        assert_eq!(
            builder.build(),
            "// Generated by components discovery\nexport {};\n"
        );
    }
}
