//! The fragment model shared by every syntax node.
//!
//! Nodes describe their output as [`CodeFragment`]s and leave indentation
//! to [`CodeBuilder`](super::CodeBuilder).

#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A statement or expression line.
    Line(String),
    /// `header`, then `body` one level deeper, then `close` at the header's level.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: String,
    },
    /// Fragments emitted in order at the current level.
    Sequence(Vec<CodeFragment>),
    /// A `//` comment line.
    Comment(String),
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn block(
        header: impl Into<String>,
        body: Vec<CodeFragment>,
        close: impl Into<String>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close: close.into(),
        }
    }

    pub fn sequence(fragments: Vec<CodeFragment>) -> Self {
        Self::Sequence(fragments)
    }

    pub fn comment(s: impl Into<String>) -> Self {
        Self::Comment(s.into())
    }
}

/// A syntax node that can describe itself as code fragments.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl Renderable for CodeFragment {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![self.clone()]
    }
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (**self).to_fragments()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_renders_itself() {
        let comment = CodeFragment::comment("Generated by components discovery");
        assert_eq!(comment.to_fragments(), vec![comment.clone()]);
    }

    #[test]
    fn test_reference_renders_like_value() {
        fn fragments_of(node: impl Renderable) -> Vec<CodeFragment> {
            node.to_fragments()
        }

        let line = CodeFragment::line("export const componentNames = [];");
        assert_eq!(fragments_of(&line), line.to_fragments());
    }
}
