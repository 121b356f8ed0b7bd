//! Whole-module composition.

use crate::{
    ast::Import,
    builder::{CodeBuilder, CodeFragment, Renderable},
};

/// A generated ES module: an import block followed by body sections.
///
/// The import block and every body section are separated by one blank line.
/// Nodes added together through [`CodeFile::add_group`] share a section.
///
/// ```
/// use compwire_codegen::{CodeFile, ast::{Const, Import}};
///
/// let code = CodeFile::new()
///     .import(Import::new("vue").named("defineAsyncComponent"))
///     .add(Const::new("componentNames", "[]"))
///     .render();
///
/// assert_eq!(
///     code,
///     "import { defineAsyncComponent } from \"vue\";\n\nexport const componentNames = [];\n"
/// );
/// ```
#[derive(Default)]
pub struct CodeFile {
    imports: Vec<Import>,
    sections: Vec<Vec<CodeFragment>>,
}

impl CodeFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    /// Add a node as its own section.
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.sections.push(node.to_fragments());
        self
    }

    /// Add several nodes as one section. An empty group adds nothing.
    pub fn add_group<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        let section: Vec<CodeFragment> =
            nodes.into_iter().flat_map(|n| n.to_fragments()).collect();
        if !section.is_empty() {
            self.sections.push(section);
        }
        self
    }

    pub fn render(&self) -> String {
        let imports: Vec<CodeFragment> =
            self.imports.iter().flat_map(Renderable::to_fragments).collect();
        let sections = std::iter::once(imports)
            .filter(|block| !block.is_empty())
            .chain(self.sections.iter().cloned());

        let mut builder = CodeBuilder::js();
        for (i, section) in sections.enumerate() {
            if i > 0 {
                builder.blank();
            }
            for fragment in section {
                builder.apply(fragment);
            }
        }
        builder.build()
    }
}
