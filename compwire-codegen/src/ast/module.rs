//! Ambient module declaration builder.

use super::js_string;
use crate::builder::{CodeBuilder, CodeFragment, Renderable};

/// Builder for `declare module "name" { ... }` blocks, used to augment
/// types exported by another package.
#[derive(Debug, Clone)]
pub struct DeclareModule {
    name: String,
    body: Vec<CodeFragment>,
}

impl DeclareModule {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: Vec::new(),
        }
    }

    /// Add a node to the module body.
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.extend(node.to_fragments());
        self
    }

    /// Build the declaration as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::js();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for DeclareModule {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::block(
            format!("declare module {} {{", js_string(&self.name)),
            self.body.clone(),
            "}",
        )]
    }
}
