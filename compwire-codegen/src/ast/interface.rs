//! Interface declaration builder.

use super::{js_string, object_key};
use crate::builder::{CodeBuilder, CodeFragment, Renderable};

/// Builder for TypeScript interfaces.
#[derive(Debug, Clone)]
pub struct Interface {
    name: String,
    fields: Vec<(String, String)>,
    exported: bool,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            exported: true,
        }
    }

    /// Add a field, quoting the key only when needed.
    pub fn field(mut self, name: &str, ty: impl Into<String>) -> Self {
        self.fields.push((object_key(name), ty.into()));
        self
    }

    /// Add a field with an always-quoted key.
    pub fn quoted_field(mut self, name: &str, ty: impl Into<String>) -> Self {
        self.fields.push((js_string(name), ty.into()));
        self
    }

    /// Make this interface private (not exported).
    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    /// Build the interface as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::js();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Interface {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let export = if self.exported { "export " } else { "" };

        if self.fields.is_empty() {
            return vec![CodeFragment::line(format!(
                "{}interface {} {{}}",
                export, self.name
            ))];
        }

        let body = self
            .fields
            .iter()
            .map(|(key, ty)| CodeFragment::line(format!("{}: {};", key, ty)))
            .collect();

        vec![CodeFragment::block(
            format!("{}interface {} {{", export, self.name),
            body,
            "}",
        )]
    }
}
