//! Const declaration builder.

use crate::builder::{CodeBuilder, CodeFragment, Renderable};

/// Builder for `const` declarations.
///
/// A const without a value renders as an ambient declaration
/// (`export const Foo: Type;`), which is what `.d.ts` files need.
#[derive(Debug, Clone)]
pub struct Const {
    name: String,
    value: Option<String>,
    ty: Option<String>,
    exported: bool,
}

impl Const {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
            ty: None,
            exported: true,
        }
    }

    /// Create a value-less declaration with a type annotation.
    pub fn declare(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            ty: Some(ty.into()),
            exported: true,
        }
    }

    /// Add a type annotation.
    pub fn ty(mut self, ty: impl Into<String>) -> Self {
        self.ty = Some(ty.into());
        self
    }

    /// Make this const private (not exported).
    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    fn head(&self) -> String {
        let export = if self.exported { "export " } else { "" };
        match &self.ty {
            Some(ty) => format!("{}const {}: {}", export, self.name, ty),
            None => format!("{}const {}", export, self.name),
        }
    }

    /// Build the const declaration as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::js();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Const {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let Some(value) = &self.value else {
            return vec![CodeFragment::line(format!("{};", self.head()))];
        };

        let mut lines: Vec<String> = value.lines().map(str::to_string).collect();
        if lines.is_empty() {
            lines.push(String::new());
        }
        lines[0] = format!("{} = {}", self.head(), lines[0]);
        if let Some(last) = lines.last_mut() {
            last.push(';');
        }
        lines.into_iter().map(CodeFragment::Line).collect()
    }
}
