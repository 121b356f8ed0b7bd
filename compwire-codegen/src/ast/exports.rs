//! Export statements.

use super::js_string;
use crate::builder::{CodeBuilder, CodeFragment, Renderable};

/// A single `name` or `name as alias` specifier.
#[derive(Debug, Clone)]
struct Specifier {
    name: String,
    alias: Option<String>,
}

impl Specifier {
    fn render(&self) -> String {
        match &self.alias {
            Some(alias) if alias != &self.name => format!("{} as {}", self.name, alias),
            _ => self.name.clone(),
        }
    }
}

/// `export { ... };`, `export { ... } from "m";` or `export * from "m";`.
///
/// An export with neither specifiers nor a source module renders nothing.
#[derive(Debug, Clone, Default)]
pub struct Export {
    source: Option<String>,
    specifiers: Vec<Specifier>,
}

impl Export {
    pub fn new() -> Self {
        Self {
            source: None,
            specifiers: Vec::new(),
        }
    }

    /// Re-export from another module.
    pub fn from(mut self, module: impl Into<String>) -> Self {
        self.source = Some(module.into());
        self
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.specifiers.push(Specifier {
            name: name.into(),
            alias: None,
        });
        self
    }

    /// Export `name` under `alias`. The alias is dropped when it equals the name.
    pub fn named_as(mut self, name: impl Into<String>, alias: impl Into<String>) -> Self {
        self.specifiers.push(Specifier {
            name: name.into(),
            alias: Some(alias.into()),
        });
        self
    }

    fn statement(&self) -> Option<String> {
        let from = self
            .source
            .as_ref()
            .map(|m| format!(" from {}", js_string(m)));

        if self.specifiers.is_empty() {
            return from.map(|from| format!("export *{};", from));
        }

        let names = self
            .specifiers
            .iter()
            .map(Specifier::render)
            .collect::<Vec<_>>()
            .join(", ");
        Some(format!("export {{ {} }}{};", names, from.unwrap_or_default()))
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::js();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Export {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.statement().map(CodeFragment::line).into_iter().collect()
    }
}
