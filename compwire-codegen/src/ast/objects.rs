//! Object literal builder.

use super::object_key;
use crate::builder::Indent;

/// Builder for object literals from raw `key: expression` entries.
///
/// Keys are emitted bare when they are identifiers and quoted otherwise;
/// values are emitted verbatim.
#[derive(Debug, Clone, Default)]
pub struct JsObject {
    entries: Vec<(String, String)>,
}

impl JsObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an object from `(key, value)` pairs.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        entries
            .into_iter()
            .fold(Self::new(), |obj, (k, v)| obj.entry(k.as_ref(), v))
    }

    /// Add an entry.
    pub fn entry(mut self, key: &str, value: impl Into<String>) -> Self {
        self.entries.push((object_key(key), value.into()));
        self
    }

    /// Render the object as an expression, one entry per line.
    pub fn build(&self) -> String {
        if self.entries.is_empty() {
            return "{}".to_string();
        }

        let body = self
            .entries
            .iter()
            .map(|(key, value)| Indent::JS.prefix_lines(&format!("{}: {}", key, value)))
            .collect::<Vec<_>>()
            .join(",\n");

        format!("{{\n{}\n}}", body)
    }
}
