//! Array literals.

use super::js_string;

/// A single-line array of string literals, e.g. `["Foo", "Bar"]`.
#[derive(Debug, Clone, Default)]
pub struct JsArray {
    items: Vec<String>,
}

impl JsArray {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_strings<I, S>(iter: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }

    pub fn push(mut self, value: impl Into<String>) -> Self {
        self.items.push(value.into());
        self
    }

    pub fn build(&self) -> String {
        let items = self
            .items
            .iter()
            .map(|s| js_string(s))
            .collect::<Vec<_>>()
            .join(", ");
        format!("[{}]", items)
    }
}
