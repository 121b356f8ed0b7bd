//! Dynamic `import()` expression builder.

use super::js_string;

/// Builder for dynamic import expressions.
///
/// By default the import is wrapped in a loader arrow
/// (`() => import("./Foo.vue")`) so it can be handed to lazy APIs.
#[derive(Debug, Clone)]
pub struct DynamicImport {
    specifier: String,
    comment: Option<String>,
    wrapper: bool,
}

impl DynamicImport {
    pub fn new(specifier: impl Into<String>) -> Self {
        Self {
            specifier: specifier.into(),
            comment: None,
            wrapper: true,
        }
    }

    /// Attach an inline `/* ... */` comment after the specifier.
    ///
    /// Empty comments are ignored.
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        let comment = comment.into();
        self.comment = (!comment.is_empty()).then_some(comment);
        self
    }

    /// Drop the `() =>` wrapper (for `typeof import(...)` in type positions).
    pub fn bare(mut self) -> Self {
        self.wrapper = false;
        self
    }

    /// Render the expression.
    pub fn build(&self) -> String {
        let wrapper = if self.wrapper { "() => " } else { "" };
        let comment = self
            .comment
            .as_ref()
            .map(|c| format!(" /* {} */", c))
            .unwrap_or_default();
        format!("{}import({}{})", wrapper, js_string(&self.specifier), comment)
    }
}
