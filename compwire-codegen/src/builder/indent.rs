//! Indentation unit for generated modules.

/// One level of indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent(&'static str);

impl Indent {
    /// Two spaces, as used by every generated module.
    pub const JS: Self = Self("  ");

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Indent every non-empty line of `text` by one level.
    pub fn prefix_lines(&self, text: &str) -> String {
        text.lines()
            .map(|line| {
                if line.is_empty() {
                    String::new()
                } else {
                    format!("{}{}", self.0, line)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
