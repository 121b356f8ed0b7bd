//! Import statements.

use super::js_string;
use crate::builder::{CodeBuilder, CodeFragment, Renderable};

/// `import { a, b } from "m";`, or a bare `import "m";` when nothing is named.
#[derive(Debug, Clone)]
pub struct Import {
    from: String,
    named: Vec<String>,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            named: Vec::new(),
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::js();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let from = js_string(&self.from);
        let statement = if self.named.is_empty() {
            format!("import {};", from)
        } else {
            format!("import {{ {} }} from {};", self.named.join(", "), from)
        };
        vec![CodeFragment::line(statement)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_import() {
        let i = Import::new("vue").named("defineAsyncComponent").build();
        assert_eq!(i, "import { defineAsyncComponent } from \"vue\";\n");
    }

    #[test]
    fn test_several_names() {
        let i = Import::new("vue")
            .named("defineAsyncComponent")
            .named("h")
            .build();
        assert_eq!(i, "import { defineAsyncComponent, h } from \"vue\";\n");
    }

    #[test]
    fn test_side_effect_import() {
        assert_eq!(Import::new("#build/css").build(), "import \"#build/css\";\n");
    }
}
