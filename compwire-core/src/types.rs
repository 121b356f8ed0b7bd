//! Component descriptor model.

use std::fmt;

use serde::Deserialize;

use crate::to_kebab_case;

/// Which export of the component module to bind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum ExportName {
    /// The module's `default` export.
    #[default]
    Default,
    /// A named export.
    Named(String),
}

impl ExportName {
    pub fn is_default(&self) -> bool {
        matches!(self, Self::Default)
    }

    /// The export name as written in source.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Default => "default",
            Self::Named(name) => name,
        }
    }
}

impl From<String> for ExportName {
    fn from(name: String) -> Self {
        if name == "default" {
            Self::Default
        } else {
            Self::Named(name)
        }
    }
}

impl From<&str> for ExportName {
    fn from(name: &str) -> Self {
        Self::from(name.to_string())
    }
}

impl fmt::Display for ExportName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A prefetch/preload hint: either a flag or a numeric priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LoadHint {
    Bool(bool),
    Priority(i64),
}

impl LoadHint {
    /// The directive value to emit, or `None` when the hint is disabled.
    pub fn directive_value(&self) -> Option<String> {
        match self {
            Self::Bool(true) => Some("true".to_string()),
            Self::Bool(false) => None,
            Self::Priority(n) => Some(n.to_string()),
        }
    }
}

/// Rendering modes a component is available in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentMode {
    Client,
    Server,
    #[default]
    All,
}

impl ComponentMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Server => "server",
            Self::All => "all",
        }
    }
}

/// Target of a barrel module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Client,
    Server,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Client, Mode::Server];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Server => "server",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A discovered component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    pub pascal_name: String,
    pub kebab_name: String,
    pub file_path: String,
    pub export: ExportName,
    pub global: bool,
    pub island: bool,
    pub mode: ComponentMode,
    pub chunk_name: String,
    pub prefetch: Option<LoadHint>,
    pub preload: Option<LoadHint>,
}

impl Component {
    /// Create a component bound to the default export, chunked as `components/<kebab-name>`.
    pub fn new(pascal_name: impl Into<String>, file_path: impl Into<String>) -> Self {
        let pascal_name = pascal_name.into();
        let kebab_name = to_kebab_case(&pascal_name);
        Self {
            chunk_name: format!("components/{}", kebab_name),
            pascal_name,
            kebab_name,
            file_path: file_path.into(),
            export: ExportName::Default,
            global: false,
            island: false,
            mode: ComponentMode::All,
            prefetch: None,
            preload: None,
        }
    }

    pub fn export(mut self, export: impl Into<ExportName>) -> Self {
        self.export = export.into();
        self
    }

    pub fn global(mut self, global: bool) -> Self {
        self.global = global;
        self
    }

    pub fn island(mut self, island: bool) -> Self {
        self.island = island;
        self
    }

    pub fn mode(mut self, mode: ComponentMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn chunk_name(mut self, chunk_name: impl Into<String>) -> Self {
        self.chunk_name = chunk_name.into();
        self
    }

    pub fn prefetch(mut self, hint: LoadHint) -> Self {
        self.prefetch = Some(hint);
        self
    }

    pub fn preload(mut self, hint: LoadHint) -> Self {
        self.preload = Some(hint);
        self
    }

    /// Whether the component belongs in a barrel for `mode`.
    ///
    /// `None` matches every component.
    pub fn matches_mode(&self, mode: Option<Mode>) -> bool {
        match (mode, self.mode) {
            (None, _) | (_, ComponentMode::All) => true,
            (Some(Mode::Client), ComponentMode::Client) => true,
            (Some(Mode::Server), ComponentMode::Server) => true,
            _ => false,
        }
    }

    /// Name of the lazily-loaded alias.
    pub fn lazy_name(&self) -> String {
        format!("Lazy{}", self.pascal_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let c = Component::new("FooBar", "~/components/FooBar.vue");
        assert_eq!(c.kebab_name, "foo-bar");
        assert_eq!(c.chunk_name, "components/foo-bar");
        assert_eq!(c.export, ExportName::Default);
        assert_eq!(c.mode, ComponentMode::All);
        assert!(!c.global);
        assert!(!c.island);
        assert_eq!(c.lazy_name(), "LazyFooBar");
    }

    #[test]
    fn test_export_name_from_str() {
        assert_eq!(ExportName::from("default"), ExportName::Default);
        assert_eq!(
            ExportName::from("Button"),
            ExportName::Named("Button".to_string())
        );
        assert_eq!(ExportName::from("Button").to_string(), "Button");
    }

    #[test]
    fn test_matches_mode() {
        let client = Component::new("A", "a.vue").mode(ComponentMode::Client);
        let server = Component::new("B", "b.vue").mode(ComponentMode::Server);
        let all = Component::new("C", "c.vue");

        assert!(client.matches_mode(Some(Mode::Client)));
        assert!(!client.matches_mode(Some(Mode::Server)));
        assert!(server.matches_mode(Some(Mode::Server)));
        assert!(!server.matches_mode(Some(Mode::Client)));
        assert!(all.matches_mode(Some(Mode::Client)));
        assert!(all.matches_mode(Some(Mode::Server)));
        assert!(client.matches_mode(None));
        assert!(server.matches_mode(None));
    }

    #[test]
    fn test_load_hint_directive_value() {
        assert_eq!(LoadHint::Bool(true).directive_value().as_deref(), Some("true"));
        assert_eq!(LoadHint::Bool(false).directive_value(), None);
        assert_eq!(LoadHint::Priority(2).directive_value().as_deref(), Some("2"));
    }

    #[test]
    fn test_deserialize_hints_and_mode() {
        #[derive(Deserialize)]
        struct Raw {
            prefetch: LoadHint,
            preload: LoadHint,
            mode: ComponentMode,
            export: ExportName,
        }

        let raw: Raw = toml::from_str(
            r#"
            prefetch = true
            preload = 3
            mode = "server"
            export = "Card"
            "#,
        )
        .unwrap();

        assert_eq!(raw.prefetch, LoadHint::Bool(true));
        assert_eq!(raw.preload, LoadHint::Priority(3));
        assert_eq!(raw.mode, ComponentMode::Server);
        assert_eq!(raw.export, ExportName::Named("Card".to_string()));
    }
}
