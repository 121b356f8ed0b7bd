//! Manifest types and parsing for components.toml files.

mod file;
mod parse;
mod validate;

use std::path::PathBuf;

use compwire_core::{Component, ComponentMode, ExportName, LoadHint, to_pascal_case};
pub use file::ComponentsToml;
pub use parse::parse_manifest;
use serde::Deserialize;

/// Root manifest for components.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Build settings
    #[serde(default)]
    pub project: ProjectConfig,

    /// Discovered components, in registration order
    #[serde(default)]
    pub components: Vec<ComponentEntry>,
}

/// The `[project]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Directory type declarations are resolved against
    #[serde(default = "default_build_dir")]
    pub build_dir: PathBuf,

    /// Where generated files are written (defaults to `build_dir`)
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// Module whose `GlobalComponents` interface is augmented
    #[serde(default = "default_registry_module")]
    pub registry_module: String,
}

fn default_build_dir() -> PathBuf {
    PathBuf::from(".nuxt")
}

fn default_registry_module() -> String {
    "@vue/runtime-core".to_string()
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            build_dir: default_build_dir(),
            output_dir: None,
            registry_module: default_registry_module(),
        }
    }
}

/// A `[[components]]` entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComponentEntry {
    /// Exported symbol name; derived from the file name when omitted
    #[serde(default)]
    pub name: Option<String>,
    pub path: String,
    #[serde(default)]
    pub export: ExportName,
    #[serde(default)]
    pub global: bool,
    #[serde(default)]
    pub island: bool,
    /// Inferred from a `.client`/`.server` file suffix when omitted
    #[serde(default)]
    pub mode: Option<ComponentMode>,
    #[serde(default)]
    pub chunk_name: Option<String>,
    #[serde(default)]
    pub prefetch: Option<LoadHint>,
    #[serde(default)]
    pub preload: Option<LoadHint>,
}

impl ComponentEntry {
    /// File name without directories, e.g. `Nav.client.vue`.
    fn file_name(&self) -> &str {
        self.path.rsplit(['/', '\\']).next().unwrap_or(&self.path)
    }

    /// The component's exported name.
    pub fn pascal_name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => {
                let stem = self.file_name().split('.').next().unwrap_or_default();
                to_pascal_case(stem)
            }
        }
    }

    /// The component's mode, falling back to the file suffix.
    pub fn mode(&self) -> ComponentMode {
        if let Some(mode) = self.mode {
            return mode;
        }
        let mut parts = self.file_name().split('.').skip(1);
        match parts.next() {
            Some("client") if parts.next().is_some() => ComponentMode::Client,
            Some("server") if parts.next().is_some() => ComponentMode::Server,
            _ => ComponentMode::All,
        }
    }

    /// Convert to a component descriptor using `file_path` as its module path.
    pub fn to_component_with_path(&self, file_path: impl Into<String>) -> Component {
        let mut component = Component::new(self.pascal_name(), file_path)
            .export(self.export.clone())
            .global(self.global)
            .island(self.island)
            .mode(self.mode());

        if let Some(chunk_name) = &self.chunk_name {
            component = component.chunk_name(chunk_name);
        }
        if let Some(hint) = self.prefetch {
            component = component.prefetch(hint);
        }
        if let Some(hint) = self.preload {
            component = component.preload(hint);
        }
        component
    }

    /// Convert to a component descriptor, keeping the path as written.
    pub fn to_component(&self) -> Component {
        self.to_component_with_path(self.path.clone())
    }
}

impl Manifest {
    /// Component descriptors in manifest order, paths as written.
    pub fn components(&self) -> Vec<Component> {
        self.components.iter().map(ComponentEntry::to_component).collect()
    }

    /// Look up a component entry by its exported name.
    pub fn find(&self, name: &str) -> Option<&ComponentEntry> {
        self.components.iter().find(|c| c.pascal_name() == name)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_defaults() {
        let manifest = Manifest::from_str(
            r#"
            [[components]]
            path = "~/components/base-button.vue"
            "#,
        )
        .unwrap();

        assert_eq!(manifest.project.build_dir, PathBuf::from(".nuxt"));
        assert_eq!(manifest.project.registry_module, "@vue/runtime-core");
        assert!(manifest.project.output_dir.is_none());

        let components = manifest.components();
        assert_eq!(components.len(), 1);
        let c = &components[0];
        assert_eq!(c.pascal_name, "BaseButton");
        assert_eq!(c.chunk_name, "components/base-button");
        assert_eq!(c.export, ExportName::Default);
        assert_eq!(c.mode, ComponentMode::All);
        assert!(!c.global);
        assert!(!c.island);
    }

    #[test]
    fn test_full_entry() {
        let manifest = Manifest::from_str(
            r#"
            [project]
            build_dir = "/app/.nuxt"
            output_dir = "/app/.nuxt/components"
            registry_module = "vue"

            [[components]]
            name = "Card"
            path = "/app/components/ui.ts"
            export = "Card"
            global = true
            mode = "client"
            chunk_name = "ui/card"
            prefetch = true
            preload = 4
            "#,
        )
        .unwrap();

        assert_eq!(manifest.project.build_dir, PathBuf::from("/app/.nuxt"));
        assert_eq!(
            manifest.project.output_dir,
            Some(PathBuf::from("/app/.nuxt/components"))
        );
        assert_eq!(manifest.project.registry_module, "vue");

        let c = &manifest.components()[0];
        assert_eq!(c.pascal_name, "Card");
        assert_eq!(c.export, ExportName::Named("Card".to_string()));
        assert!(c.global);
        assert_eq!(c.mode, ComponentMode::Client);
        assert_eq!(c.chunk_name, "ui/card");
        assert_eq!(c.prefetch, Some(LoadHint::Bool(true)));
        assert_eq!(c.preload, Some(LoadHint::Priority(4)));
    }

    #[test]
    fn test_mode_inferred_from_suffix() {
        let manifest = Manifest::from_str(
            r#"
            [[components]]
            path = "components/Nav.client.vue"

            [[components]]
            path = "components/Chart.server.vue"

            [[components]]
            path = "components/Clock.vue"

            [[components]]
            path = "components/Client.vue"
            "#,
        )
        .unwrap();

        let modes: Vec<_> = manifest.components().iter().map(|c| c.mode).collect();
        assert_eq!(
            modes,
            vec![
                ComponentMode::Client,
                ComponentMode::Server,
                ComponentMode::All,
                ComponentMode::All
            ]
        );
        assert_eq!(manifest.components()[0].pascal_name, "Nav");
    }

    #[test]
    fn test_explicit_mode_wins_over_suffix() {
        let manifest = Manifest::from_str(
            r#"
            [[components]]
            path = "components/Nav.client.vue"
            mode = "all"
            "#,
        )
        .unwrap();
        assert_eq!(manifest.components()[0].mode, ComponentMode::All);
    }

    #[test]
    fn test_find() {
        let manifest = Manifest::from_str(
            r#"
            [[components]]
            name = "Foo"
            path = "Foo.vue"
            "#,
        )
        .unwrap();
        assert!(manifest.find("Foo").is_some());
        assert!(manifest.find("Bar").is_none());
    }
}
