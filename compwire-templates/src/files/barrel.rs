//! components.{client,server}.mjs generator.

use std::path::{Path, PathBuf};

use compwire_codegen::{
    CodeFile, CodeFragment, Renderable,
    ast::{Const, Export, Import, JsArray},
};
use compwire_core::{Component, GeneratedFile, Mode};

use super::VUE_MODULE;
use crate::lazy_loader;

/// Barrel module re-exporting the non-island components available in a mode.
///
/// Every component is exported eagerly under its name and lazily under
/// `Lazy<Name>`; `componentNames` lists the included names in order.
pub struct ComponentsBarrel<'a> {
    components: &'a [Component],
    mode: Option<Mode>,
}

impl<'a> ComponentsBarrel<'a> {
    pub fn new(components: &'a [Component], mode: Option<Mode>) -> Self {
        Self { components, mode }
    }

    /// File name for the barrel, e.g. `components.client.mjs`.
    pub fn filename(&self) -> String {
        match self.mode {
            Some(mode) => format!("components.{}.mjs", mode),
            None => "components.mjs".to_string(),
        }
    }

    /// Components included in this barrel, in input order.
    pub fn included(&self) -> impl Iterator<Item = &'a Component> {
        let mode = self.mode;
        self.components
            .iter()
            .filter(move |c| !c.island && c.matches_mode(mode))
    }

    fn component_exports(component: &Component) -> Vec<CodeFragment> {
        let eager = Export::new()
            .from(&component.file_path)
            .named_as(component.export.as_str(), &component.pascal_name);
        let lazy = Const::new(component.lazy_name(), lazy_loader(component));

        let mut fragments = eager.to_fragments();
        fragments.extend(lazy.to_fragments());
        fragments
    }
}

impl GeneratedFile for ComponentsBarrel<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.filename())
    }

    fn render(&self) -> String {
        let names = JsArray::from_strings(self.included().map(|c| c.pascal_name.as_str()));

        CodeFile::new()
            .import(Import::new(VUE_MODULE).named("defineAsyncComponent"))
            .add_group(self.included().flat_map(Self::component_exports))
            .add(Const::new("componentNames", names.build()))
            .render()
    }
}

#[cfg(test)]
mod tests {
    use compwire_core::ComponentMode;

    use super::*;

    fn fixture() -> Vec<Component> {
        vec![
            Component::new("Foo", "/app/Foo.vue"),
            Component::new("Nav", "/app/Nav.client.vue").mode(ComponentMode::Client),
            Component::new("Chart", "/app/Chart.server.vue").mode(ComponentMode::Server),
            Component::new("Island", "/app/Island.vue").island(true),
            Component::new("Card", "/app/ui.ts").export("Card"),
        ]
    }

    #[test]
    fn test_filename() {
        let components = fixture();
        assert_eq!(
            ComponentsBarrel::new(&components, Some(Mode::Client)).filename(),
            "components.client.mjs"
        );
        assert_eq!(
            ComponentsBarrel::new(&components, Some(Mode::Server)).filename(),
            "components.server.mjs"
        );
        assert_eq!(
            ComponentsBarrel::new(&components, None).filename(),
            "components.mjs"
        );
    }

    #[test]
    fn test_component_names_follow_mode() {
        let components = fixture();

        let client = ComponentsBarrel::new(&components, Some(Mode::Client)).render();
        assert!(client.contains("export const componentNames = [\"Foo\", \"Nav\", \"Card\"];"));

        let server = ComponentsBarrel::new(&components, Some(Mode::Server)).render();
        assert!(server.contains("export const componentNames = [\"Foo\", \"Chart\", \"Card\"];"));

        let all = ComponentsBarrel::new(&components, None).render();
        assert!(
            all.contains("export const componentNames = [\"Foo\", \"Nav\", \"Chart\", \"Card\"];")
        );
    }

    #[test]
    fn test_islands_are_excluded() {
        let components = fixture();
        let code = ComponentsBarrel::new(&components, None).render();
        assert!(!code.contains("Island"));
    }

    #[test]
    fn test_eager_and_lazy_exports() {
        let components = fixture();
        let code = ComponentsBarrel::new(&components, Some(Mode::Client)).render();

        assert!(code.contains("export { default as Foo } from \"/app/Foo.vue\";"));
        assert!(code.contains("export const LazyFoo = defineAsyncComponent("));
        assert!(code.contains("export { Card } from \"/app/ui.ts\";"));
        assert!(code.contains(".then(c => c[\"Card\"]));"));
    }

    #[test]
    fn test_empty_barrel() {
        let code = ComponentsBarrel::new(&[], Some(Mode::Client)).render();
        assert_eq!(
            code,
            "import { defineAsyncComponent } from \"vue\";\n\nexport const componentNames = [];\n"
        );
    }
}
