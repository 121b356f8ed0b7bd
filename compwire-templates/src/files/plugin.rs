//! components.plugin.mjs generator.

use std::path::{Path, PathBuf};

use compwire_codegen::{
    CodeFile, CodeFragment,
    ast::{Const, Import, JsObject},
};
use compwire_core::{Component, GeneratedFile};

use super::{APP_MODULE, VUE_MODULE};
use crate::lazy_loader;

/// Plugin registering every global component on the Vue app, once under its
/// name and once under a `Lazy`-prefixed alias sharing the same loader.
pub struct ComponentsPlugin<'a> {
    components: &'a [Component],
}

impl<'a> ComponentsPlugin<'a> {
    pub const FILENAME: &'static str = "components.plugin.mjs";

    pub fn new(components: &'a [Component]) -> Self {
        Self { components }
    }

    fn globals(&self) -> impl Iterator<Item = &'a Component> {
        self.components.iter().filter(|c| c.global)
    }

    fn registration() -> CodeFragment {
        CodeFragment::block(
            "export default defineNuxtPlugin(nuxtApp => {",
            vec![CodeFragment::block(
                "for (const name in components) {",
                vec![
                    CodeFragment::line("nuxtApp.vueApp.component(name, components[name]);"),
                    CodeFragment::line(
                        "nuxtApp.vueApp.component(\"Lazy\" + name, components[name]);",
                    ),
                ],
                "}",
            )],
            "});",
        )
    }
}

impl GeneratedFile for ComponentsPlugin<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(Self::FILENAME)
    }

    fn render(&self) -> String {
        let components = JsObject::from_entries(
            self.globals()
                .map(|c| (c.pascal_name.as_str(), lazy_loader(c))),
        );

        CodeFile::new()
            .import(Import::new(VUE_MODULE).named("defineAsyncComponent"))
            .import(Import::new(APP_MODULE).named("defineNuxtPlugin"))
            .add(Const::new("components", components.build()).private())
            .add(Self::registration())
            .render()
    }
}
