//! components.d.ts generator.

use std::path::{Path, PathBuf};

use compwire_codegen::{
    CodeFile, CodeFragment, Renderable,
    ast::{Const, DeclareModule, DynamicImport, Interface, js_string},
};
use compwire_core::{Component, GeneratedFile, paths};

use super::GENERATED_HEADER;

/// Type declarations for the non-island components.
///
/// Augments the registry module's `GlobalComponents` interface with every
/// component under its name and its `Lazy` alias, and declares the barrel's
/// exports as ambient constants.
pub struct ComponentsTypes<'a> {
    components: &'a [Component],
    build_dir: &'a str,
    registry_module: &'a str,
}

impl<'a> ComponentsTypes<'a> {
    pub const FILENAME: &'static str = "components.d.ts";

    pub fn new(components: &'a [Component], build_dir: &'a str, registry_module: &'a str) -> Self {
        Self {
            components,
            build_dir,
            registry_module,
        }
    }

    /// `typeof import("<path>")["<export>"]` for a component.
    pub fn component_type(&self, component: &Component) -> String {
        let specifier = paths::import_path(&component.file_path, self.build_dir);
        format!(
            "typeof {}[{}]",
            DynamicImport::new(specifier).bare().build(),
            js_string(component.export.as_str())
        )
    }

    fn component_types(&self) -> Vec<(&'a Component, String)> {
        self.components
            .iter()
            .filter(|c| !c.island)
            .map(|c| (c, self.component_type(c)))
            .collect()
    }
}

impl GeneratedFile for ComponentsTypes<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(Self::FILENAME)
    }

    fn render(&self) -> String {
        let types = self.component_types();

        let registry = types
            .iter()
            .map(|(c, ty)| (c.pascal_name.clone(), ty))
            .chain(types.iter().map(|(c, ty)| (c.lazy_name(), ty)))
            .fold(Interface::new("GlobalComponents"), |iface, (name, ty)| {
                iface.quoted_field(&name, ty.as_str())
            });
        let augmentation = DeclareModule::new(self.registry_module).add(registry);

        let declarations = types
            .iter()
            .map(|(c, ty)| Const::declare(&c.pascal_name, ty.as_str()))
            .chain(
                types
                    .iter()
                    .map(|(c, ty)| Const::declare(c.lazy_name(), ty.as_str())),
            );

        CodeFile::new()
            .add_group([
                CodeFragment::comment(GENERATED_HEADER),
                CodeFragment::sequence(augmentation.to_fragments()),
            ])
            .add_group(declarations)
            .add(Const::declare("componentNames", "string[]"))
            .render()
    }
}
