//! components.islands.mjs generator.

use std::path::{Path, PathBuf};

use compwire_codegen::{
    CodeFile,
    ast::{Const, Import},
};
use compwire_core::{Component, GeneratedFile};

use super::VUE_MODULE;
use crate::lazy_loader;

/// Module exposing island components. Islands are always loaded on demand,
/// so each one is exported only as a lazy wrapper under its own name.
pub struct ComponentsIslands<'a> {
    components: &'a [Component],
}

impl<'a> ComponentsIslands<'a> {
    pub const FILENAME: &'static str = "components.islands.mjs";

    pub fn new(components: &'a [Component]) -> Self {
        Self { components }
    }

    fn islands(&self) -> impl Iterator<Item = &'a Component> {
        self.components.iter().filter(|c| c.island)
    }
}

impl GeneratedFile for ComponentsIslands<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(Self::FILENAME)
    }

    fn render(&self) -> String {
        CodeFile::new()
            .import(Import::new(VUE_MODULE).named("defineAsyncComponent"))
            .add_group(
                self.islands()
                    .map(|c| Const::new(&c.pascal_name, lazy_loader(c))),
            )
            .render()
    }
}
