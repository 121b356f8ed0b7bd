//! Generator producing every component module for a project.

use std::path::Path;

use compwire_codegen::{Codegen, GenerateResult, PreviewFile};
use compwire_core::{Component, FileRules, GeneratedFile, Mode, WriteResult, paths};
use compwire_manifest::ComponentsToml;
use eyre::{Context, Result};

use crate::files::{ComponentsBarrel, ComponentsIslands, ComponentsPlugin, ComponentsTypes};

const DEFAULT_BUILD_DIR: &str = ".nuxt";
const DEFAULT_REGISTRY_MODULE: &str = "@vue/runtime-core";

/// Generator for the plugin, client/server barrels, islands module and
/// type declarations.
///
/// Holds no state besides its inputs: rendering the same components twice
/// yields byte-identical files.
pub struct Generator {
    components: Vec<Component>,
    build_dir: String,
    registry_module: String,
    force: bool,
}

impl Codegen for Generator {
    fn preview(&self) -> Vec<PreviewFile> {
        self.preview_files()
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        self.generate_files(output_dir)
    }
}

impl Generator {
    pub fn new(components: Vec<Component>) -> Self {
        Self {
            components,
            build_dir: absolute_dir(Path::new(DEFAULT_BUILD_DIR)),
            registry_module: DEFAULT_REGISTRY_MODULE.to_string(),
            force: false,
        }
    }

    /// Create a generator from a components.toml, resolving its paths.
    pub fn from_manifest(file: &ComponentsToml) -> Self {
        Self::new(file.components())
            .build_dir(file.build_dir())
            .registry_module(&file.manifest().project.registry_module)
    }

    /// Directory the type declarations resolve absolute component paths against.
    ///
    /// A relative directory is taken from the current working directory.
    pub fn build_dir(mut self, build_dir: impl AsRef<Path>) -> Self {
        self.build_dir = absolute_dir(build_dir.as_ref());
        self
    }

    /// Module whose `GlobalComponents` interface is augmented.
    pub fn registry_module(mut self, module: impl Into<String>) -> Self {
        self.registry_module = module.into();
        self
    }

    /// Rewrite every file on `generate`, even when its content is unchanged.
    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    fn files(&self) -> Vec<Box<dyn GeneratedFile + '_>> {
        let mut files: Vec<Box<dyn GeneratedFile + '_>> =
            vec![Box::new(ComponentsPlugin::new(&self.components))];
        for mode in Mode::ALL {
            files.push(Box::new(ComponentsBarrel::new(&self.components, Some(mode))));
        }
        files.push(Box::new(ComponentsIslands::new(&self.components)));
        files.push(Box::new(ComponentsTypes::new(
            &self.components,
            &self.build_dir,
            &self.registry_module,
        )));
        files
    }

    fn relative_path(file: &dyn GeneratedFile) -> String {
        file.path(Path::new("")).display().to_string()
    }

    /// Preview generated files without writing to disk.
    fn preview_files(&self) -> Vec<PreviewFile> {
        self.files()
            .iter()
            .map(|file| PreviewFile {
                path: Self::relative_path(&**file),
                content: file.render(),
            })
            .collect()
    }

    /// Write every file. Up-to-date files are left untouched unless forced.
    fn generate_files(&self, output_dir: &Path) -> Result<GenerateResult> {
        let mut result = GenerateResult::default();

        for file in self.files() {
            let path = Self::relative_path(&*file);
            let outcome = if self.force {
                file.write_with(output_dir, &FileRules::always_overwrite())
            } else {
                file.write(output_dir)
            }
            .wrap_err_with(|| format!("Failed to write {}", path))?;

            match outcome {
                WriteResult::Written => result.written.push(path),
                WriteResult::Unchanged => result.unchanged.push(path),
            }
        }

        Ok(result)
    }
}

fn absolute_dir(dir: &Path) -> String {
    let dir = std::path::absolute(dir).unwrap_or_else(|_| dir.to_path_buf());
    paths::normalize(&dir.display().to_string())
}
