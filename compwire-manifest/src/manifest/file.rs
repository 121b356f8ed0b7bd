use std::path::{Path, PathBuf};

use compwire_core::{Component, paths};

use super::{Manifest, parse::read_manifest};
use crate::{Error, Result};

/// A components.toml file with its raw content and parsed manifest.
///
/// Relative locations in the manifest are resolved against the directory
/// that contains the file.
#[derive(Debug)]
pub struct ComponentsToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl ComponentsToml {
    /// Open and parse a components.toml file.
    ///
    /// A relative `path` is anchored at the current working directory, so
    /// every location derived from the manifest is absolute.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = read_manifest(path)?;
        let manifest = Manifest::from_str_with_filename(&content, &path.display().to_string())?;
        let path = std::path::absolute(path).map_err(|source| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source,
            })
        })?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Directory containing the manifest.
    pub fn root(&self) -> &Path {
        self.path.parent().unwrap_or(&self.path)
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            PathBuf::from(paths::normalize(
                &self.root().join(path).display().to_string(),
            ))
        }
    }

    /// Build directory, resolved against the manifest directory.
    pub fn build_dir(&self) -> PathBuf {
        self.resolve(&self.manifest.project.build_dir)
    }

    /// Output directory, resolved against the manifest directory.
    pub fn output_dir(&self) -> PathBuf {
        match &self.manifest.project.output_dir {
            Some(dir) => self.resolve(dir),
            None => self.build_dir(),
        }
    }

    /// Component descriptors with `./` and `../` paths resolved against the
    /// manifest directory. Aliases and package specifiers are kept as written.
    pub fn components(&self) -> Vec<Component> {
        self.manifest
            .components
            .iter()
            .map(|entry| {
                let path = &entry.path;
                if path.starts_with("./") || path.starts_with("../") {
                    let resolved = self.resolve(Path::new(path));
                    entry.to_component_with_path(resolved.display().to_string())
                } else {
                    entry.to_component()
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn write_manifest(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("components.toml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_resolves_relative_dirs() {
        let temp = TempDir::new().unwrap();
        let path = write_manifest(
            temp.path(),
            r#"
            [project]
            build_dir = "./.nuxt"
            "#,
        );

        let toml = ComponentsToml::open(&path).unwrap();
        let root = paths::normalize(&temp.path().display().to_string());
        assert_eq!(toml.build_dir(), PathBuf::from(format!("{}/.nuxt", root)));
        assert_eq!(toml.output_dir(), toml.build_dir());
    }

    #[test]
    fn test_absolute_dirs_are_kept() {
        let temp = TempDir::new().unwrap();
        let path = write_manifest(
            temp.path(),
            r#"
            [project]
            build_dir = "/srv/app/.nuxt"
            output_dir = "/srv/out"
            "#,
        );

        let toml = ComponentsToml::open(&path).unwrap();
        assert_eq!(toml.build_dir(), PathBuf::from("/srv/app/.nuxt"));
        assert_eq!(toml.output_dir(), PathBuf::from("/srv/out"));
    }

    #[test]
    fn test_component_paths() {
        let temp = TempDir::new().unwrap();
        let path = write_manifest(
            temp.path(),
            r#"
            [[components]]
            path = "./components/Foo.vue"

            [[components]]
            path = "~/components/Bar.vue"
            "#,
        );

        let toml = ComponentsToml::open(&path).unwrap();
        let components = toml.components();
        let root = paths::normalize(&temp.path().display().to_string());

        assert_eq!(
            components[0].file_path,
            format!("{}/components/Foo.vue", root)
        );
        assert_eq!(components[1].file_path, "~/components/Bar.vue");
    }

    #[test]
    fn test_relative_manifest_path_resolves_to_absolute() {
        let temp = tempfile::Builder::new().tempdir_in(".").unwrap();
        write_manifest(
            temp.path(),
            r#"
            [[components]]
            path = "./components/Foo.vue"
            "#,
        );
        let cwd = std::env::current_dir().unwrap();
        let relative = temp
            .path()
            .strip_prefix(&cwd)
            .unwrap_or(temp.path())
            .join("components.toml");

        let toml = ComponentsToml::open(&relative).unwrap();
        assert!(toml.path().is_absolute());
        assert!(toml.build_dir().is_absolute());
        assert!(toml.output_dir().is_absolute());

        let component = &toml.components()[0];
        assert!(paths::is_absolute(&component.file_path));
        assert!(component.file_path.ends_with("/components/Foo.vue"));
    }

    #[test]
    fn test_open_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = ComponentsToml::open(temp.path().join("components.toml")).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
