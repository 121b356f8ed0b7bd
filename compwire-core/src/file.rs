use std::path::{Path, PathBuf};

use eyre::Result;

/// A module the generator renders and writes below an output directory.
pub trait GeneratedFile {
    /// Location of the file below `base`.
    fn path(&self, base: &Path) -> PathBuf;

    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    fn render(&self) -> String;

    /// Write the rendered content using the file's own rules.
    fn write(&self, base: &Path) -> Result<WriteResult> {
        self.write_with(base, &self.rules())
    }

    /// Write the rendered content, overriding the file's rules.
    fn write_with(&self, base: &Path, rules: &FileRules) -> Result<WriteResult> {
        let path = self.path(base);
        let content = self.render();

        if rules.overwrite == Overwrite::IfChanged
            && path.exists()
            && std::fs::read_to_string(&path)? == content
        {
            return Ok(WriteResult::Unchanged);
        }

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, content)?;
        Ok(WriteResult::Written)
    }
}

/// Outcome of writing one generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    Written,
    /// The file on disk already had the rendered content.
    Unchanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

impl FileRules {
    pub fn always_overwrite() -> Self {
        Self {
            overwrite: Overwrite::Always,
        }
    }

    pub fn if_changed() -> Self {
        Self {
            overwrite: Overwrite::IfChanged,
        }
    }
}

impl Default for FileRules {
    fn default() -> Self {
        Self::if_changed()
    }
}

/// What to do when the target file already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Rewrite it even if the content is identical.
    Always,
    /// Leave it untouched when the content is identical, so bundler watchers stay quiet.
    IfChanged,
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    struct Barrel(&'static str);

    impl GeneratedFile for Barrel {
        fn path(&self, base: &Path) -> PathBuf {
            base.join("nested").join("components.client.mjs")
        }

        fn render(&self) -> String {
            self.0.to_string()
        }
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let barrel = Barrel("export const componentNames = [];\n");

        assert_eq!(barrel.write(temp.path()).unwrap(), WriteResult::Written);
        assert_eq!(
            fs::read_to_string(temp.path().join("nested/components.client.mjs")).unwrap(),
            "export const componentNames = [];\n"
        );
    }

    #[test]
    fn test_identical_content_is_left_alone() {
        let temp = TempDir::new().unwrap();

        let first = Barrel("export const componentNames = [];\n");
        assert_eq!(first.write(temp.path()).unwrap(), WriteResult::Written);
        assert_eq!(first.write(temp.path()).unwrap(), WriteResult::Unchanged);

        let updated = Barrel("export const componentNames = [\"Foo\"];\n");
        assert_eq!(updated.write(temp.path()).unwrap(), WriteResult::Written);
        assert_eq!(
            fs::read_to_string(updated.path(temp.path())).unwrap(),
            "export const componentNames = [\"Foo\"];\n"
        );
    }

    #[test]
    fn test_always_overwrite_rewrites_identical_content() {
        let temp = TempDir::new().unwrap();
        let barrel = Barrel("export {};\n");
        barrel.write(temp.path()).unwrap();

        let result = barrel
            .write_with(temp.path(), &FileRules::always_overwrite())
            .unwrap();
        assert_eq!(result, WriteResult::Written);
    }

    #[test]
    fn test_default_rules_compare_content() {
        assert_eq!(FileRules::default().overwrite, Overwrite::IfChanged);
    }
}
