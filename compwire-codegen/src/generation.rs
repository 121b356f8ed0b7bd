//! Generator abstraction shared by the template sets.

use std::path::Path;

use eyre::Result;

/// Renders a fixed set of modules from a component list.
pub trait Codegen {
    /// Render every module in memory. Nothing touches the disk.
    fn preview(&self) -> Vec<PreviewFile>;

    /// Write every module below `output_dir`, skipping files already up to date.
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

/// One rendered module, keyed by its path relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files whose content was written
    pub written: Vec<String>,
    /// Files left untouched because their content was already up to date
    pub unchanged: Vec<String>,
}

impl GenerateResult {
    /// Whether any file on disk changed.
    pub fn has_changes(&self) -> bool {
        !self.written.is_empty()
    }
}
