//! Generate operation - component modules from a manifest.

use std::path::Path;

use compwire_manifest::ComponentsToml;
use compwire_templates::{Codegen, Generator};
use eyre::{Context, Result};

use crate::reports::{GenerateReport, GenerationResult, PreviewResult, WrittenResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Directory the generated files are written to.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// Whether to rewrite files whose content is unchanged.
    pub force: bool,
}

/// Execute the generate operation.
pub fn generate(file: &ComponentsToml, opts: GenerateOptions) -> Result<GenerateReport> {
    let generator = Generator::from_manifest(file).force(opts.force);

    let result = if opts.dry_run {
        GenerationResult::Preview(PreviewResult {
            files: generator.preview(),
        })
    } else {
        let generated = generator
            .generate(opts.output_dir)
            .wrap_err("Failed to generate code")?;

        GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            written: generated.written,
            unchanged: generated.unchanged,
        })
    };

    Ok(GenerateReport {
        component_count: generator.components().len(),
        result,
    })
}
