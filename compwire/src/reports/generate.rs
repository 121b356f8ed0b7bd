//! Generate command report data structures.

use std::path::PathBuf;

use compwire_codegen::PreviewFile;

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Number of components in the manifest.
    pub component_count: usize,

    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Output directory.
    pub output_dir: PathBuf,
    /// Files whose content changed.
    pub written: Vec<String>,
    /// Files already up to date.
    pub unchanged: Vec<String>,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.key_value("Components", &self.component_count.to_string());
        out.key_value("Generated", &written.output_dir.display().to_string());

        if !written.written.is_empty() {
            out.newline();
            out.section("Written");
            for path in &written.written {
                out.added_item(path);
            }
        }

        if !written.unchanged.is_empty() {
            out.newline();
            out.section("Unchanged");
            for path in &written.unchanged {
                out.list_item(path);
            }
        }

        if written.written.is_empty() {
            out.newline();
            out.preformatted("Everything is up to date");
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!(
            "{} files would be generated for {} components",
            preview.files.len(),
            self.component_count
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::render_to_string;

    #[test]
    fn test_written_report() {
        let report = GenerateReport {
            component_count: 2,
            result: GenerationResult::Written(WrittenResult {
                output_dir: PathBuf::from(".nuxt"),
                written: vec!["components.d.ts".to_string()],
                unchanged: vec!["components.plugin.mjs".to_string()],
            }),
        };

        assert_eq!(
            render_to_string(&report),
            "Components: 2\nGenerated: .nuxt\n\nWritten:\n  + components.d.ts\n\nUnchanged:\n  - components.plugin.mjs\n"
        );
    }

    #[test]
    fn test_nothing_written() {
        let report = GenerateReport {
            component_count: 0,
            result: GenerationResult::Written(WrittenResult {
                output_dir: PathBuf::from("out"),
                written: vec![],
                unchanged: vec!["components.d.ts".to_string()],
            }),
        };

        assert!(render_to_string(&report).ends_with("\n\nEverything is up to date\n"));
    }

    #[test]
    fn test_preview_report() {
        let report = GenerateReport {
            component_count: 1,
            result: GenerationResult::Preview(PreviewResult {
                files: vec![PreviewFile {
                    path: "components.islands.mjs".to_string(),
                    content: "export {};".to_string(),
                }],
            }),
        };

        assert_eq!(
            render_to_string(&report),
            "── components.islands.mjs ──\nexport {};\n── Summary ──\n1 files would be generated for 1 components\n"
        );
    }
}
