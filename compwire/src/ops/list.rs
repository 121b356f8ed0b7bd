//! List operation - component overview.

use compwire_core::ComponentMode;
use compwire_manifest::ComponentsToml;

use crate::reports::{ComponentSummary, ListReport};

/// Execute the list operation.
pub fn list(file: &ComponentsToml) -> ListReport {
    let components = file
        .manifest()
        .components()
        .into_iter()
        .map(|c| {
            let mut flags = Vec::new();
            if c.global {
                flags.push("global".to_string());
            }
            if c.island {
                flags.push("island".to_string());
            }
            if c.mode != ComponentMode::All {
                flags.push(c.mode.as_str().to_string());
            }
            if !c.export.is_default() {
                flags.push(format!("export {}", c.export));
            }

            ComponentSummary {
                name: c.pascal_name,
                path: c.file_path,
                flags,
            }
        })
        .collect();

    ListReport { components }
}
