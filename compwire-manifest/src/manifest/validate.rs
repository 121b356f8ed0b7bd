//! Validation context and utilities for manifest parsing.

use std::collections::HashMap;

use compwire_codegen::ast::{is_identifier, is_reserved_word};
use miette::SourceSpan;

use super::Manifest;
use crate::{Result, error::SourceContext};

/// Validation context that carries source information for diagnostics.
#[derive(Debug, Clone)]
pub(crate) struct ParseContext {
    source: SourceContext,
}

impl ParseContext {
    pub fn new(source: SourceContext) -> Self {
        Self { source }
    }

    /// Validate every component entry of the manifest.
    ///
    /// Names must be usable as exported symbols and unique, also against the
    /// `Lazy` aliases generated for other components. Every entry needs a
    /// module path.
    pub fn validate(&self, manifest: &Manifest) -> Result<()> {
        let mut seen: HashMap<String, usize> = HashMap::new();

        for entry in &manifest.components {
            let name = entry.pascal_name();
            self.validate_name(&name)?;

            if entry.path.trim().is_empty() {
                return Err(self.source.validation_error(
                    format!("component '{}' has an empty path", name),
                    find_value_spans(self.source.src(), "path", "").first().copied(),
                ));
            }

            let occurrence = seen.entry(name.clone()).or_insert(0);
            *occurrence += 1;
            if *occurrence > 1 {
                let spans = find_value_spans(self.source.src(), "name", &name);
                return Err(self.source.duplicate_component_error(
                    name,
                    spans.first().copied(),
                    spans.get(1).copied(),
                ));
            }
        }

        for entry in &manifest.components {
            let name = entry.pascal_name();
            let lazy = format!("Lazy{}", name);
            if seen.contains_key(&lazy) {
                let src = self.source.src();
                return Err(self.source.lazy_alias_collision_error(
                    lazy.clone(),
                    name.clone(),
                    find_value_spans(src, "name", &name).first().copied(),
                    find_value_spans(src, "name", &lazy).first().copied(),
                ));
            }
        }

        Ok(())
    }

    /// Validate that a component name is a usable JavaScript identifier.
    pub fn validate_name(&self, name: &str) -> Result<()> {
        let span = find_value_spans(self.source.src(), "name", name)
            .first()
            .copied();

        if is_reserved_word(name) {
            return Err(self.source.reserved_word_error(name, span));
        }
        if !is_identifier(name) {
            return Err(self.source.invalid_identifier_error(name, span));
        }
        Ok(())
    }
}

/// Find every span of `key = "value"` string values in the TOML source.
///
/// The span covers the value without its quotes. Both quote styles and
/// optional whitespace around `=` are recognized.
pub(crate) fn find_value_spans(src: &str, key: &str, value: &str) -> Vec<SourceSpan> {
    let mut spans = Vec::new();

    for (line_start, line) in line_offsets(src) {
        let trimmed = line.trim_start();
        let indent = line.len() - trimmed.len();

        let Some(rest) = trimmed.strip_prefix(key) else {
            continue;
        };
        let after_key = rest.trim_start();
        let Some(after_eq) = after_key.strip_prefix('=') else {
            continue;
        };
        let literal = after_eq.trim_start();

        for quote in ['"', '\''] {
            let Some(inner) = literal.strip_prefix(quote) else {
                continue;
            };
            if inner.strip_prefix(value).is_some_and(|r| r.starts_with(quote)) {
                let offset = line_start + indent + (trimmed.len() - inner.len());
                spans.push(SourceSpan::from((offset, value.len())));
            }
        }
    }

    spans
}

fn line_offsets(src: &str) -> impl Iterator<Item = (usize, &str)> {
    src.split('\n').scan(0, |offset, line| {
        let start = *offset;
        *offset += line.len() + 1;
        Some((start, line))
    })
}
