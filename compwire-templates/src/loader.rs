//! Lazy component loader expressions.

use compwire_codegen::ast::{DynamicImport, js_string};
use compwire_core::{Component, ExportName};

use crate::magic_comments::import_magic_comments;

/// Expression that picks the component out of its loaded module `c`.
///
/// Default exports fall back to the module itself for CommonJS-style modules.
pub fn export_accessor(export: &ExportName) -> String {
    match export {
        ExportName::Default => "c.default || c".to_string(),
        ExportName::Named(name) => format!("c[{}]", js_string(name)),
    }
}

/// `defineAsyncComponent(...)` wrapping a chunked dynamic import of the component.
pub fn lazy_loader(component: &Component) -> String {
    let comment = import_magic_comments(
        &component.chunk_name,
        component.prefetch,
        component.preload,
    );
    let import = DynamicImport::new(&component.file_path)
        .comment(comment)
        .build();
    format!(
        "defineAsyncComponent({}.then(c => {}))",
        import,
        export_accessor(&component.export)
    )
}
