//! JavaScript/TypeScript AST builders.
//!
//! These provide a small, high-level API for the syntax that generated
//! component modules need. Every node implements
//! [`Renderable`](crate::Renderable) or renders to an expression string.

mod arrays;
mod consts;
mod dynamic_import;
mod exports;
mod imports;
mod interface;
mod module;
mod objects;
mod strings;

pub use arrays::JsArray;
pub use consts::Const;
pub use dynamic_import::DynamicImport;
pub use exports::Export;
pub use imports::Import;
pub use interface::Interface;
pub use module::DeclareModule;
pub use objects::JsObject;
pub use strings::{is_identifier, is_reserved_word, js_string, object_key};
