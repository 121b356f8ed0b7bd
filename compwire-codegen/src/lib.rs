//! Code generation building blocks for compwire.
//!
//! - [`builder`] - indentation-aware text building
//! - [`ast`] - the JavaScript/TypeScript syntax generated modules are made of
//! - [`generation`] - the [`Codegen`] trait and its preview/generate results

pub mod ast;
pub mod builder;
pub mod generation;

mod code_file;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use code_file::CodeFile;
pub use generation::{Codegen, GenerateResult, PreviewFile};
