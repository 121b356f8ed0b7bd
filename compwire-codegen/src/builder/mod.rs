//! Indentation-aware text building.
//!
//! Syntax nodes implement [`Renderable`] and describe themselves as
//! [`CodeFragment`]s; [`CodeBuilder`] turns fragments into text.

mod code_builder;
mod indent;
mod renderable;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use renderable::{CodeFragment, Renderable};
