//! Core types and utilities for compwire.
//!
//! This crate holds the component descriptor model shared by the manifest
//! parser and the template generators, along with file-writing and path
//! helpers.

mod file;
mod types;
mod utils;

pub mod paths;

// File operations
pub use file::{FileRules, GeneratedFile, Overwrite, WriteResult};
// Component model
pub use types::{Component, ComponentMode, ExportName, LoadHint, Mode};
// String utilities
pub use utils::{to_kebab_case, to_pascal_case};
