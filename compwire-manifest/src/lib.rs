//! `components.toml` parsing and validation.
//!
//! The manifest lists the components discovered in a project together with
//! the build settings the template generators need.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use manifest::{ComponentEntry, ComponentsToml, Manifest, ProjectConfig, parse_manifest};
