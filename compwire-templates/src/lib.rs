//! Templates that wire discovered components into a Nuxt application.
//!
//! Each template is a pure function of the component list (plus the mode
//! and build directory where relevant):
//!
//! - `components.plugin.mjs` - registers global components, plain and `Lazy`-prefixed
//! - `components.client.mjs` / `components.server.mjs` - barrels with eager re-exports,
//!   lazy wrappers and a `componentNames` manifest
//! - `components.islands.mjs` - lazy wrappers for island components
//! - `components.d.ts` - `GlobalComponents` augmentation and ambient constants
//!
//! ```ignore
//! use compwire_codegen::Codegen;
//! use compwire_templates::Generator;
//!
//! let generator = Generator::new(components).build_dir("/app/.nuxt");
//! for file in generator.preview() {
//!     println!("{}\n{}", file.path, file.content);
//! }
//! ```

mod generator;
mod loader;
mod magic_comments;

pub mod files;

pub use compwire_codegen::{Codegen, GenerateResult, PreviewFile};
pub use generator::Generator;
pub use loader::{export_accessor, lazy_loader};
pub use magic_comments::import_magic_comments;
