//! Generated component modules.

mod barrel;
mod islands;
mod plugin;
mod types;

pub use barrel::ComponentsBarrel;
pub use islands::ComponentsIslands;
pub use plugin::ComponentsPlugin;
pub use types::ComponentsTypes;

/// Header marking declaration files as generated.
pub const GENERATED_HEADER: &str = "Generated by components discovery";

/// Module providing `defineAsyncComponent`.
pub(crate) const VUE_MODULE: &str = "vue";

/// Module providing `defineNuxtPlugin`.
pub(crate) const APP_MODULE: &str = "#app";
