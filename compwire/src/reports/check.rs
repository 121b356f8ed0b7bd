//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Component counts by category.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ComponentStats {
    pub total: usize,
    pub global: usize,
    pub islands: usize,
    /// Non-island components exported from the client barrel.
    pub client: usize,
    /// Non-island components exported from the server barrel.
    pub server: usize,
}

/// Report data from manifest validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    pub stats: ComponentStats,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();

        let total = self.stats.total;
        out.preformatted(&format!(
            "  {} component{}",
            total,
            if total == 1 { "" } else { "s" }
        ));
        out.key_value_indented("global", &self.stats.global.to_string());
        out.key_value_indented("islands", &self.stats.islands.to_string());
        out.key_value_indented("client", &self.stats.client.to_string());
        out.key_value_indented("server", &self.stats.server.to_string());
    }
}
