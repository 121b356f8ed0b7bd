use std::path::PathBuf;

use clap::Args;
use compwire_manifest::ComponentsToml;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to components.toml (defaults to ./components.toml)
    #[arg(short, long, default_value = "components.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        // Parsing validates names, paths and duplicates
        let file = ComponentsToml::open(&self.config).unwrap_or_exit();

        ops::check(&file).render(&mut TerminalOutput::new());
        Ok(())
    }
}
