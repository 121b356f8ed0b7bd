use std::path::PathBuf;

use clap::Args;
use compwire_manifest::ComponentsToml;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to components.toml (defaults to ./components.toml)
    #[arg(short, long, default_value = "components.toml")]
    pub config: PathBuf,

    /// Output directory (defaults to the manifest's output_dir or build_dir)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Rewrite every file even when its content is unchanged
    #[arg(long)]
    pub force: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let file = ComponentsToml::open(&self.config).unwrap_or_exit();
        let output_dir = self.output.clone().unwrap_or_else(|| file.output_dir());

        let report = ops::generate(
            &file,
            GenerateOptions {
                output_dir: &output_dir,
                dry_run: self.dry_run,
                force: self.force,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
