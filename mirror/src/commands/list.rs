use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use mirrorgen_manifest::Manifest;

use super::UnwrapOrExit;
use crate::reports::{ListReport, Report, TerminalOutput};

#[derive(Args)]
pub struct ListCommand {
    /// Path to mirror.toml (defaults to ./mirror.toml)
    #[arg(short, long, default_value = "mirror.toml")]
    pub manifest: PathBuf,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::from_file(&self.manifest).unwrap_or_exit();

        let report = ListReport::new(&manifest);
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
