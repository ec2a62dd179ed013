use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use mirrorgen_manifest::Manifest;

use super::UnwrapOrExit;
use crate::reports::{CheckReport, Report, TerminalOutput};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to mirror.toml (defaults to ./mirror.toml)
    #[arg(short, long, default_value = "mirror.toml")]
    pub manifest: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        // Parsing runs full manifest validation; errors exit with a rendered
        // diagnostic before we get here.
        let manifest = Manifest::from_file(&self.manifest).unwrap_or_exit();

        let report = CheckReport::new(&self.manifest, &manifest);
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }

        Ok(())
    }
}
