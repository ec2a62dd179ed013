use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use mirrorgen_manifest::Manifest;
use tokio::runtime::Runtime;

use super::UnwrapOrExit;
use crate::reports::{GenerateReport, Report, TerminalOutput};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to mirror.toml (defaults to ./mirror.toml)
    #[arg(short, long, default_value = "mirror.toml")]
    pub manifest: PathBuf,

    /// Exit non-zero when any target file fails to generate
    #[arg(long)]
    pub strict: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::from_file(&self.manifest).unwrap_or_exit();

        let runtime = Runtime::new().wrap_err("Failed to start async runtime")?;
        let run_report = runtime
            .block_on(mirrorgen_pipeline::run(&manifest))
            .wrap_err("Generation failed")?;

        let report = GenerateReport::new(&manifest, run_report);
        report.render(&mut TerminalOutput::new());

        // Failed groups are already reported per target file; the run itself
        // succeeded unless --strict makes them fatal.
        if self.strict && !report.is_clean() {
            std::process::exit(1);
        }

        Ok(())
    }
}
