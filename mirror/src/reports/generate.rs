//! Generate command report data structures.

use std::path::PathBuf;

use mirrorgen_manifest::Manifest;
use mirrorgen_pipeline::RunReport;

use super::output::{Output, Report};

/// Report data from a generation run.
pub struct GenerateReport {
    /// Where the generated modules were written.
    pub output_dir: PathBuf,
    /// Per-target outcomes from the pipeline.
    pub run: RunReport,
}

impl GenerateReport {
    pub fn new(manifest: &Manifest, run: RunReport) -> Self {
        Self {
            output_dir: manifest.paths.output_dir.clone(),
            run,
        }
    }

    /// Whether every target group generated its output file.
    pub fn is_clean(&self) -> bool {
        self.run.is_clean()
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.run.warnings {
            out.warning(warning);
        }

        if !self.run.successes.is_empty() {
            out.section("Generated");
            for success in &self.run.successes {
                let count = success.declarations.len();
                out.added_item(&format!(
                    "{} ({} declaration{})",
                    success.target_file,
                    count,
                    if count == 1 { "" } else { "s" }
                ));
            }
        }

        if !self.run.failures.is_empty() {
            if !self.run.successes.is_empty() {
                out.newline();
            }
            out.section("Failed");
            for failure in &self.run.failures {
                out.removed_item(&format!("{}: {}", failure.target_file, failure.message));
            }
        }

        out.newline();
        let total = self.run.successes.len() + self.run.failures.len();
        out.preformatted(&format!(
            "{} of {} target files generated into {} in {} ms",
            self.run.successes.len(),
            total,
            self.output_dir.display(),
            self.run.elapsed.as_millis()
        ));
    }
}
