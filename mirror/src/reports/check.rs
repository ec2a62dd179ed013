//! Check command report data structures.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use mirrorgen_manifest::Manifest;

use super::output::{Output, Report};

/// Report data from manifest validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the manifest file.
    pub manifest_path: PathBuf,
    pub entry_count: usize,
    pub target_count: usize,
    pub enum_count: usize,
    pub union_count: usize,
    /// Configured roots and referenced source files that do not exist.
    pub missing: Vec<String>,
}

impl CheckReport {
    pub fn new(manifest_path: &Path, manifest: &Manifest) -> Self {
        let targets: BTreeSet<&str> = manifest
            .entries
            .iter()
            .map(|e| e.target_file.as_str())
            .collect();

        let mut missing = Vec::new();
        for (label, root) in [
            ("source_root", &manifest.paths.source_root),
            ("output_dir", &manifest.paths.output_dir),
        ] {
            if !root.exists() {
                missing.push(format!("{label} '{}' does not exist", root.display()));
            }
        }
        if manifest.paths.source_root.exists() {
            let sources: BTreeSet<&str> = manifest
                .entries
                .iter()
                .map(|e| e.source_file.as_str())
                .collect();
            for source in sources {
                if !manifest.paths.source_root.join(source).exists() {
                    missing.push(format!("source file '{source}' does not exist"));
                }
            }
        }

        Self {
            manifest_path: manifest_path.to_path_buf(),
            entry_count: manifest.entries.len(),
            target_count: targets.len(),
            enum_count: manifest.enums.len(),
            union_count: manifest.manual_unions.len(),
            missing,
        }
    }

    /// Whether the check passed (manifest valid, all referenced paths exist).
    pub fn is_valid(&self) -> bool {
        self.missing.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for problem in &self.missing {
            out.error(problem);
        }

        if !self.is_valid() {
            return;
        }

        out.preformatted(&format!("✓ {} is valid", self.manifest_path.display()));
        out.newline();
        out.key_value("  entries", &self.entry_count.to_string());
        out.key_value("  target files", &self.target_count.to_string());
        out.key_value("  enums", &self.enum_count.to_string());
        out.key_value("  manual unions", &self.union_count.to_string());
    }
}
