//! List command report data structures.

use mirrorgen_manifest::{DeclarationKind, Manifest};
use mirrorgen_pipeline::build_groups;

use super::output::{Output, Report};

/// Manifest entries grouped by target file.
pub struct ListReport {
    pub groups: Vec<TargetListing>,
}

pub struct TargetListing {
    pub target_file: String,
    pub entries: Vec<String>,
}

impl ListReport {
    pub fn new(manifest: &Manifest) -> Self {
        let groups = build_groups(manifest)
            .into_iter()
            .map(|group| TargetListing {
                target_file: group.target_file,
                entries: group
                    .entries
                    .iter()
                    .map(|entry| {
                        let kind = match entry.kind {
                            DeclarationKind::Schema => "schema",
                            DeclarationKind::Interface => "interface",
                        };
                        format!("{} -> {} ({})", entry.source_name, entry.target_name, kind)
                    })
                    .collect(),
            })
            .collect();
        Self { groups }
    }
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        if self.groups.is_empty() {
            out.preformatted("No entries defined");
            return;
        }

        for (i, group) in self.groups.iter().enumerate() {
            if i > 0 {
                out.newline();
            }
            out.section(&group.target_file);
            for entry in &group.entries {
                out.list_item(entry);
            }
        }
    }
}
