//! Target grouping.

use indexmap::IndexMap;
use mirrorgen_manifest::{Entry, Manifest};

/// All declarations sharing one physical output file: the atomic unit of
/// generation. A group succeeds or fails independently of all others.
///
/// Manifest validation guarantees that interface entries never share a
/// target file, so grouping by target file leaves every interface entry in
/// its own single-declaration group.
#[derive(Debug, Clone)]
pub struct TargetGroup {
    pub target_file: String,
    pub entries: Vec<Entry>,
}

/// Group manifest entries by target file, preserving manifest order both
/// across groups and within each group.
pub fn build_groups(manifest: &Manifest) -> Vec<TargetGroup> {
    let mut groups: IndexMap<String, Vec<Entry>> = IndexMap::new();
    for entry in &manifest.entries {
        groups
            .entry(entry.target_file.clone())
            .or_default()
            .push(entry.clone());
    }
    groups
        .into_iter()
        .map(|(target_file, entries)| TargetGroup {
            target_file,
            entries,
        })
        .collect()
}
