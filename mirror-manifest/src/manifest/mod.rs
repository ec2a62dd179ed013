//! Manifest types and parsing for mirror.toml files.

mod parse;
mod validate;

use std::path::PathBuf;

use indexmap::IndexMap;
use mirrorgen_ir::{DeclarationKind, ExtendField, TransformSpec};
pub use parse::parse_manifest;
use serde::Deserialize;

/// Root manifest for mirror.toml
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    /// Root directories for source lookup and generated output.
    pub paths: Paths,

    /// Literal values per enum identifier, consumed by entries that set
    /// `replace_enums_with_strings`.
    #[serde(default)]
    pub enums: IndexMap<String, Vec<String>>,

    /// Declarations to mirror, one entry per (source, target) pair.
    #[serde(default, rename = "entry")]
    pub entries: Vec<Entry>,

    /// Hand-maintained type unions appended verbatim to generated files.
    #[serde(default, rename = "manual_union")]
    pub manual_unions: Vec<ManualUnion>,
}

/// Root directories the pipeline reads from and writes to.
#[derive(Debug, Clone, Deserialize)]
pub struct Paths {
    /// Root of the server SDK sources; entry `source_file`s are relative to it.
    pub source_root: PathBuf,
    /// Root for generated client modules; entry `target_file`s are relative to it.
    pub output_dir: PathBuf,
}

/// One declaration to mirror from the server sources into a client module.
#[derive(Debug, Clone, Deserialize)]
pub struct Entry {
    /// Source file, relative to `paths.source_root`.
    pub source_file: String,
    /// Identifier of the declaration inside the source file.
    pub source_name: String,
    /// Output file, relative to `paths.output_dir`. Schema entries sharing a
    /// target file are emitted together as one group.
    pub target_file: String,
    /// Identifier of the emitted declaration.
    pub target_name: String,

    #[serde(default)]
    pub kind: DeclarationKind,

    #[serde(default)]
    pub omit_fields: Vec<String>,

    #[serde(default)]
    pub rename_fields: IndexMap<String, String>,

    #[serde(default)]
    pub extend_fields: IndexMap<String, ExtendField>,

    /// Snake→camel conversion of field names; on by default.
    #[serde(default = "default_true")]
    pub convert_case: bool,

    /// Replace enum references with inline literal unions from `[enums]`.
    #[serde(default)]
    pub replace_enums_with_strings: bool,
}

fn default_true() -> bool {
    true
}

impl Entry {
    /// Build the transform spec for this entry, resolving enum substitutions
    /// against the manifest-level `[enums]` table.
    pub fn transform_spec(&self, enums: &IndexMap<String, Vec<String>>) -> TransformSpec {
        TransformSpec {
            omit: self.omit_fields.clone(),
            rename: self.rename_fields.clone(),
            extend: self.extend_fields.clone(),
            convert_case: self.convert_case,
            enum_substitutions: if self.replace_enums_with_strings {
                enums.clone()
            } else {
                IndexMap::new()
            },
        }
    }
}

/// A literal type-union block appended verbatim to a generated file.
#[derive(Debug, Clone, Deserialize)]
pub struct ManualUnion {
    /// Output file, relative to `paths.output_dir`.
    pub target_file: String,
    /// TypeScript code appended as-is after the generated declarations.
    pub code: String,
}

impl Manifest {
    /// Entries destined for the given target file, in manifest order.
    pub fn entries_for_target(&self, target_file: &str) -> Vec<&Entry> {
        self.entries
            .iter()
            .filter(|e| e.target_file == target_file)
            .collect()
    }
}
