use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The declarative set of per-field edits applied to a declaration before
/// emission.
///
/// Built from one manifest entry plus the shared `[enums]` table. Immutable
/// for the duration of a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformSpec {
    /// Field names dropped from the output.
    #[serde(default)]
    pub omit: Vec<String>,
    /// Source field name → output field name, applied before case conversion.
    #[serde(default)]
    pub rename: IndexMap<String, String>,
    /// Fields appended verbatim after the surviving source fields.
    #[serde(default)]
    pub extend: IndexMap<String, ExtendField>,
    /// Whether field names are snake→camel converted.
    #[serde(default = "default_true")]
    pub convert_case: bool,
    /// Enum identifier → literal values, substituted inline when non-empty.
    #[serde(default)]
    pub enum_substitutions: IndexMap<String, Vec<String>>,
}

fn default_true() -> bool {
    true
}

impl Default for TransformSpec {
    fn default() -> Self {
        Self {
            omit: Vec::new(),
            rename: IndexMap::new(),
            extend: IndexMap::new(),
            convert_case: true,
            enum_substitutions: IndexMap::new(),
        }
    }
}

/// An appended field: an expression plus an optional doc line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtendField {
    pub expression: String,
    #[serde(default)]
    pub description: Option<String>,
}
