use serde::{Deserialize, Serialize};

/// The two declaration styles the locator understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationKind {
    /// A runtime validation schema variable (`const name = z.object({...})`).
    #[default]
    Schema,
    /// A type declaration (`interface Name { ... }`).
    Interface,
}

/// An immutable snapshot of one named declaration found in a source file.
///
/// Taken at parse time and discarded at the end of the run. The body text is
/// verbatim source: the initializer expression for schema declarations, the
/// braced member block for interfaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDeclaration {
    /// File the declaration was found in, as given in the manifest.
    pub source_file: String,
    /// Identifier of the declaration in the source.
    pub declared_name: String,
    pub kind: DeclarationKind,
    /// Raw body text, verbatim from the source.
    pub raw_body: String,
    /// Doc comment attached to the enclosing statement, without delimiters.
    pub doc_comment: Option<String>,
}
