/// One (name, expression, doc, optionality) tuple extracted from a
/// declaration's body.
///
/// Entries keep source order. Names are unique within one declaration's body;
/// that is guaranteed by valid source input, not enforced here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEntry {
    pub name: String,
    /// Raw expression text: a schema expression (`z.string().email()`) in
    /// schema mode, a type expression (`string`) in interface mode.
    pub expression: String,
    /// Doc block immediately preceding the field, without delimiters.
    pub doc_comment: Option<String>,
    /// Whether the field carried a `?` optionality marker.
    pub optional: bool,
}

impl FieldEntry {
    pub fn new(name: impl Into<String>, expression: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            expression: expression.into(),
            doc_comment: None,
            optional: false,
        }
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc_comment = Some(doc.into());
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}
