//! Object-body segmenter.
//!
//! Splits a declaration body into an ordered list of field entries. The body
//! is either a schema initializer (`z.object({ ... })`, fields separated by
//! commas) or an interface block (`{ ... }`, members separated by semicolons).
//! Field boundaries are recognized only at depth zero of the object body;
//! everything between a field's `:` and its terminator is captured verbatim
//! as the field expression, however deeply nested.

use mirrorgen_ir::FieldEntry;

use crate::{Error, Result, scanner::Scanner};

/// Segment a declaration body into its ordered field list.
///
/// `declaration` is used for error reporting only. Returns
/// [`Error::MalformedSchemaBody`] when the body has no object block or its
/// nesting never balances out.
pub fn segment_fields(declaration: &str, body: &str) -> Result<Vec<FieldEntry>> {
    let malformed = || Error::MalformedSchemaBody {
        declaration: declaration.to_string(),
    };

    let mut s = Scanner::new(body);
    // The first open brace starts the object body, whether it sits bare
    // (interface block) or inside a builder call (`z.object({`).
    loop {
        s.skip_trivia();
        match s.peek() {
            None => return Err(malformed()),
            Some(b'\'' | b'"' | b'`') => s.skip_string(),
            Some(b'{') => break,
            Some(_) => s.bump(),
        }
    }
    s.bump();

    let mut fields = Vec::new();
    loop {
        let doc = s.skip_trivia();
        match s.peek() {
            None => return Err(malformed()),
            Some(b'}') => return Ok(fields),
            _ => {}
        }

        let name = s.read_identifier().ok_or_else(malformed)?.to_string();

        s.skip_trivia();
        let optional = s.peek() == Some(b'?');
        if optional {
            s.bump();
            s.skip_trivia();
        }
        if s.peek() != Some(b':') {
            return Err(malformed());
        }
        s.bump();
        s.skip_trivia();

        let start = s.pos();
        let stop = s
            .scan_expression(&[b',', b';', b'}'])
            .map_err(|_| malformed())?;
        let expression = s.slice(start, s.pos()).trim_end().to_string();

        fields.push(FieldEntry {
            name,
            expression,
            doc_comment: doc,
            optional,
        });

        if stop != b'}' {
            s.bump();
        }
    }
}
