//! Whole-identifier token search and replace over raw source text.
//!
//! Cross-reference rewriting and dependency-edge detection both need to know
//! whether an identifier appears in an expression as a standalone token, not
//! as a substring of a longer name. A match counts only when the characters
//! on either side are not identifier characters.

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// Check whether `ident` occurs in `text` as a whole identifier token.
pub fn contains_identifier(text: &str, ident: &str) -> bool {
    if ident.is_empty() {
        return false;
    }
    let mut start = 0;
    while let Some(pos) = text[start..].find(ident) {
        let at = start + pos;
        let before_ok = text[..at].chars().next_back().is_none_or(|c| !is_ident_char(c));
        let after_ok = text[at + ident.len()..]
            .chars()
            .next()
            .is_none_or(|c| !is_ident_char(c));
        if before_ok && after_ok {
            return true;
        }
        start = at + ident.len();
    }
    false
}

/// Replace every whole-identifier occurrence of `ident` in `text` with `replacement`.
///
/// Occurrences embedded in longer identifiers are left untouched. The scan is
/// purely textual: occurrences inside string literals are also replaced,
/// matching the source-faithful behavior of the rest of the pipeline.
pub fn replace_identifier(text: &str, ident: &str, replacement: &str) -> String {
    if ident.is_empty() {
        return text.to_string();
    }
    let mut result = String::with_capacity(text.len());
    let mut start = 0;
    while let Some(pos) = text[start..].find(ident) {
        let at = start + pos;
        let end = at + ident.len();
        let before_ok = text[..at].chars().next_back().is_none_or(|c| !is_ident_char(c));
        let after_ok = text[end..].chars().next().is_none_or(|c| !is_ident_char(c));

        result.push_str(&text[start..at]);
        if before_ok && after_ok {
            result.push_str(replacement);
        } else {
            result.push_str(ident);
        }
        start = end;
    }
    result.push_str(&text[start..]);
    result
}
