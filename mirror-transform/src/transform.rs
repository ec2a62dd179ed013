//! The field transformer.

use std::collections::HashSet;

use mirrorgen_core::{replace_identifier, to_camel_case};
use mirrorgen_ir::{FieldEntry, TransformSpec};

use crate::{Error, Result};

/// Apply the declarative edits of a transform spec to a segmented field list.
///
/// Application order is fixed:
///
/// 1. drop fields named in `omit`;
/// 2. rewrite whole-identifier occurrences of sibling source names in the
///    remaining expressions to their target names;
/// 3. replace enum references with inline literal unions, when configured;
/// 4. apply `rename`;
/// 5. snake→camel convert field names, unless disabled;
/// 6. append `extend` fields verbatim.
///
/// The transformation is purely textual; expressions are never evaluated. A
/// substitution that references an omitted sibling is caught only when the
/// generated output is compiled.
pub fn apply_transform(
    declaration: &str,
    fields: Vec<FieldEntry>,
    spec: &TransformSpec,
    siblings: &[(String, String)],
) -> Result<Vec<FieldEntry>> {
    let mut output: Vec<FieldEntry> = fields
        .into_iter()
        .filter(|field| !spec.omit.iter().any(|o| o == &field.name))
        .map(|mut field| {
            field.expression = rewrite_expression(&field.expression, spec, siblings);
            field
        })
        .collect();

    for field in &mut output {
        if let Some(renamed) = spec.rename.get(&field.name) {
            field.name = renamed.clone();
        }
        if spec.convert_case {
            field.name = to_camel_case(&field.name);
        }
    }

    let mut seen = HashSet::new();
    for field in &output {
        if !seen.insert(field.name.clone()) {
            return Err(Error::DuplicateFieldName {
                declaration: declaration.to_string(),
                name: field.name.clone(),
            });
        }
    }

    for (name, extend) in &spec.extend {
        if !seen.insert(name.clone()) {
            return Err(Error::DuplicateFieldName {
                declaration: declaration.to_string(),
                name: name.clone(),
            });
        }
        output.push(FieldEntry {
            name: name.clone(),
            expression: extend.expression.clone(),
            doc_comment: extend.description.clone(),
            optional: true,
        });
    }

    Ok(output)
}

fn rewrite_expression(
    expression: &str,
    spec: &TransformSpec,
    siblings: &[(String, String)],
) -> String {
    let mut result = expression.to_string();

    for (source_name, target_name) in siblings {
        result = replace_identifier(&result, source_name, target_name);
    }

    for (enum_name, values) in &spec.enum_substitutions {
        // The wrapped form first: it contains the bare identifier.
        result = replace_native_enum_call(&result, enum_name, &zod_literal_union(values));
        result = replace_identifier(&result, enum_name, &type_literal_union(values));
    }

    result
}

/// Replace every `z.nativeEnum( <enum_name> )` call in `text`, tolerating
/// whitespace around the argument, with `replacement`.
fn replace_native_enum_call(text: &str, enum_name: &str, replacement: &str) -> String {
    const CALL: &str = "z.nativeEnum";

    let mut result = String::with_capacity(text.len());
    let mut start = 0;
    while let Some(pos) = text[start..].find(CALL) {
        let at = start + pos;
        let call_end = at + CALL.len();
        result.push_str(&text[start..at]);

        let whole_token = text[..at]
            .chars()
            .next_back()
            .is_none_or(|c| !is_ident_char(c));
        match whole_token
            .then(|| match_call_argument(&text[call_end..], enum_name))
            .flatten()
        {
            Some(tail) => {
                result.push_str(replacement);
                start = call_end + tail;
            }
            None => {
                result.push_str(CALL);
                start = call_end;
            }
        }
    }
    result.push_str(&text[start..]);
    result
}

/// Match `( <ws> enum_name <ws> )` at the start of `text`. Returns the byte
/// length of the matched call tail.
fn match_call_argument(text: &str, enum_name: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    if bytes.first() != Some(&b'(') {
        return None;
    }
    let mut i = 1;
    while bytes.get(i).is_some_and(u8::is_ascii_whitespace) {
        i += 1;
    }
    if !text[i..].starts_with(enum_name) {
        return None;
    }
    i += enum_name.len();
    if text[i..].chars().next().is_some_and(is_ident_char) {
        return None;
    }
    while bytes.get(i).is_some_and(u8::is_ascii_whitespace) {
        i += 1;
    }
    if bytes.get(i) != Some(&b')') {
        return None;
    }
    Some(i + 1)
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

fn zod_literal_union(values: &[String]) -> String {
    let quoted: Vec<String> = values.iter().map(|v| format!("\"{v}\"")).collect();
    format!("z.enum([{}])", quoted.join(", "))
}

fn type_literal_union(values: &[String]) -> String {
    let quoted: Vec<String> = values.iter().map(|v| format!("\"{v}\"")).collect();
    quoted.join(" | ")
}
