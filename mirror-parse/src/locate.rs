//! Declaration locator.
//!
//! Finds a named top-level declaration in a source file and returns its raw
//! body text plus any attached doc comment. Schema mode looks for a
//! `const`/`export const` variable and returns the initializer verbatim.
//! Interface mode looks for the matching interface and additionally scans a
//! same-named `namespace` block, collecting interfaces declared inside it as
//! synthetic nested declarations named `{parent}{child}`.

use mirrorgen_ir::{DeclarationKind, SourceDeclaration};

use crate::{
    Error, Result,
    scanner::{Scanner, is_ident_start},
};

/// A declaration found in source text.
struct Located {
    body: String,
    doc: Option<String>,
}

/// Result of locating a schema declaration: the declaration itself plus the
/// number of same-named duplicates that were skipped (first match wins).
pub fn locate_schema(file: &str, content: &str, name: &str) -> Result<(SourceDeclaration, usize)> {
    let (found, duplicates) = scan_const_declarations(content, name);
    let located = found.ok_or_else(|| Error::DeclarationNotFound {
        name: name.to_string(),
        file: file.to_string(),
    })?;
    Ok((
        SourceDeclaration {
            source_file: file.to_string(),
            declared_name: name.to_string(),
            kind: DeclarationKind::Schema,
            raw_body: located.body,
            doc_comment: located.doc,
        },
        duplicates,
    ))
}

/// Locate an interface and any nested sibling interfaces declared inside a
/// same-named namespace block. The primary declaration comes first; nested
/// declarations follow in source order, named `{parent}{child}`.
pub fn locate_interface(
    file: &str,
    content: &str,
    name: &str,
) -> Result<(Vec<SourceDeclaration>, usize)> {
    let mut interfaces = scan_interfaces(content);
    let duplicates = interfaces.iter().filter(|(n, _)| n == name).count().saturating_sub(1);

    let position = interfaces
        .iter()
        .position(|(n, _)| n == name)
        .ok_or_else(|| Error::DeclarationNotFound {
            name: name.to_string(),
            file: file.to_string(),
        })?;
    let (_, primary) = interfaces.swap_remove(position);

    let mut declarations = vec![SourceDeclaration {
        source_file: file.to_string(),
        declared_name: name.to_string(),
        kind: DeclarationKind::Interface,
        raw_body: primary.body,
        doc_comment: primary.doc,
    }];

    if let Some(inner) = scan_namespace_body(content, name) {
        for (child, located) in scan_interfaces(inner) {
            declarations.push(SourceDeclaration {
                source_file: file.to_string(),
                declared_name: format!("{name}{child}"),
                kind: DeclarationKind::Interface,
                raw_body: located.body,
                doc_comment: located.doc,
            });
        }
    }

    Ok((declarations, duplicates))
}

/// Scan for top-level `const <name> = <initializer>;` declarations matching
/// `name`. Returns the first match and the count of later duplicates.
fn scan_const_declarations(content: &str, name: &str) -> (Option<Located>, usize) {
    let mut s = Scanner::new(content);
    let mut depth: usize = 0;
    let mut last_doc: Option<String> = None;
    let mut found: Option<Located> = None;
    let mut duplicates = 0;

    loop {
        if let Some(doc) = s.skip_trivia() {
            last_doc = Some(doc);
        }
        let Some(c) = s.peek() else { break };

        if is_ident_start(c) {
            let word = s.read_identifier().unwrap_or_default();
            if depth == 0 && word == "const" {
                let doc = last_doc.take();
                match read_const_initializer(&mut s) {
                    Some((decl_name, body)) => {
                        if decl_name == name {
                            if found.is_none() {
                                found = Some(Located { body, doc });
                            } else {
                                duplicates += 1;
                            }
                        }
                    }
                    // Unreadable remainder; nothing past it can be located.
                    None => break,
                }
            } else if word != "export" {
                last_doc = None;
            }
            continue;
        }

        match c {
            b'\'' | b'"' | b'`' => s.skip_string(),
            b'{' | b'(' | b'[' => {
                depth += 1;
                s.bump();
            }
            b'}' | b')' | b']' => {
                depth = depth.saturating_sub(1);
                s.bump();
            }
            _ => {
                last_doc = None;
                s.bump();
            }
        }
    }

    (found, duplicates)
}

/// Read `<name> [: annotation] = <initializer> ;` after a `const` keyword.
/// Returns `None` when the remainder of the file cannot be scanned.
fn read_const_initializer<'a>(s: &mut Scanner<'a>) -> Option<(&'a str, String)> {
    s.skip_trivia();
    let decl_name = s.read_identifier()?;

    s.skip_trivia();
    if s.peek() == Some(b':') {
        s.bump();
        s.scan_expression(&[b'=', b';']).ok()?;
    }
    if s.peek() != Some(b'=') {
        // `const` without an initializer at top level; skip the statement.
        s.scan_expression(&[b';']).ok()?;
        s.bump();
        return Some((decl_name, String::new()));
    }
    s.bump();
    s.skip_trivia();

    let start = s.pos();
    s.scan_expression(&[b';']).ok()?;
    let body = s.slice(start, s.pos()).trim_end().to_string();
    s.bump();
    Some((decl_name, body))
}

/// Collect every top-level interface declaration in a region of source text,
/// in source order.
fn scan_interfaces(content: &str) -> Vec<(String, Located)> {
    let mut s = Scanner::new(content);
    let mut depth: usize = 0;
    let mut last_doc: Option<String> = None;
    let mut interfaces = Vec::new();

    loop {
        if let Some(doc) = s.skip_trivia() {
            last_doc = Some(doc);
        }
        let Some(c) = s.peek() else { break };

        if is_ident_start(c) {
            let word = s.read_identifier().unwrap_or_default();
            if depth == 0 && word == "interface" {
                let doc = last_doc.take();
                s.skip_trivia();
                let Some(name) = s.read_identifier() else { continue };
                // Skip `extends ...` up to the body.
                if s.scan_expression(&[b'{']).is_err() {
                    break;
                }
                let Ok(body) = s.read_braced_block() else { break };
                interfaces.push((
                    name.to_string(),
                    Located {
                        body: body.to_string(),
                        doc,
                    },
                ));
            } else if word != "export" && word != "declare" {
                last_doc = None;
            }
            continue;
        }

        match c {
            b'\'' | b'"' | b'`' => s.skip_string(),
            b'{' | b'(' | b'[' => {
                depth += 1;
                s.bump();
            }
            b'}' | b')' | b']' => {
                depth = depth.saturating_sub(1);
                s.bump();
            }
            _ => {
                last_doc = None;
                s.bump();
            }
        }
    }

    interfaces
}

/// Find a top-level `namespace <name> { ... }` block and return its inner
/// text (without the outer braces).
fn scan_namespace_body<'a>(content: &'a str, name: &str) -> Option<&'a str> {
    let mut s = Scanner::new(content);
    let mut depth: usize = 0;

    loop {
        s.skip_trivia();
        let c = s.peek()?;

        if is_ident_start(c) {
            let word = s.read_identifier().unwrap_or_default();
            if depth == 0 && word == "namespace" {
                s.skip_trivia();
                let block_name = s.read_identifier()?;
                s.scan_expression(&[b'{']).ok()?;
                let block = s.read_braced_block().ok()?;
                if block_name == name {
                    return Some(&block[1..block.len() - 1]);
                }
            }
            continue;
        }

        match c {
            b'\'' | b'"' | b'`' => s.skip_string(),
            b'{' | b'(' | b'[' => {
                depth += 1;
                s.bump();
            }
            b'}' | b')' | b']' => {
                depth = depth.saturating_sub(1);
                s.bump();
            }
            _ => s.bump(),
        }
    }
}
