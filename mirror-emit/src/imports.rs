//! Import detection for generated modules.
//!
//! The import set of a generated file is derived by scanning its final body
//! text for a small fixed whitelist of known external tokens. The whitelist
//! is deliberately closed: the generator never resolves types across
//! arbitrary module graphs, it only knows the schema builder itself and the
//! handful of shared cross-file types the server SDK re-exports.

use mirrorgen_core::contains_identifier;

/// Known external tokens: (identifier, module specifier).
const KNOWN_IMPORTS: &[(&str, &str)] = &[
    ("z", "zod"),
    ("Metadata", "./shared"),
    ("PageParams", "./shared"),
    ("Timestamp", "./shared"),
];

/// Scan a rendered module body and return the import lines it needs, in
/// whitelist order, one line per module.
pub fn detect_imports(body: &str) -> Vec<String> {
    let mut modules: Vec<(&str, Vec<&str>)> = Vec::new();

    for (token, module) in KNOWN_IMPORTS {
        if !contains_identifier(body, token) {
            continue;
        }
        match modules.iter_mut().find(|(m, _)| m == module) {
            Some((_, tokens)) => tokens.push(token),
            None => modules.push((module, vec![token])),
        }
    }

    modules
        .into_iter()
        .map(|(module, tokens)| format!("import {{ {} }} from \"{}\";", tokens.join(", "), module))
        .collect()
}
