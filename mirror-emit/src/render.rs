//! Declaration and module rendering.

use mirrorgen_ir::FieldEntry;

use crate::{
    REGENERATION_BANNER,
    builder::{CodeBuilder, reindent},
    imports::detect_imports,
};

/// Render a schema declaration: `export const <name> = z.object({ ... });`
/// with a JSDoc block per documented field.
pub fn render_schema(target_name: &str, doc: Option<&str>, fields: &[FieldEntry]) -> String {
    let mut builder = CodeBuilder::new();
    if let Some(doc) = doc {
        builder = builder.jsdoc(doc);
    }
    builder = builder
        .line(&format!("export const {target_name} = z.object({{"))
        .indent();
    for field in fields {
        if let Some(doc) = &field.doc_comment {
            builder = builder.jsdoc(doc);
        }
        builder = builder.line(&format!(
            "{}: {},",
            field.name,
            reindent(&field.expression, 1)
        ));
    }
    builder.dedent().line("});").build()
}

/// Render an interface declaration with optionality markers preserved.
pub fn render_interface(target_name: &str, doc: Option<&str>, fields: &[FieldEntry]) -> String {
    let mut builder = CodeBuilder::new();
    if let Some(doc) = doc {
        builder = builder.jsdoc(doc);
    }
    builder = builder
        .line(&format!("export interface {target_name} {{"))
        .indent();
    for field in fields {
        if let Some(doc) = &field.doc_comment {
            builder = builder.jsdoc(doc);
        }
        let marker = if field.optional { "?" } else { "" };
        builder = builder.line(&format!(
            "{}{marker}: {};",
            field.name,
            reindent(&field.expression, 1)
        ));
    }
    builder.dedent().line("}").build()
}

/// Assemble a complete generated module: banner, detected imports, rendered
/// declarations in emission order, then any manual union blocks verbatim.
pub fn render_module(declarations: &[String], manual_unions: &[String]) -> String {
    let body = declarations.join("\n");
    let imports = detect_imports(&body);

    let mut builder = CodeBuilder::new().lines(REGENERATION_BANNER).blank();
    if !imports.is_empty() {
        builder = builder
            .each(imports.iter(), |b, import| b.line(import))
            .blank();
    }

    let mut out = builder.build();
    out.push_str(&body);
    for union in manual_unions {
        out.push('\n');
        out.push_str(union.trim_end());
        out.push('\n');
    }
    out
}
