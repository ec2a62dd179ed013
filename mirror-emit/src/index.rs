//! Index module rendering.

use crate::{REGENERATION_BANNER, builder::CodeBuilder};

/// Render the index module re-exporting every generated target by base file
/// name. Stems are emitted in sorted order so the index is stable across
/// runs regardless of group completion order.
pub fn render_index(stems: &[String]) -> String {
    let mut sorted: Vec<&str> = stems.iter().map(String::as_str).collect();
    sorted.sort_unstable();
    sorted.dedup();

    CodeBuilder::new()
        .lines(REGENERATION_BANNER)
        .blank()
        .each(sorted, |b, stem| {
            b.line(&format!("export * from \"./{stem}\";"))
        })
        .build()
}
