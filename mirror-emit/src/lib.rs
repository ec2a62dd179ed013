//! TypeScript emission for the mirror schema generator.
//!
//! Renders transformed field lists back into source text: a zod schema
//! expression per schema declaration, a documented interface per interface
//! declaration, plus the per-file scaffolding (regeneration banner, import
//! lines, index module). All output is deterministic: identical input
//! produces byte-identical text.

mod builder;
mod imports;
mod index;
mod render;

pub use builder::CodeBuilder;
pub use imports::detect_imports;
pub use index::render_index;
pub use render::{render_interface, render_module, render_schema};

/// Header comment marking a file as generated.
pub const REGENERATION_BANNER: &str = "\
// Generated by mirror. Do not edit by hand; changes are overwritten
// the next time `mirror generate` runs.";
