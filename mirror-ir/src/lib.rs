//! Shared type definitions for the mirror generation pipeline.
//!
//! These types are the currency passed between the pipeline stages:
//!
//! ```text
//! mirror.toml → manifest → locate → segment → transform → emit
//! ```
//!
//! They are deliberately plain data: no file I/O, no text processing, no
//! stage-specific logic. Every stage consumes and produces these shapes so
//! that the stages stay independently testable.

mod declaration;
mod field;
mod transform;

pub use declaration::{DeclarationKind, SourceDeclaration};
pub use field::FieldEntry;
pub use transform::{ExtendField, TransformSpec};
