//! Field transformation and dependency ordering.
//!
//! The transformer applies the declarative per-field edits from a
//! [`mirrorgen_ir::TransformSpec`] to a segmented field list, in a fixed
//! order so that regeneration is deterministic. The sorter orders the
//! transformed declarations of one target file so that referenced
//! declarations are emitted before their referents.

mod error;
mod sort;
mod transform;

pub use error::{Error, Result};
pub use sort::emission_order;
pub use transform::apply_transform;
