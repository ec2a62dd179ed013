//! TOML manifest parsing and validation for the mirror schema generator.
//!
//! The manifest (`mirror.toml`) is the single declarative input to the
//! pipeline: where the server SDK sources live, where generated client
//! modules go, and one `[[entry]]` per declaration to mirror, carrying its
//! per-field edits (omit/rename/extend/case-convert/enum-substitute).

mod error;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use manifest::{Entry, ManualUnion, Manifest, Paths, parse_manifest};
pub use mirrorgen_ir::DeclarationKind;
