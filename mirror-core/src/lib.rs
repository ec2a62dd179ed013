//! Core utilities for the mirror schema generator.
//!
//! This crate provides the small shared building blocks used across the
//! generation pipeline: identifier case conversion, whole-identifier token
//! search/replace over raw source text, and whole-file write helpers.

mod file;
mod ident;
mod utils;

pub use file::write_file;
pub use ident::{contains_identifier, replace_identifier};
pub use utils::{to_camel_case, to_pascal_case, to_snake_case};
