//! Declaration location and object-body segmentation.
//!
//! This crate is the text-faithful front half of the pipeline: it finds a
//! named declaration inside a server source file and splits its body into an
//! ordered field list, without ever building a full syntax tree. The scanner
//! tracks string state, comment state, and bracket depth; everything else is
//! passed through verbatim so the emitted output stays as close to the
//! source as possible.

mod cache;
mod error;
mod locate;
mod scanner;
mod segment;

pub use cache::ParseCache;
pub use error::{Error, Result};
pub use locate::{locate_interface, locate_schema};
pub use segment::segment_fields;
