use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Per-declaration parse failures.
///
/// These never abort the run: the pipeline catches them at the group boundary
/// and records them in the run report.
#[derive(Debug, Error)]
pub enum Error {
    #[error("declaration '{name}' not found in '{file}'")]
    DeclarationNotFound { name: String, file: String },

    #[error("malformed schema body in declaration '{declaration}'")]
    MalformedSchemaBody { declaration: String },

    #[error("failed to read source file '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
