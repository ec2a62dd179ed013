use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Orchestration-level failures. These are the only errors that abort a run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("configured root '{path}' does not exist")]
    MissingRoot { path: PathBuf },

    #[error("failed to write index module '{path}'")]
    Index {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Per-group failures, caught at the group boundary and recorded in the run
/// report without aborting sibling groups.
#[derive(Debug, Error)]
pub enum GroupError {
    #[error(transparent)]
    Parse(#[from] mirrorgen_parse::Error),

    #[error(transparent)]
    Transform(#[from] mirrorgen_transform::Error),

    #[error("failed to write '{path}'")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
