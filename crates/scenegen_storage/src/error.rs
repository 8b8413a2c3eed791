//! Emitter errors

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Storage result type
pub type Result<T> = std::result::Result<T, EmitError>;

#[derive(Debug, Error)]
pub enum EmitError {
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
