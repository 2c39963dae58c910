//! Crate-level error type and `Result` alias.
//! Converts underlying I/O errors and provides semantic variants for input
//! file access and UTF-8 decoding failures.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot open input file {path:?}: {source}")]
    FileAccess {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid UTF-8 on line {line}: {source}")]
    Decode { line: usize, source: std::io::Error },
}
