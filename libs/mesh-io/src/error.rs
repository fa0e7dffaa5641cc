//! # I/O Errors
//!
//! Every parse failure names the file kind and the 1-based line number.

use crate::filesystem::FileSystemError;
use sphere_mesh::MeshError;
use thiserror::Error;

/// Errors raised while reading or writing mesh files.
#[derive(Debug, Error)]
pub enum MeshIoError {
    /// Row has the wrong number of fields
    #[error("{file} line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        file: &'static str,
        line: usize,
        expected: &'static str,
        found: usize,
    },

    /// Field is not a number of the expected type
    #[error("{file} line {line}: cannot parse {token:?} as {what}")]
    InvalidNumber {
        file: &'static str,
        line: usize,
        token: String,
        what: &'static str,
    },

    /// Fields parsed but do not form a valid record
    #[error("{file} line {line}: {source}")]
    InvalidRecord {
        file: &'static str,
        line: usize,
        #[source]
        source: MeshError,
    },

    /// Element references a point that was not loaded
    #[error(transparent)]
    Mesh(#[from] MeshError),

    /// Storage failure
    #[error(transparent)]
    FileSystem(#[from] FileSystemError),

    /// Stream failure while reading or writing
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MeshIoError {
    /// Line number of a parse error, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::FieldCount { line, .. }
            | Self::InvalidNumber { line, .. }
            | Self::InvalidRecord { line, .. } => Some(*line),
            _ => None,
        }
    }
}
