use std::io;

use thiserror::Error;

use crate::http::response::StatusCode;

/// Failures of a file operation, named by request target.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("access to {0} is forbidden")]
    Forbidden(String),
    #[error("{0} was not found")]
    NotFound(String),
    #[error("could not create {target}: {source}")]
    CreationFailure { target: String, source: io::Error },
    #[error("could not write {target}: {source}")]
    WriteFailure { target: String, source: io::Error },
    #[error("could not read {target}: {source}")]
    ReadFailure { target: String, source: io::Error },
}

impl FileError {
    pub fn status(&self) -> StatusCode {
        match self {
            FileError::Forbidden(_) => StatusCode::Forbidden,
            FileError::NotFound(_) => StatusCode::NotFound,
            FileError::CreationFailure { .. }
            | FileError::WriteFailure { .. }
            | FileError::ReadFailure { .. } => StatusCode::InternalServerError,
        }
    }

    /// Classifies an I/O error, treating permission denial as `Forbidden`.
    pub(crate) fn from_io(
        target: &str,
        err: io::Error,
        otherwise: fn(String, io::Error) -> FileError,
    ) -> FileError {
        if err.kind() == io::ErrorKind::PermissionDenied {
            FileError::Forbidden(target.to_string())
        } else {
            otherwise(target.to_string(), err)
        }
    }

    pub(crate) fn creation(target: String, source: io::Error) -> FileError {
        FileError::CreationFailure { target, source }
    }

    pub(crate) fn write(target: String, source: io::Error) -> FileError {
        FileError::WriteFailure { target, source }
    }

    pub(crate) fn read(target: String, source: io::Error) -> FileError {
        FileError::ReadFailure { target, source }
    }
}
