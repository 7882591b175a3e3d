//! Error types shared by the preference accessor and the install manager

use std::io;
use std::path::{Path, PathBuf};

/// Errors surfaced by library operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("No such file or directory: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize {}: {source}", .path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Expected a JSON {expected} in {}", .path.display())]
    UnexpectedJson {
        path: PathBuf,
        expected: &'static str,
    },

    #[error("Permission denied: {}", .path.display())]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot install {}: {reason}", .path.display())]
    InvalidSource { path: PathBuf, reason: &'static str },

    #[error("Entry '{name}' was already installed in this run, skipping {}", .path.display())]
    DuplicateName { name: String, path: PathBuf },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Classify an I/O error against the path it occurred on
    pub fn io(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => Error::NotFound { path },
            io::ErrorKind::PermissionDenied => Error::PermissionDenied { path, source },
            _ => Error::Io { path, source },
        }
    }

    /// Path the error refers to
    pub fn path(&self) -> &Path {
        match self {
            Error::NotFound { path }
            | Error::Parse { path, .. }
            | Error::Serialize { path, .. }
            | Error::UnexpectedJson { path, .. }
            | Error::PermissionDenied { path, .. }
            | Error::InvalidSource { path, .. }
            | Error::DuplicateName { path, .. }
            | Error::Io { path, .. } => path,
        }
    }
}
