use crate::artifacts::core::format::format_mebibytes;
use std::fmt::Display;
use std::path::PathBuf;
use thiserror::Error;

/// Which of the two compared inputs an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Original,
    Modified,
}

impl Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Original => write!(f, "original"),
            Side::Modified => write!(f, "modified"),
        }
    }
}

#[derive(Debug, Error)]
pub enum DiffError {
    #[error("{side} input is not valid UTF-8 text: {reason}")]
    InvalidInput { side: Side, reason: String },

    #[error(
        "Inputs are too large ({}). Maximum combined size is {}.",
        format_mebibytes(*size),
        format_mebibytes(*limit)
    )]
    InputTooLarge { size: usize, limit: usize },

    #[error(
        "{} is too large ({}). Maximum file size is {}.",
        path.display(),
        format_mebibytes(*size),
        format_mebibytes(*limit)
    )]
    FileTooLarge {
        path: PathBuf,
        size: usize,
        limit: usize,
    },

    #[error("{} has unsupported file type '{extension}'", path.display())]
    UnsupportedFileType { path: PathBuf, extension: String },

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("diff worker stopped before finishing")]
    Worker(#[from] tokio::task::JoinError),
}
