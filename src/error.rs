use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StubError {
    #[error("Invalid root directory {}: {reason}", .path.display())]
    InvalidRoot { path: PathBuf, reason: String },

    #[error("Failed to read {}: {source}", .path.display())]
    Traversal {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to create {}: {source}", .path.display())]
    FileCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StubError {
    /// Path the error refers to
    pub fn path(&self) -> &Path {
        match self {
            StubError::InvalidRoot { path, .. }
            | StubError::Traversal { path, .. }
            | StubError::FileCreation { path, .. } => path,
        }
    }
}

pub type StubResult<T> = Result<T, StubError>;
