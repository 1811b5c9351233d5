use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("markdown file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

impl ConvertError {
    /// True when the run stopped before any work because the input was absent.
    pub fn is_missing_input(&self) -> bool {
        matches!(self, Self::InputNotFound { .. })
    }
}

pub type ConvertResult<T> = Result<T, ConvertError>;
