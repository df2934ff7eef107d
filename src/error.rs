use std::io;
use std::path::PathBuf;

/// Errors surfaced by the comparison engine.
///
/// Nothing is retried or swallowed: any failure aborts the whole operation.
#[derive(thiserror::Error, Debug)]
pub enum DiffError {
    #[error("cannot read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to enumerate {}", root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },
    #[error("invalid ignore pattern: {pattern}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

impl DiffError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        DiffError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, DiffError>;
