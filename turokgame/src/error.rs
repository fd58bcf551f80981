use std::io;
use std::path::PathBuf;

/// Failures loading or looking up ambience content.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("failed to read content file '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse ambience content: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("ambience variant '{0}' not found")]
    UnknownVariant(String),

    #[error("ambience variant '{0}' is already registered")]
    DuplicateVariant(String),

    #[error("ambience variant '{name}' has randFactor {rand_factor}, expected 0..=100")]
    InvalidRandFactor { name: String, rand_factor: i32 },
}

impl ContentError {
    pub fn from_io_error(path: impl Into<PathBuf>, error: io::Error) -> Self {
        ContentError::Io {
            path: path.into(),
            source: error,
        }
    }
}

pub type ContentResult<T> = Result<T, ContentError>;
