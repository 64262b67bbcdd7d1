use std::path::PathBuf;

/// Unified error type for all scrubpng operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid file path: {0}")]
    InvalidPath(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    ImageError(#[from] image::ImageError),

    #[error("PNG encoding failed: {0}")]
    EncodeError(String),

    #[error("Cannot use output directory {path}: {source}")]
    OutputDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Coarse classification used when reporting failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input extension is not in the allow-list
    UnsupportedFormat,
    /// Decode, encode or file-system failure on a single item
    IoFailure,
    /// Nothing can be converted at all
    Fatal,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnsupportedFormat(_) => ErrorKind::UnsupportedFormat,
            Self::OutputDirectory { .. } => ErrorKind::Fatal,
            Self::InvalidPath(_) | Self::Io(_) | Self::ImageError(_) | Self::EncodeError(_) => {
                ErrorKind::IoFailure
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
