use std::path::PathBuf;

/// Convenient result alias for publisher operations.
pub type Result<T> = std::result::Result<T, PublishError>;

/// Errors that can occur while generating update artifacts.
#[derive(thiserror::Error, Debug)]
pub enum PublishError {
    /// An input binary or the source directory could not be read.
    #[error("failed to read {path}: {source}")]
    ReadSource {
        /// Path that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// An output directory could not be created.
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The manifest file could not be created or written.
    #[error("failed to write manifest {path}: {source}")]
    WriteManifest {
        /// Destination manifest path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The manifest could not be encoded as JSON.
    #[error("manifest encoding failed: {0}")]
    ManifestEncode(#[from] serde_json::Error),
    /// The compressed archive could not be created or written.
    #[error("failed to write archive {path}: {source}")]
    WriteArchive {
        /// Destination archive path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// Generic error.
    #[error("{0}")]
    Other(String),
}

impl PublishError {
    /// Helper for reading failures on `path`.
    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PublishError::ReadSource {
            path: path.into(),
            source,
        }
    }
}
