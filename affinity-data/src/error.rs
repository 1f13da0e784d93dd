//! Errors raised while producing dataset snapshots.

use std::io;

use affinity_core::DatasetError;
use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised when reading or writing JSON dataset files.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum JsonSourceError {
    /// Opening the dataset file failed.
    #[error("failed to open dataset file {path:?}")]
    Open {
        /// Path of the file that could not be opened.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The file was not valid dataset JSON.
    #[error("failed to parse dataset file {path:?}")]
    Parse {
        /// Path of the malformed file.
        path: Utf8PathBuf,
        /// Source error produced by `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// The document parsed but does not describe an aligned snapshot.
    #[error("dataset file {path:?} is inconsistent")]
    Invalid {
        /// Path of the inconsistent file.
        path: Utf8PathBuf,
        /// Validation failure reported by the core types.
        #[source]
        source: DatasetError,
    },
    /// Creating the destination file or its parent directory failed.
    #[error("failed to create dataset file {path:?}")]
    Create {
        /// Destination path.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// Serialising the dataset to the destination failed.
    #[error("failed to write dataset file {path:?}")]
    Write {
        /// Destination path.
        path: Utf8PathBuf,
        /// Source error produced by `serde_json`.
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised by [`crate::SyntheticSource`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntheticSourceError {
    /// The configuration asked for an empty catalog.
    #[error("synthetic datasets need at least one item")]
    NoItems,
    /// The generated tables failed validation.
    #[error("generated dataset is inconsistent: {0}")]
    Dataset(#[from] DatasetError),
}
