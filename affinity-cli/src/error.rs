//! Error types emitted by the Affinity CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use affinity_core::{RecommendError, RecommendRequestValidationError};
use affinity_data::{JsonSourceError, SyntheticSourceError};
use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors emitted by the Affinity CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// A dataset file was combined with synthetic generator options.
    #[error("--{dataset} cannot be combined with --{option}")]
    ConflictingDatasetOptions {
        dataset: &'static str,
        option: &'static str,
    },
    /// A referenced input path does not exist on disk or is not a file.
    #[error("{field} path {path:?} does not exist or is not a file")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The recommendation request failed validation.
    #[error("invalid recommendation request: {0}")]
    InvalidRequest(#[from] RecommendRequestValidationError),
    /// Loading a dataset file failed.
    #[error("failed to load dataset: {0}")]
    LoadDataset(#[source] JsonSourceError),
    /// Generating a synthetic dataset failed.
    #[error("failed to generate dataset: {0}")]
    GenerateDataset(#[from] SyntheticSourceError),
    /// Writing a generated dataset failed.
    #[error("failed to save dataset: {0}")]
    SaveDataset(#[source] JsonSourceError),
    /// Building the recommender or ranking failed.
    #[error("recommendation failed: {0}")]
    Recommend(#[from] RecommendError),
    /// Serializing command output failed.
    #[error("failed to serialize output: {0}")]
    SerializeOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
