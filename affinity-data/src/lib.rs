//! Dataset sources for the Affinity engine.
//!
//! Responsibilities:
//! - Implement [`affinity_core::DataSource`] for generated and file-backed
//!   snapshots.
//! - Own the on-disk JSON layout of a dataset.
//!
//! Boundaries:
//! - Do not encode ranking rules (live in `affinity-scorer`).
//! - Validation of snapshots is delegated to `affinity-core` constructors.
//!
//! Invariants:
//! - Every returned [`affinity_core::Dataset`] is aligned.
//! - File access goes through `cap-std` with UTF-8 paths.

#![forbid(unsafe_code)]

mod error;
pub mod fs;
mod json;
mod synthetic;

pub use error::{JsonSourceError, SyntheticSourceError};
pub use json::{DatasetDocument, JsonDatasetSource, write_dataset};
pub use synthetic::{CATEGORIES, SyntheticConfig, SyntheticSource};
