//! Core domain types for the Affinity recommendation engine.
//!
//! The crate models the inputs and outputs of item-item collaborative
//! filtering: an ordered [`Catalog`] of [`Item`]s, a dense
//! [`InteractionMatrix`] of user signals, the [`SimilarityModel`] derived
//! from it, and the [`RecommendationRecord`]s handed back to callers.
//! Constructors return `Result` so malformed snapshots are rejected before
//! they reach the ranking code.
//!
//! The [`Recommender`] and [`DataSource`] traits mark the seams where
//! concrete implementations plug in.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod catalog;
pub mod dataset;
pub mod interactions;
pub mod item;
pub mod recommender;
pub mod similarity;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use catalog::{Catalog, CatalogAlignmentError, CatalogError};
pub use dataset::{DataSource, Dataset, DatasetError};
pub use interactions::{InteractionMatrix, InteractionMatrixError};
pub use item::{Item, RecommendationRecord};
pub use recommender::{
    DEFAULT_TOP_N, RecommendError, RecommendRequest, RecommendRequestValidationError, Recommender,
    TopN,
};
pub use similarity::SimilarityModel;

#[cfg(any(test, feature = "test-support"))]
pub use test_support::MemorySource;
