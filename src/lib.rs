//! Facade crate for the Affinity recommendation engine.
//!
//! This crate re-exports the core domain types and exposes the item-item
//! scorer and the dataset sources behind feature flags.

#![forbid(unsafe_code)]

pub use affinity_core::{
    Catalog, CatalogAlignmentError, CatalogError, DEFAULT_TOP_N, DataSource, Dataset, DatasetError,
    InteractionMatrix, InteractionMatrixError, Item, RecommendError, RecommendRequest,
    RecommendRequestValidationError, RecommendationRecord, Recommender, SimilarityModel, TopN,
};

#[cfg(feature = "test-support")]
pub use affinity_core::test_support;

#[cfg(feature = "scorer")]
pub use affinity_scorer::{ItemItemRecommender, ItemScore, build_similarity, recommend};

#[cfg(feature = "data")]
pub use affinity_data::{
    DatasetDocument, JsonDatasetSource, JsonSourceError, SyntheticConfig, SyntheticSource,
    SyntheticSourceError, write_dataset,
};
