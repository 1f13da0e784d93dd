//! Recommendation requests, errors, and the `Recommender` trait.

use std::num::NonZeroUsize;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{CatalogAlignmentError, RecommendationRecord};

/// Number of recommendations returned when the caller does not choose.
pub const DEFAULT_TOP_N: usize = 5;

/// A validated, strictly positive recommendation count.
///
/// # Examples
/// ```
/// use affinity_core::TopN;
///
/// let top_n = TopN::try_from(3).expect("positive count");
/// assert_eq!(top_n.get(), 3);
/// assert_eq!(TopN::default().get(), 5);
/// assert!(TopN::try_from(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TopN(NonZeroUsize);

impl TopN {
    /// Wrap an already non-zero count.
    #[must_use]
    pub const fn new(count: NonZeroUsize) -> Self {
        Self(count)
    }

    /// Return the count as a `usize`.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for TopN {
    fn default() -> Self {
        Self::new(NonZeroUsize::MIN.saturating_add(DEFAULT_TOP_N - 1))
    }
}

impl TryFrom<usize> for TopN {
    type Error = RecommendRequestValidationError;

    fn try_from(count: usize) -> Result<Self, Self::Error> {
        NonZeroUsize::new(count)
            .map(Self::new)
            .ok_or(RecommendRequestValidationError::ZeroTopN)
    }
}

/// Parameters for a single recommendation request.
///
/// The seed drives the random fallback paths, so identical requests against
/// the same snapshot return identical results.
///
/// # Examples
/// ```
/// use affinity_core::RecommendRequest;
///
/// let request = RecommendRequest::new("user1").with_top_n(2).with_seed(7);
/// let top_n = request.validate().expect("valid request");
///
/// assert_eq!(top_n.get(), 2);
/// assert_eq!(request.seed, 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RecommendRequest {
    /// User to recommend items for.
    pub user_id: String,
    /// Maximum number of records to return.
    #[cfg_attr(feature = "serde", serde(default = "default_top_n"))]
    pub top_n: usize,
    /// Seed for the random cold-start and fallback paths.
    #[cfg_attr(feature = "serde", serde(default))]
    pub seed: u64,
}

#[cfg(feature = "serde")]
const fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

/// Reasons a [`RecommendRequest`] can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RecommendRequestValidationError {
    /// The user identifier was empty or whitespace.
    #[error("user id must not be empty")]
    EmptyUserId,
    /// `top_n` was zero.
    #[error("top_n must be a positive integer")]
    ZeroTopN,
}

impl RecommendRequest {
    /// Create a request for `user_id` with default `top_n` and seed `0`.
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            top_n: DEFAULT_TOP_N,
            seed: 0,
        }
    }

    /// Set the maximum number of records.
    #[must_use]
    pub const fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Set the sampling seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Validate the request, returning the checked recommendation count.
    ///
    /// # Errors
    /// Returns [`RecommendRequestValidationError`] for an empty user id or a
    /// zero `top_n`.
    pub fn validate(&self) -> Result<TopN, RecommendRequestValidationError> {
        if self.user_id.trim().is_empty() {
            return Err(RecommendRequestValidationError::EmptyUserId);
        }
        TopN::try_from(self.top_n)
    }
}

/// Errors returned by [`Recommender::recommend`].
///
/// An unknown user is not an error: recommenders return an empty list for
/// it. An empty catalog is an error so callers can tell the two apart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecommendError {
    /// The request parameters were invalid.
    #[error("invalid recommendation request: {0}")]
    InvalidRequest(#[from] RecommendRequestValidationError),
    /// The catalog has no items, so not even the fallback can run.
    #[error("catalog is empty; no recommendations are possible")]
    EmptyCatalog,
    /// The catalog and interaction matrix disagree on the item universe.
    #[error(transparent)]
    Misaligned(#[from] CatalogAlignmentError),
    /// The similarity model was not built from this interaction matrix.
    #[error("similarity model covers {model_items} items but does not match the {matrix_items} matrix columns")]
    ModelMisaligned {
        /// Number of items on the model's axes.
        model_items: usize,
        /// Number of matrix columns.
        matrix_items: usize,
    },
}

/// Produce ranked recommendations for a user.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so one recommender
/// can serve a batch of requests against a shared snapshot. They must never
/// return more than `top_n` records, never repeat an item, and never return
/// items the user has already interacted with on the similarity path.
pub trait Recommender: Send + Sync {
    /// Recommend items for `request.user_id`.
    ///
    /// # Errors
    /// Returns [`RecommendError`] when the request or the underlying snapshot
    /// is malformed.
    fn recommend(
        &self,
        request: &RecommendRequest,
    ) -> Result<Vec<RecommendationRecord>, RecommendError>;
}
