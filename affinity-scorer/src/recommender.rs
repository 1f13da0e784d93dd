//! Item-item ranking with cold-start and fallback sampling.
//!
//! Ranking follows a fixed sequence: validate the snapshot, resolve the
//! user's interacted columns, score every catalog item by its mean similarity
//! to those columns, stable-sort by score (catalog order breaks ties), drop
//! interacted items and truncate. Unknown users get an empty list; users
//! without interactions, or whose ranked list is empty after exclusion, get
//! a uniform sample of the catalog.

use affinity_core::{
    Catalog, Dataset, InteractionMatrix, RecommendError, RecommendRequest, RecommendationRecord,
    Recommender, SimilarityModel, TopN,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::build_similarity;
use crate::sampling::sample_catalog;

/// A ranked candidate and its mean similarity score.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemScore {
    /// Candidate item identifier.
    pub item_id: String,
    /// Mean similarity to the user's interacted items.
    pub score: f64,
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    catalog_position: usize,
    score: f64,
    interacted: bool,
}

/// Recommend up to `top_n` catalog items for `user_id`.
///
/// The inputs are validated before anything else: the catalog must be
/// non-empty, must cover exactly the matrix columns, and `model` must have
/// been built from `matrix`. After that:
///
/// - an unknown user yields an empty list;
/// - a user with no positive signal yields `min(top_n, catalog.len())`
///   distinct items sampled from `rng`;
/// - otherwise items are ranked by mean similarity to the user's interacted
///   items, ties broken by catalog order, with interacted items removed. If
///   nothing survives the exclusion the sampling fallback runs instead.
///
/// # Errors
/// Returns [`RecommendError::EmptyCatalog`], [`RecommendError::Misaligned`]
/// or [`RecommendError::ModelMisaligned`] for malformed inputs.
///
/// # Examples
/// ```
/// use affinity_core::{Dataset, Item, TopN};
/// use affinity_scorer::{build_similarity, recommend};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let dataset = Dataset::from_parts(
///     vec!["u1".into()],
///     vec![
///         Item::new("item1", "Product 1", "Books"),
///         Item::new("item2", "Product 2", "Books"),
///     ],
///     vec![vec![0, 0]],
/// )?;
/// let model = build_similarity(dataset.interactions());
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
///
/// let unknown = recommend(
///     "u9",
///     dataset.interactions(),
///     &model,
///     dataset.catalog(),
///     TopN::default(),
///     &mut rng,
/// )?;
/// assert!(unknown.is_empty());
///
/// let cold = recommend(
///     "u1",
///     dataset.interactions(),
///     &model,
///     dataset.catalog(),
///     TopN::default(),
///     &mut rng,
/// )?;
/// assert_eq!(cold.len(), 2);
/// # Ok(())
/// # }
/// ```
pub fn recommend<R>(
    user_id: &str,
    matrix: &InteractionMatrix,
    model: &SimilarityModel,
    catalog: &Catalog,
    top_n: TopN,
    rng: &mut R,
) -> Result<Vec<RecommendationRecord>, RecommendError>
where
    R: Rng + ?Sized,
{
    validate_snapshot(matrix, model, catalog)?;

    let Some(interacted) = matrix.interacted_columns(user_id) else {
        log::debug!("user {user_id:?} is not in the interaction matrix");
        return Ok(Vec::new());
    };
    if interacted.is_empty() {
        log::debug!("user {user_id:?} has no interactions; sampling the catalog");
        return Ok(sample_catalog(catalog, top_n, rng));
    }

    let records: Vec<RecommendationRecord> = rank_candidates(matrix, model, catalog, &interacted)
        .into_iter()
        .filter(|candidate| !candidate.interacted)
        .take(top_n.get())
        .filter_map(|candidate| catalog.record_at(candidate.catalog_position))
        .collect();

    if records.is_empty() {
        log::debug!("no unseen candidates remain for {user_id:?}; sampling the catalog");
        return Ok(sample_catalog(catalog, top_n, rng));
    }
    Ok(records)
}

fn validate_snapshot(
    matrix: &InteractionMatrix,
    model: &SimilarityModel,
    catalog: &Catalog,
) -> Result<(), RecommendError> {
    if catalog.is_empty() {
        return Err(RecommendError::EmptyCatalog);
    }
    catalog.check_alignment(matrix)?;
    if !model.is_aligned_with(matrix) {
        return Err(RecommendError::ModelMisaligned {
            model_items: model.len(),
            matrix_items: matrix.item_count(),
        });
    }
    Ok(())
}

/// Score every catalog item and sort by descending score.
///
/// `sort_by` is stable, so equal scores keep catalog order.
fn rank_candidates(
    matrix: &InteractionMatrix,
    model: &SimilarityModel,
    catalog: &Catalog,
    interacted: &[usize],
) -> Vec<Candidate> {
    let mut candidates: Vec<Candidate> = catalog
        .items()
        .iter()
        .enumerate()
        .filter_map(|(catalog_position, item)| {
            let column = matrix.item_position(&item.id)?;
            Some(Candidate {
                catalog_position,
                score: mean_similarity(model, column, interacted),
                interacted: interacted.contains(&column),
            })
        })
        .collect();
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
    candidates
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "the score is an arithmetic mean over a small interacted set"
)]
fn mean_similarity(model: &SimilarityModel, column: usize, interacted: &[usize]) -> f64 {
    if interacted.is_empty() {
        return 0.0;
    }
    let total: f64 = interacted
        .iter()
        .filter_map(|&other| model.score_at(column, other))
        .sum();
    total / interacted.len() as f64
}

/// Item-item recommender over a single dataset snapshot.
///
/// The similarity model is built once at construction and shared read-only
/// by every request, so one instance can serve a batch of users from
/// several threads.
#[derive(Debug, Clone)]
pub struct ItemItemRecommender {
    dataset: Dataset,
    model: SimilarityModel,
}

impl ItemItemRecommender {
    /// Build the similarity model for `dataset`.
    ///
    /// A [`Dataset`] always has at least one item and a catalog aligned with
    /// its matrix, so construction cannot fail.
    #[must_use]
    pub fn new(dataset: Dataset) -> Self {
        let model = build_similarity(dataset.interactions());
        Self { dataset, model }
    }

    /// The snapshot being served.
    #[must_use]
    pub const fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Recommend for `user_id` using a caller-supplied random generator.
    ///
    /// # Errors
    /// Propagates [`recommend`] errors.
    pub fn recommend_with_rng<R>(
        &self,
        user_id: &str,
        top_n: TopN,
        rng: &mut R,
    ) -> Result<Vec<RecommendationRecord>, RecommendError>
    where
        R: Rng + ?Sized,
    {
        recommend(
            user_id,
            self.dataset.interactions(),
            &self.model,
            self.dataset.catalog(),
            top_n,
            rng,
        )
    }

    /// Ranked unseen candidates for `user_id` with their mean similarity.
    ///
    /// Returns `None` for unknown users and an empty list for users without
    /// interactions. Scores are diagnostic only and never attached to
    /// recommendation records.
    #[must_use]
    pub fn scores_for(&self, user_id: &str) -> Option<Vec<ItemScore>> {
        let matrix = self.dataset.interactions();
        let catalog = self.dataset.catalog();
        let interacted = matrix.interacted_columns(user_id)?;
        if interacted.is_empty() {
            return Some(Vec::new());
        }
        Some(
            rank_candidates(matrix, &self.model, catalog, &interacted)
                .into_iter()
                .filter(|candidate| !candidate.interacted)
                .filter_map(|candidate| {
                    let item = catalog.items().get(candidate.catalog_position)?;
                    Some(ItemScore {
                        item_id: item.id.clone(),
                        score: candidate.score,
                    })
                })
                .collect(),
        )
    }
}

impl Recommender for ItemItemRecommender {
    fn recommend(
        &self,
        request: &RecommendRequest,
    ) -> Result<Vec<RecommendationRecord>, RecommendError> {
        let top_n = request.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(request.seed);
        self.recommend_with_rng(&request.user_id, top_n, &mut rng)
    }
}
