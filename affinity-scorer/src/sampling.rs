//! Uniform catalog sampling for cold-start and fallback recommendations.

use affinity_core::{Catalog, RecommendationRecord, TopN};
use rand::Rng;
use rand::seq::index;

/// Draw up to `top_n` distinct catalog items uniformly at random.
///
/// The amount is bounded by the catalog size, so a small catalog yields all
/// of its items in a random order. Records keep the sampled order.
pub(crate) fn sample_catalog<R>(
    catalog: &Catalog,
    top_n: TopN,
    rng: &mut R,
) -> Vec<RecommendationRecord>
where
    R: Rng + ?Sized,
{
    let amount = top_n.get().min(catalog.len());
    index::sample(rng, catalog.len(), amount)
        .into_iter()
        .filter_map(|position| catalog.record_at(position))
        .collect()
}
