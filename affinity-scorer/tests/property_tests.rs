#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Property-based tests for similarity building and ranking.
//!
//! # Invariants tested
//!
//! - **Symmetry:** `sim(a, b) == sim(b, a)` for every pair.
//! - **Range:** scores lie in `[-1, 1]`; the diagonal is `1` for items with
//!   interactions and `0` otherwise.
//! - **Unknown users:** an absent user always receives an empty list.
//! - **Bounds:** results never exceed `min(top_n, catalog size)` and contain
//!   no duplicates.
//! - **Exclusion:** ranked results never repeat items the user already saw.
//! - **Determinism:** ranked results do not depend on the random generator.


use affinity_core::TopN;
use affinity_scorer::{ItemItemRecommender, build_similarity};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use proptest_support::{assert_distinct, dataset_strategy};

fn ids(records: Vec<affinity_core::RecommendationRecord>) -> Vec<String> {
    records.into_iter().map(|record| record.id).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: the similarity model is symmetric and bounded.
    #[test]
    fn similarity_is_symmetric_and_bounded(dataset in dataset_strategy(8, 8)) {
        let matrix = dataset.interactions();
        let model = build_similarity(matrix);
        let n = model.len();
        for a in 0..n {
            for b in 0..n {
                let ab = model.score_at(a, b).expect("score in range");
                let ba = model.score_at(b, a).expect("score in range");
                prop_assert_eq!(ab.to_bits(), ba.to_bits());
                prop_assert!((-1.0..=1.0).contains(&ab));
            }
        }
    }

    /// Property: the diagonal reflects whether an item has any interaction.
    #[test]
    fn diagonal_tracks_interacted_columns(dataset in dataset_strategy(8, 8)) {
        let matrix = dataset.interactions();
        let model = build_similarity(matrix);
        for column in 0..matrix.item_count() {
            let has_signal = matrix.column(column).any(|value| value != 0);
            let expected = if has_signal { 1.0 } else { 0.0 };
            prop_assert_eq!(model.score_at(column, column), Some(expected));
        }
    }

    /// Property: unknown users receive nothing, whatever the seed.
    #[test]
    fn unknown_users_receive_nothing(
        dataset in dataset_strategy(6, 6),
        seed in any::<u64>(),
        top_n in 1_usize..10,
    ) {
        let recommender = ItemItemRecommender::new(dataset);
        let top_n = TopN::try_from(top_n).expect("positive");
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let records = recommender
            .recommend_with_rng("nobody", top_n, &mut rng)
            .expect("recommend");
        prop_assert!(records.is_empty());
    }

    /// Property: every known user gets a bounded, duplicate-free list, and
    /// ranked lists exclude items the user already interacted with.
    #[test]
    fn known_users_receive_bounded_unseen_items(
        dataset in dataset_strategy(6, 6),
        seed in any::<u64>(),
        top_n in 1_usize..10,
    ) {
        let recommender = ItemItemRecommender::new(dataset);
        let top_n = TopN::try_from(top_n).expect("positive");
        let matrix = recommender.dataset().interactions();
        let catalog_len = recommender.dataset().catalog().len();

        for user in matrix.users() {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let records = ids(
                recommender
                    .recommend_with_rng(user, top_n, &mut rng)
                    .expect("recommend"),
            );
            prop_assert!(records.len() <= top_n.get().min(catalog_len));
            assert_distinct(&records);

            let interacted = matrix.interacted_columns(user).expect("known user");
            let unseen = catalog_len.saturating_sub(interacted.len());
            if interacted.is_empty() || unseen == 0 {
                prop_assert_eq!(records.len(), top_n.get().min(catalog_len));
            } else {
                prop_assert_eq!(records.len(), top_n.get().min(unseen));
                for id in &records {
                    prop_assert_eq!(matrix.get(user, id), Some(0));
                }
            }
        }
    }

    /// Property: ranked results are identical across random generators.
    #[test]
    fn ranked_results_are_deterministic(
        dataset in dataset_strategy(6, 6),
        first_seed in any::<u64>(),
        second_seed in any::<u64>(),
    ) {
        let recommender = ItemItemRecommender::new(dataset);
        let matrix = recommender.dataset().interactions();
        let catalog_len = recommender.dataset().catalog().len();

        for user in matrix.users() {
            let interacted = matrix.interacted_columns(user).expect("known user");
            if interacted.is_empty() || interacted.len() == catalog_len {
                continue;
            }
            let first = recommender
                .recommend_with_rng(
                    user,
                    TopN::default(),
                    &mut ChaCha8Rng::seed_from_u64(first_seed),
                )
                .expect("first");
            let second = recommender
                .recommend_with_rng(
                    user,
                    TopN::default(),
                    &mut ChaCha8Rng::seed_from_u64(second_seed),
                )
                .expect("second");
            prop_assert_eq!(first, second);
        }
    }
}
