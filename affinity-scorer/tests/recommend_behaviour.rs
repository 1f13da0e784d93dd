#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Behavioural coverage for ranking and cold-start recommendations.

use std::cell::RefCell;

use affinity_core::test_support::correlated_dataset;
use affinity_core::{
    Catalog, Dataset, InteractionMatrix, RecommendError, RecommendRequest, RecommendationRecord,
    Recommender, TopN,
};
use affinity_scorer::{ItemItemRecommender, build_similarity, recommend};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

const SCENARIO_SEED: u64 = 2024;

/// Per-scenario state.
#[derive(Default)]
struct RecommendWorld {
    dataset: RefCell<Option<Dataset>>,
    outcome: RefCell<Option<Result<Vec<RecommendationRecord>, RecommendError>>>,
}

#[fixture]
fn world() -> RecommendWorld {
    RecommendWorld::default()
}

fn records(world: &RecommendWorld) -> Vec<RecommendationRecord> {
    world
        .outcome
        .borrow()
        .as_ref()
        .expect("recommendations requested")
        .as_ref()
        .expect("recommendation succeeded")
        .clone()
}

#[given("a catalog of five products with correlated interactions")]
fn correlated_catalog(#[from(world)] world: &RecommendWorld) {
    world.dataset.replace(Some(correlated_dataset()));
}

#[when("I rank products for \"u1\" against an empty catalog")]
fn rank_against_empty_catalog(#[from(world)] world: &RecommendWorld) {
    let matrix = InteractionMatrix::new(vec!["u1".into()], vec!["item1".into()], vec![vec![1]])
        .expect("matrix");
    let model = build_similarity(&matrix);
    let outcome = recommend(
        "u1",
        &matrix,
        &model,
        &Catalog::default(),
        TopN::default(),
        &mut ChaCha8Rng::seed_from_u64(SCENARIO_SEED),
    );
    world.outcome.replace(Some(outcome));
}

#[when("I request {count} recommendations for {user:word}")]
fn request(#[from(world)] world: &RecommendWorld, count: usize, user: String) {
    let dataset = world
        .dataset
        .borrow()
        .clone()
        .expect("dataset prepared");
    let recommender = ItemItemRecommender::new(dataset);
    let request = RecommendRequest::new(user.trim_matches('"'))
        .with_top_n(count)
        .with_seed(SCENARIO_SEED);
    world.outcome.replace(Some(recommender.recommend(&request)));
}

#[then("the recommendations are {expected}")]
fn recommendations_are(#[from(world)] world: &RecommendWorld, expected: String) {
    let ids: Vec<String> = records(world).into_iter().map(|record| record.id).collect();
    let expected: Vec<String> = expected
        .trim_matches('"')
        .split(',')
        .map(|id| id.trim().to_owned())
        .collect();
    assert_eq!(ids, expected);
}

#[then("none of the recommendations were already seen by {user:word}")]
fn none_already_seen(#[from(world)] world: &RecommendWorld, user: String) {
    let user = user.trim_matches('"');
    let dataset = world.dataset.borrow();
    let matrix = dataset.as_ref().expect("dataset prepared").interactions();
    for record in records(world) {
        assert_eq!(
            matrix.get(user, &record.id),
            Some(0),
            "{} was already seen",
            record.id
        );
    }
}

#[then("I receive {count} distinct products")]
fn distinct_products(#[from(world)] world: &RecommendWorld, count: usize) {
    let mut ids: Vec<String> = records(world).into_iter().map(|record| record.id).collect();
    assert_eq!(ids.len(), count);
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), count);
}

#[then("I receive no recommendations")]
fn no_recommendations(#[from(world)] world: &RecommendWorld) {
    assert!(records(world).is_empty());
}

#[then("ranking fails because the catalog is empty")]
fn fails_for_empty_catalog(#[from(world)] world: &RecommendWorld) {
    let borrowed = world.outcome.borrow();
    let err = borrowed
        .as_ref()
        .expect("ranking attempted")
        .as_ref()
        .expect_err("empty catalog rejected");
    assert_eq!(*err, RecommendError::EmptyCatalog);
}

#[scenario(path = "tests/features/recommend.feature", index = 0)]
fn correlated_items_first(#[from(world)] world: RecommendWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/recommend.feature", index = 1)]
fn cold_start_covers_catalog(#[from(world)] world: RecommendWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/recommend.feature", index = 2)]
fn unknown_user_gets_nothing(#[from(world)] world: RecommendWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/recommend.feature", index = 3)]
fn exhausted_user_falls_back(#[from(world)] world: RecommendWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/recommend.feature", index = 4)]
fn empty_catalog_rejected(#[from(world)] world: RecommendWorld) {
    let _ = world;
}
