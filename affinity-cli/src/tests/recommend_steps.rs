//! Behaviour-driven step definitions driving the recommend CLI scenarios.

use std::cell::RefCell;

use affinity_core::{RecommendError, RecommendationRecord};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

use super::helpers::{DatasetFile, StubRecommenderBuilder};
use super::*;
use crate::recommend::{DefaultRecommenderBuilder, EMPTY_MESSAGE, run_recommend_with};

struct RecommendWorld {
    dataset: DatasetFile,
    cli_args: RefCell<Vec<String>>,
    failing: RefCell<bool>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl RecommendWorld {
    fn new() -> Self {
        Self {
            dataset: DatasetFile::new(),
            cli_args: RefCell::new(Vec::new()),
            failing: RefCell::new(false),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn build_command_line(&self, user: Option<&str>) -> Vec<String> {
        let mut argv = vec!["affinity".to_string(), "recommend".to_string()];
        argv.extend(user.map(str::to_owned));
        argv.extend([
            format!("--{ARG_DATASET}"),
            self.dataset.path().as_str().to_string(),
            format!("--{ARG_SEED}"),
            "7".to_string(),
        ]);
        argv.extend(self.cli_args.borrow().iter().cloned());
        argv
    }

    fn run(&self, user: Option<&str>) {
        let invocation = self.build_command_line(user);
        let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
        let outcome = parsed.and_then(|cli| match cli.command {
            Command::Recommend(args) => {
                let mut buffer = self.stdout.borrow_mut();
                if *self.failing.borrow() {
                    let builder = StubRecommenderBuilder {
                        outcome: Err(RecommendError::EmptyCatalog),
                    };
                    run_recommend_with(args, &builder, &mut *buffer)
                } else {
                    run_recommend_with(args, &DefaultRecommenderBuilder, &mut *buffer)
                }
            }
            other => panic!("expected recommend command, found {other:?}"),
        });
        self.result.replace(Some(outcome));
    }

    fn stdout(&self) -> String {
        String::from_utf8(self.stdout.borrow().clone()).expect("stdout utf-8")
    }

    fn error(&self) -> std::cell::Ref<'_, CliError> {
        std::cell::Ref::map(self.result.borrow(), |result| {
            result
                .as_ref()
                .expect("result recorded")
                .as_ref()
                .expect_err("expected error")
        })
    }
}

#[fixture]
fn world() -> RecommendWorld {
    RecommendWorld::new()
}

#[given("a dataset file exists on disk")]
fn dataset_exists(#[from(world)] world: &RecommendWorld) {
    assert!(
        world.dataset.path().as_std_path().is_file(),
        "expected the dataset file to exist on disk"
    );
}

#[given("I request 2 recommendations")]
fn request_two(#[from(world)] world: &RecommendWorld) {
    world
        .cli_args
        .borrow_mut()
        .extend([format!("--{ARG_TOP_N}"), "2".to_string()]);
}

#[given("I request JSON output")]
fn request_json(#[from(world)] world: &RecommendWorld) {
    world
        .cli_args
        .borrow_mut()
        .extend([format!("--{ARG_FORMAT}"), "json".to_string()]);
}

#[given("the recommender fails")]
fn recommender_fails(#[from(world)] world: &RecommendWorld) {
    *world.failing.borrow_mut() = true;
}

#[when("I run the recommend command for {user:word}")]
fn run_for_user(#[from(world)] world: &RecommendWorld, user: String) {
    world.run(Some(user.trim_matches('"')));
}

#[when("I run the recommend command without a user")]
fn run_without_user(#[from(world)] world: &RecommendWorld) {
    world.run(None);
}

#[then("the command prints the two correlated products")]
fn prints_correlated_products(#[from(world)] world: &RecommendWorld) {
    assert_eq!(
        world.stdout(),
        "Recommended products for u1:\nProduct 2 (Books)\nProduct 4 (Books)\n"
    );
}

#[then("the command explains that nothing was found")]
fn explains_empty(#[from(world)] world: &RecommendWorld) {
    assert!(world.stdout().contains(EMPTY_MESSAGE));
}

#[then("the command prints 5 JSON records")]
fn prints_json_records(#[from(world)] world: &RecommendWorld) {
    let records: Vec<RecommendationRecord> =
        serde_json::from_str(&world.stdout()).expect("output should be JSON records");
    assert_eq!(records.len(), 5);
}

#[then("the command fails because the user is missing")]
fn fails_missing_user(#[from(world)] world: &RecommendWorld) {
    match &*world.error() {
        CliError::MissingArgument { field, .. } => assert_eq!(*field, ARG_USER),
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[then("the command fails because recommending failed")]
fn fails_recommending(#[from(world)] world: &RecommendWorld) {
    match &*world.error() {
        CliError::Recommend(RecommendError::EmptyCatalog) => {}
        other => panic!("expected Recommend, found {other:?}"),
    }
}

macro_rules! register_recommend_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/recommend_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: RecommendWorld) {
            let _ = world;
        }
    };
}

register_recommend_scenario!(
    recommend_from_file,
    "recommending correlated products from a dataset file"
);
register_recommend_scenario!(
    recommend_unknown_user,
    "explaining an empty result for an unknown user"
);
register_recommend_scenario!(recommend_json, "printing recommendations as JSON");
register_recommend_scenario!(recommend_missing_user, "rejecting a missing user");
register_recommend_scenario!(recommend_failure, "reporting recommender failures");
