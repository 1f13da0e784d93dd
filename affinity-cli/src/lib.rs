//! Command-line interface for the Affinity recommendation engine.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod dataset;
mod error;
mod generate;
mod inspect;
mod recommend;

pub use error::CliError;

use generate::{GenerateArgs, run_generate};
use inspect::{SimilarityArgs, UsersArgs, run_similarity, run_users};
use recommend::{RecommendArgs, run_recommend};

const ARG_USER: &str = "user";
const ARG_DATASET: &str = "dataset";
const ARG_USERS: &str = "users";
const ARG_ITEMS: &str = "items";
const ARG_DATA_SEED: &str = "data-seed";
const ARG_TOP_N: &str = "top-n";
const ARG_SEED: &str = "seed";
const ARG_FORMAT: &str = "format";
const ARG_OUTPUT: &str = "output";
const ENV_USER: &str = "AFFINITY_CMDS_RECOMMEND_USER";
const ENV_OUTPUT: &str = "AFFINITY_CMDS_GENERATE_OUTPUT";

/// Run the Affinity CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Recommend(args) => run_recommend(args),
        Command::Users(args) => run_users(args),
        Command::Similarity(args) => run_similarity(args),
        Command::Generate(args) => run_generate(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "affinity",
    about = "Item-item product recommendations from user interactions",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Recommend products for a user.
    Recommend(RecommendArgs),
    /// List the users in a dataset.
    Users(UsersArgs),
    /// Print the item similarity model as JSON.
    Similarity(SimilarityArgs),
    /// Write a sample dataset to a JSON file.
    Generate(GenerateArgs),
}

#[cfg(test)]
mod tests;
