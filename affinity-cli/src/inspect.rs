//! `users` and `similarity` commands for inspecting a snapshot.

use std::io::Write;

use affinity_core::Dataset;
use affinity_scorer::build_similarity;
use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::dataset::DatasetSelection;
use crate::{ARG_DATA_SEED, ARG_DATASET, ARG_ITEMS, ARG_USERS, CliError};

/// CLI arguments for the `users` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(about = "List the users in a dataset")]
#[ortho_config(prefix = "AFFINITY")]
pub(crate) struct UsersArgs {
    /// JSON dataset file. A sample dataset is generated when omitted.
    #[arg(long = ARG_DATASET, value_name = "path")]
    #[serde(default)]
    pub(crate) dataset: Option<Utf8PathBuf>,
    /// Number of users in the generated dataset.
    #[arg(long = ARG_USERS, value_name = "count")]
    #[serde(default)]
    pub(crate) users: Option<usize>,
    /// Number of products in the generated dataset.
    #[arg(long = ARG_ITEMS, value_name = "count")]
    #[serde(default)]
    pub(crate) items: Option<usize>,
    /// Seed for the generated dataset.
    #[arg(long = ARG_DATA_SEED, value_name = "seed")]
    #[serde(default)]
    pub(crate) data_seed: Option<u64>,
}

impl UsersArgs {
    pub(crate) fn into_selection(self) -> Result<DatasetSelection, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        DatasetSelection::resolve(merged.dataset, merged.users, merged.items, merged.data_seed)
    }
}

/// CLI arguments for the `similarity` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Print the item-item cosine similarity model of a dataset \
                 as JSON: the item order followed by one row of scores per \
                 item.",
    about = "Print the item similarity model"
)]
#[ortho_config(prefix = "AFFINITY")]
pub(crate) struct SimilarityArgs {
    /// JSON dataset file. A sample dataset is generated when omitted.
    #[arg(long = ARG_DATASET, value_name = "path")]
    #[serde(default)]
    pub(crate) dataset: Option<Utf8PathBuf>,
    /// Number of users in the generated dataset.
    #[arg(long = ARG_USERS, value_name = "count")]
    #[serde(default)]
    pub(crate) users: Option<usize>,
    /// Number of products in the generated dataset.
    #[arg(long = ARG_ITEMS, value_name = "count")]
    #[serde(default)]
    pub(crate) items: Option<usize>,
    /// Seed for the generated dataset.
    #[arg(long = ARG_DATA_SEED, value_name = "seed")]
    #[serde(default)]
    pub(crate) data_seed: Option<u64>,
}

impl SimilarityArgs {
    pub(crate) fn into_selection(self) -> Result<DatasetSelection, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        DatasetSelection::resolve(merged.dataset, merged.users, merged.items, merged.data_seed)
    }
}

/// JSON shape of the `similarity` output.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub(crate) struct SimilarityReport {
    pub(crate) items: Vec<String>,
    pub(crate) scores: Vec<Vec<f64>>,
}

impl SimilarityReport {
    pub(crate) fn from_dataset(dataset: &Dataset) -> Self {
        let model = build_similarity(dataset.interactions());
        Self {
            items: model.items().to_vec(),
            scores: model.rows().map(<[f64]>::to_vec).collect(),
        }
    }
}

pub(super) fn run_users(args: UsersArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_users_with(args, &mut stdout)
}

pub(super) fn run_users_with(args: UsersArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let dataset = load_selection(args.into_selection()?)?;
    for user in dataset.users() {
        writeln!(writer, "{user}").map_err(CliError::WriteOutput)?;
    }
    Ok(())
}

pub(super) fn run_similarity(args: SimilarityArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_similarity_with(args, &mut stdout)
}

pub(super) fn run_similarity_with(
    args: SimilarityArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let dataset = load_selection(args.into_selection()?)?;
    let report = SimilarityReport::from_dataset(&dataset);
    let payload = serde_json::to_string_pretty(&report).map_err(CliError::SerializeOutput)?;
    writeln!(writer, "{payload}").map_err(CliError::WriteOutput)
}

fn load_selection(selection: DatasetSelection) -> Result<Dataset, CliError> {
    selection.validate_sources()?;
    selection.load()
}
