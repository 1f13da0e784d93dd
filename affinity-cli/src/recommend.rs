//! Recommend command implementation for the Affinity CLI.

use std::io::Write;

use affinity_core::{DEFAULT_TOP_N, Dataset, RecommendRequest, RecommendationRecord, Recommender};
use affinity_scorer::ItemItemRecommender;
use camino::Utf8PathBuf;
use clap::{Parser, ValueEnum};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::dataset::DatasetSelection;
use crate::{
    ARG_DATA_SEED, ARG_DATASET, ARG_FORMAT, ARG_ITEMS, ARG_SEED, ARG_TOP_N, ARG_USER, ARG_USERS,
    CliError, ENV_USER,
};

/// Message printed when a user receives no recommendations.
pub(crate) const EMPTY_MESSAGE: &str = "No recommendations found. Try another user.";

/// Rendering used for recommendation output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum OutputFormat {
    /// One `<name> (<category>)` line per product.
    #[default]
    Text,
    /// A JSON array of recommendation records.
    Json,
}

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Recommend products for a user from a dataset file or a \
                 generated sample dataset. Items similar to the ones the \
                 user already interacted with rank first; users without \
                 interactions receive a random selection.",
    about = "Recommend products for a user"
)]
#[ortho_config(prefix = "AFFINITY")]
pub(crate) struct RecommendArgs {
    /// User to recommend products for.
    #[arg(value_name = "user")]
    #[serde(default)]
    pub(crate) user: Option<String>,
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
    /// Maximum number of products to recommend (default 5).
    #[arg(long = ARG_TOP_N, value_name = "count")]
    #[serde(default)]
    pub(crate) top_n: Option<usize>,
    /// Seed for random selections. Random when omitted.
    #[arg(long = ARG_SEED, value_name = "seed")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
    /// Output format.
    #[arg(long = ARG_FORMAT, value_enum)]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecommendConfig {
    /// Validated request passed to the recommender.
    pub(crate) request: RecommendRequest,
    /// Snapshot to rank against.
    pub(crate) dataset: DatasetSelection,
    /// Output rendering.
    pub(crate) format: OutputFormat,
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let user = args.user.ok_or(CliError::MissingArgument {
            field: ARG_USER,
            env: ENV_USER,
        })?;
        let dataset =
            DatasetSelection::resolve(args.dataset, args.users, args.items, args.data_seed)?;
        let request = RecommendRequest::new(user)
            .with_top_n(args.top_n.unwrap_or(DEFAULT_TOP_N))
            .with_seed(args.seed.unwrap_or_else(rand::random));
        request.validate()?;
        Ok(Self {
            request,
            dataset,
            format: args.format.unwrap_or_default(),
        })
    }
}

/// Builds a recommender for the loaded snapshot.
pub(super) trait RecommenderBuilder {
    fn build(&self, dataset: Dataset) -> Result<Box<dyn Recommender>, CliError>;
}

pub(super) struct DefaultRecommenderBuilder;

impl RecommenderBuilder for DefaultRecommenderBuilder {
    fn build(&self, dataset: Dataset) -> Result<Box<dyn Recommender>, CliError> {
        Ok(Box::new(ItemItemRecommender::new(dataset)))
    }
}

pub(super) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_recommend_with(args, &DefaultRecommenderBuilder, &mut stdout)
}

pub(super) fn run_recommend_with(
    args: RecommendArgs,
    builder: &dyn RecommenderBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.dataset.validate_sources()?;
    let records = execute_recommend(&config, builder)?;
    match config.format {
        OutputFormat::Text => write_text(writer, &config.request.user_id, &records),
        OutputFormat::Json => write_json(writer, &records),
    }
}

fn execute_recommend(
    config: &RecommendConfig,
    builder: &dyn RecommenderBuilder,
) -> Result<Vec<RecommendationRecord>, CliError> {
    let dataset = config.dataset.load()?;
    let recommender = builder.build(dataset)?;
    let records = recommender.recommend(&config.request)?;
    log::info!(
        "{} recommendations for {:?} (seed {})",
        records.len(),
        config.request.user_id,
        config.request.seed
    );
    Ok(records)
}

/// Render `records` for a terminal.
pub(crate) fn render_text(user_id: &str, records: &[RecommendationRecord]) -> String {
    let mut out = format!("Recommended products for {user_id}:\n");
    if records.is_empty() {
        out.push_str(EMPTY_MESSAGE);
        out.push('\n');
    }
    for record in records {
        out.push_str(&format!("{} ({})\n", record.name, record.category));
    }
    out
}

fn write_text(
    writer: &mut dyn Write,
    user_id: &str,
    records: &[RecommendationRecord],
) -> Result<(), CliError> {
    writer
        .write_all(render_text(user_id, records).as_bytes())
        .map_err(CliError::WriteOutput)
}

fn write_json(writer: &mut dyn Write, records: &[RecommendationRecord]) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(records).map_err(CliError::SerializeOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
