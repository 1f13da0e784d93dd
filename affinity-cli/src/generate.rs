//! Generate command: write a sample dataset to disk.

use std::io::Write;

use affinity_core::DataSource;
use affinity_data::{SyntheticConfig, SyntheticSource, write_dataset};
use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::dataset::synthetic_config;
use crate::{ARG_DATA_SEED, ARG_ITEMS, ARG_OUTPUT, ARG_USERS, CliError, ENV_OUTPUT};

/// CLI arguments for the `generate` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Generate a sample dataset with binary interactions and \
                 save it as JSON, ready to be passed back through --dataset.",
    about = "Write a sample dataset to a JSON file"
)]
#[ortho_config(prefix = "AFFINITY")]
pub(crate) struct GenerateArgs {
    /// Destination JSON file.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
    /// Number of users to generate.
    #[arg(long = ARG_USERS, value_name = "count")]
    #[serde(default)]
    pub(crate) users: Option<usize>,
    /// Number of products to generate.
    #[arg(long = ARG_ITEMS, value_name = "count")]
    #[serde(default)]
    pub(crate) items: Option<usize>,
    /// Generator seed.
    #[arg(long = ARG_DATA_SEED, value_name = "seed")]
    #[serde(default)]
    pub(crate) data_seed: Option<u64>,
}

/// Resolved `generate` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GenerateConfig {
    pub(crate) output: Utf8PathBuf,
    pub(crate) synthetic: SyntheticConfig,
}

impl TryFrom<GenerateArgs> for GenerateConfig {
    type Error = CliError;

    fn try_from(args: GenerateArgs) -> Result<Self, Self::Error> {
        let output = args.output.ok_or(CliError::MissingArgument {
            field: ARG_OUTPUT,
            env: ENV_OUTPUT,
        })?;
        Ok(Self {
            output,
            synthetic: synthetic_config(args.users, args.items, args.data_seed),
        })
    }
}

pub(super) fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_generate_with(args, &mut stdout)
}

pub(super) fn run_generate_with(
    args: GenerateArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let config = GenerateConfig::try_from(merged)?;
    let dataset = SyntheticSource::new(config.synthetic).load()?;
    write_dataset(&config.output, &dataset).map_err(CliError::SaveDataset)?;
    writeln!(
        writer,
        "wrote {} users and {} products to {}",
        dataset.users().len(),
        dataset.catalog().len(),
        config.output
    )
    .map_err(CliError::WriteOutput)
}
