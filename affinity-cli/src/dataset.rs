//! Dataset selection shared by every command.

use affinity_core::{DataSource, Dataset};
use affinity_data::{JsonDatasetSource, SyntheticConfig, SyntheticSource};
use camino::{Utf8Path, Utf8PathBuf};

use crate::{ARG_DATA_SEED, ARG_DATASET, ARG_ITEMS, ARG_USERS, CliError};

/// Where a command reads its snapshot from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DatasetSelection {
    /// A JSON dataset file.
    File(Utf8PathBuf),
    /// A generated sample dataset.
    Synthetic(SyntheticConfig),
}

impl DatasetSelection {
    /// Resolve merged dataset options.
    ///
    /// A dataset file excludes the generator options; without a file the
    /// generator defaults fill any option left unset.
    pub(crate) fn resolve(
        dataset: Option<Utf8PathBuf>,
        users: Option<usize>,
        items: Option<usize>,
        data_seed: Option<u64>,
    ) -> Result<Self, CliError> {
        let Some(path) = dataset else {
            return Ok(Self::Synthetic(synthetic_config(users, items, data_seed)));
        };
        let conflicting = [
            (users.is_some(), ARG_USERS),
            (items.is_some(), ARG_ITEMS),
            (data_seed.is_some(), ARG_DATA_SEED),
        ]
        .into_iter()
        .find_map(|(set, option)| set.then_some(option));
        match conflicting {
            Some(option) => Err(CliError::ConflictingDatasetOptions {
                dataset: ARG_DATASET,
                option,
            }),
            None => Ok(Self::File(path)),
        }
    }

    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        match self {
            Self::File(path) => require_existing(path, ARG_DATASET),
            Self::Synthetic(_) => Ok(()),
        }
    }

    pub(crate) fn load(&self) -> Result<Dataset, CliError> {
        match self {
            Self::File(path) => JsonDatasetSource::new(path.clone())
                .load()
                .map_err(CliError::LoadDataset),
            Self::Synthetic(config) => Ok(SyntheticSource::new(*config).load()?),
        }
    }
}

/// Fill unset generator options from [`SyntheticConfig::default`].
pub(crate) fn synthetic_config(
    users: Option<usize>,
    items: Option<usize>,
    data_seed: Option<u64>,
) -> SyntheticConfig {
    let defaults = SyntheticConfig::default();
    SyntheticConfig {
        user_count: users.unwrap_or(defaults.user_count),
        item_count: items.unwrap_or(defaults.item_count),
        seed: data_seed.unwrap_or(defaults.seed),
    }
}

fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match affinity_data::fs::is_regular_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::MissingSourceFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}
