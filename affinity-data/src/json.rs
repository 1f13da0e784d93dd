//! JSON dataset files.
//!
//! A dataset file holds the user list, the catalog and one interaction row
//! per user whose cells follow catalog order:
//!
//! ```json
//! {
//!   "users": ["user1", "user2"],
//!   "items": [
//!     {"id": "item1", "name": "Product 1", "category": "Books"},
//!     {"id": "item2", "name": "Product 2", "category": "Clothing"}
//!   ],
//!   "interactions": [[1, 0], [0, 0]]
//! }
//! ```

use std::io::{BufReader, BufWriter, Write};

use affinity_core::{DataSource, Dataset, DatasetError, Item};
use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

use crate::JsonSourceError;
use crate::fs::{create_dataset_file, open_dataset_file};

/// Serialised form of a [`Dataset`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatasetDocument {
    /// User identifiers, one per interaction row.
    pub users: Vec<String>,
    /// Catalog in display order.
    pub items: Vec<Item>,
    /// Interaction rows; cell `j` refers to `items[j]`.
    pub interactions: Vec<Vec<u32>>,
}

impl DatasetDocument {
    /// Validate the document into a [`Dataset`].
    ///
    /// # Errors
    /// Returns [`DatasetError`] when identifiers repeat or the table shape
    /// disagrees with the user list or catalog.
    pub fn into_dataset(self) -> Result<Dataset, DatasetError> {
        Dataset::from_parts(self.users, self.items, self.interactions)
    }
}

impl From<&Dataset> for DatasetDocument {
    fn from(dataset: &Dataset) -> Self {
        let matrix = dataset.interactions();
        let items = dataset.catalog().items().to_vec();
        let interactions = dataset
            .users()
            .iter()
            .map(|user| {
                items
                    .iter()
                    .map(|item| matrix.get(user, &item.id).unwrap_or_default())
                    .collect()
            })
            .collect();
        Self {
            users: dataset.users().to_vec(),
            items,
            interactions,
        }
    }
}

/// [`DataSource`] reading a [`DatasetDocument`] from disk on every load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonDatasetSource {
    path: Utf8PathBuf,
}

impl JsonDatasetSource {
    /// Source backed by the file at `path`.
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DataSource for JsonDatasetSource {
    type Error = JsonSourceError;

    fn load(&self) -> Result<Dataset, Self::Error> {
        let file = open_dataset_file(&self.path).map_err(|source| JsonSourceError::Open {
            path: self.path.clone(),
            source,
        })?;
        let document: DatasetDocument = serde_json::from_reader(BufReader::new(file))
            .map_err(|source| JsonSourceError::Parse {
                path: self.path.clone(),
                source,
            })?;
        let dataset = document
            .into_dataset()
            .map_err(|source| JsonSourceError::Invalid {
                path: self.path.clone(),
                source,
            })?;
        log::debug!(
            "loaded {} users and {} items from {}",
            dataset.users().len(),
            dataset.catalog().len(),
            self.path
        );
        Ok(dataset)
    }
}

/// Write `dataset` to `path` as pretty-printed JSON.
///
/// Missing parent directories are created.
///
/// # Errors
/// Returns [`JsonSourceError::Create`] when the file cannot be created and
/// [`JsonSourceError::Write`] when serialisation or flushing fails.
pub fn write_dataset(path: &Utf8Path, dataset: &Dataset) -> Result<(), JsonSourceError> {
    let file = create_dataset_file(path).map_err(|source| JsonSourceError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &DatasetDocument::from(dataset))
        .and_then(|()| writer.flush().map_err(serde_json::Error::io))
        .map_err(|source| JsonSourceError::Write {
            path: path.to_path_buf(),
            source,
        })
}
