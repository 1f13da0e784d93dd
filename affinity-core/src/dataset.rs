//! Dataset snapshots and the data-source seam.
//!
//! A [`Dataset`] bundles a catalog with an interaction matrix whose columns
//! cover exactly the catalog's items. Data sources produce a fresh snapshot
//! per load; the engine never persists interaction history itself.

use thiserror::Error;

use crate::{
    Catalog, CatalogAlignmentError, CatalogError, InteractionMatrix, InteractionMatrixError, Item,
};

/// Errors raised while assembling a [`Dataset`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    /// The catalog was malformed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    /// The interaction matrix was malformed.
    #[error(transparent)]
    Interactions(#[from] InteractionMatrixError),
    /// The catalog and matrix disagree on the item universe.
    #[error(transparent)]
    Alignment(#[from] CatalogAlignmentError),
}

/// A validated catalog and interaction matrix pair.
///
/// # Examples
/// ```
/// use affinity_core::{Dataset, Item};
///
/// # fn main() -> Result<(), affinity_core::DatasetError> {
/// let dataset = Dataset::from_parts(
///     vec!["user1".into()],
///     vec![Item::new("item1", "Product 1", "Books")],
///     vec![vec![1]],
/// )?;
///
/// assert_eq!(dataset.users(), ["user1".to_owned()]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    catalog: Catalog,
    interactions: InteractionMatrix,
}

impl Dataset {
    /// Pair a catalog with a matrix after checking their alignment.
    ///
    /// # Errors
    /// Returns [`CatalogAlignmentError`] when the matrix columns and catalog
    /// items differ.
    pub fn new(
        catalog: Catalog,
        interactions: InteractionMatrix,
    ) -> Result<Self, CatalogAlignmentError> {
        catalog.check_alignment(&interactions)?;
        Ok(Self {
            catalog,
            interactions,
        })
    }

    /// Build a dataset from raw users, catalog items and row-major signals.
    ///
    /// Matrix columns follow catalog order.
    ///
    /// # Errors
    /// Returns [`DatasetError`] when the catalog or matrix is malformed.
    pub fn from_parts(
        users: Vec<String>,
        items: Vec<Item>,
        rows: Vec<Vec<u32>>,
    ) -> Result<Self, DatasetError> {
        let columns = items.iter().map(|item| item.id.clone()).collect();
        let catalog = Catalog::new(items)?;
        let interactions = InteractionMatrix::new(users, columns, rows)?;
        Ok(Self::new(catalog, interactions)?)
    }

    /// The item catalog.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The interaction matrix.
    #[must_use]
    pub const fn interactions(&self) -> &InteractionMatrix {
        &self.interactions
    }

    /// User identifiers in matrix row order.
    #[must_use]
    pub fn users(&self) -> &[String] {
        self.interactions.users()
    }
}

/// Supply dataset snapshots to the engine.
///
/// Implementations may generate data, read files, or query a live store;
/// every call returns an independent snapshot.
pub trait DataSource {
    /// Error raised when a snapshot cannot be produced.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load a fresh dataset snapshot.
    ///
    /// # Errors
    /// Returns [`DataSource::Error`] when the snapshot cannot be produced.
    fn load(&self) -> Result<Dataset, Self::Error>;
}
