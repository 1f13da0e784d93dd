//! Ordered item catalogs.
//!
//! The catalog order is significant: it is the tie-break order when two
//! items score equally.

use std::collections::HashMap;

use thiserror::Error;

use crate::{InteractionMatrix, Item, RecommendationRecord};

/// Errors returned by [`Catalog::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Two catalog entries share an identifier.
    #[error("catalog item {item_id:?} appears more than once")]
    DuplicateItem {
        /// Repeated identifier.
        item_id: String,
    },
}

/// Errors raised when a catalog and an interaction matrix disagree on the
/// item universe.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogAlignmentError {
    /// The matrix has a column with no catalog entry.
    #[error("interaction matrix column {item_id:?} is not in the catalog")]
    ItemMissingFromCatalog {
        /// Column identifier without a catalog entry.
        item_id: String,
    },
    /// The catalog has an entry with no matrix column.
    #[error("catalog item {item_id:?} has no interaction matrix column")]
    ItemMissingFromMatrix {
        /// Catalog identifier without a column.
        item_id: String,
    },
}

/// An ordered collection of uniquely identified items.
///
/// # Examples
/// ```
/// use affinity_core::{Catalog, Item};
///
/// # fn main() -> Result<(), affinity_core::CatalogError> {
/// let catalog = Catalog::new(vec![
///     Item::new("item1", "Product 1", "Books"),
///     Item::new("item2", "Product 2", "Clothing"),
/// ])?;
///
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.position("item2"), Some(1));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    items: Vec<Item>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Validate and construct a catalog. An empty catalog is permitted here;
    /// recommenders reject it at request time.
    ///
    /// # Errors
    /// Returns [`CatalogError::DuplicateItem`] when identifiers repeat.
    pub fn new(items: Vec<Item>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(items.len());
        for (position, item) in items.iter().enumerate() {
            if index.insert(item.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateItem {
                    item_id: item.id.clone(),
                });
            }
        }
        Ok(Self { items, index })
    }

    /// Items in catalog order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Report whether the catalog has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Catalog position of `item_id`, if present.
    #[must_use]
    pub fn position(&self, item_id: &str) -> Option<usize> {
        self.index.get(item_id).copied()
    }

    /// Copy the item at `position` into a recommendation record.
    #[must_use]
    pub fn record_at(&self, position: usize) -> Option<RecommendationRecord> {
        self.items.get(position).map(RecommendationRecord::from)
    }

    /// Check that the catalog and `matrix` describe the same set of items.
    ///
    /// Order may differ; every matrix column must have a catalog entry and
    /// every catalog entry must have a column.
    ///
    /// # Errors
    /// Returns the first [`CatalogAlignmentError`] found, checking matrix
    /// columns before catalog entries.
    pub fn check_alignment(&self, matrix: &InteractionMatrix) -> Result<(), CatalogAlignmentError> {
        if let Some(item_id) = matrix
            .items()
            .iter()
            .find(|id| !self.index.contains_key(id.as_str()))
        {
            return Err(CatalogAlignmentError::ItemMissingFromCatalog {
                item_id: item_id.clone(),
            });
        }
        if let Some(item) = self
            .items
            .iter()
            .find(|item| matrix.item_position(&item.id).is_none())
        {
            return Err(CatalogAlignmentError::ItemMissingFromMatrix {
                item_id: item.id.clone(),
            });
        }
        Ok(())
    }
}
