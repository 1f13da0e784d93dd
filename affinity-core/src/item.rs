//! Catalog entries and the records returned to callers.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A product that can be recommended.
///
/// The identifier is the join key across the catalog, the interaction matrix
/// and the similarity model. Categories form an open set.
///
/// # Examples
/// ```
/// use affinity_core::Item;
///
/// let item = Item::new("item1", "Product 1", "Books");
///
/// assert_eq!(item.id, "item1");
/// assert_eq!(item.category, "Books");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Item {
    /// Unique identifier.
    pub id: String,
    /// Human-readable display name.
    pub name: String,
    /// Category label, e.g. `Electronics`.
    pub category: String,
}

impl Item {
    /// Construct an item from its catalog fields.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
        }
    }
}

/// A recommended item, copied out of the catalog.
///
/// Records carry the catalog fields only; ranking scores are deliberately not
/// part of the contract.
///
/// # Examples
/// ```
/// use affinity_core::{Item, RecommendationRecord};
///
/// let item = Item::new("item2", "Product 2", "Clothing");
/// let record = RecommendationRecord::from(&item);
///
/// assert_eq!(record.name, "Product 2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RecommendationRecord {
    /// Identifier of the recommended item.
    pub id: String,
    /// Display name of the recommended item.
    pub name: String,
    /// Category of the recommended item.
    pub category: String,
}

impl From<&Item> for RecommendationRecord {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            category: item.category.clone(),
        }
    }
}

impl From<Item> for RecommendationRecord {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            category: item.category,
        }
    }
}
