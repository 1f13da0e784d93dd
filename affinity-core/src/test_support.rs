//! Test-only data sources and fixture snapshots used by unit and behaviour
//! tests across the workspace.

use std::convert::Infallible;

use crate::{DataSource, Dataset, Item};

/// `DataSource` returning a clone of a pre-built dataset.
#[derive(Debug, Clone)]
pub struct MemorySource {
    dataset: Dataset,
}

impl MemorySource {
    /// Wrap `dataset` so every load returns a copy of it.
    #[must_use]
    pub const fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }
}

impl DataSource for MemorySource {
    type Error = Infallible;

    fn load(&self) -> Result<Dataset, Self::Error> {
        Ok(self.dataset.clone())
    }
}

/// Five-item catalog `item1..item5` named `Product 1..Product 5`.
#[must_use]
pub fn five_item_catalog() -> Vec<Item> {
    ["Electronics", "Books", "Clothing", "Books", "Electronics"]
        .iter()
        .enumerate()
        .map(|(i, category)| {
            let n = i + 1;
            Item::new(format!("item{n}"), format!("Product {n}"), *category)
        })
        .collect()
}

/// Snapshot where `item2` and `item4` track `item1` closely.
///
/// - `u1` interacted with `item1` and `item3`;
/// - `u2` has no interactions;
/// - `u4` interacted with every item.
///
/// # Panics
/// Never in practice: the fixture data is statically well-formed.
#[must_use]
#[expect(clippy::expect_used, reason = "fixture data is statically valid")]
pub fn correlated_dataset() -> Dataset {
    let users = ["u1", "u2", "u4", "u5", "u6", "u7"]
        .iter()
        .map(|&u| u.to_owned())
        .collect();
    let rows = vec![
        vec![1, 0, 1, 0, 0],
        vec![0, 0, 0, 0, 0],
        vec![1, 1, 1, 1, 1],
        vec![1, 1, 0, 1, 0],
        vec![1, 1, 0, 1, 0],
        vec![0, 0, 1, 0, 1],
    ];
    Dataset::from_parts(users, five_item_catalog(), rows).expect("fixture dataset is valid")
}
