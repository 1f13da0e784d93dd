//! Seeded generator for sample datasets.

use affinity_core::{DataSource, Dataset, Item};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::SyntheticSourceError;

/// Categories assigned to generated items.
pub const CATEGORIES: [&str; 3] = ["Electronics", "Clothing", "Books"];

/// Shape and seed of a generated dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntheticConfig {
    /// Number of users, named `user1..userN`.
    pub user_count: usize,
    /// Number of items, named `item1..itemN`.
    pub item_count: usize,
    /// Seed for the generator.
    pub seed: u64,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            user_count: 10,
            item_count: 10,
            seed: 0,
        }
    }
}

/// [`DataSource`] generating a uniform random snapshot.
///
/// Each item gets a category drawn uniformly from [`CATEGORIES`]; each cell
/// of the interaction table is `0` or `1` with equal probability. The same
/// configuration always yields the same dataset.
///
/// # Examples
/// ```
/// use affinity_core::DataSource;
/// use affinity_data::{SyntheticConfig, SyntheticSource};
///
/// let source = SyntheticSource::new(SyntheticConfig::default());
/// let dataset = source.load().expect("default configuration is valid");
/// assert_eq!(dataset.users().len(), 10);
/// assert_eq!(dataset.catalog().len(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SyntheticSource {
    config: SyntheticConfig,
}

impl SyntheticSource {
    /// Source generating datasets shaped by `config`.
    #[must_use]
    pub const fn new(config: SyntheticConfig) -> Self {
        Self { config }
    }
}

impl DataSource for SyntheticSource {
    type Error = SyntheticSourceError;

    fn load(&self) -> Result<Dataset, Self::Error> {
        let SyntheticConfig {
            user_count,
            item_count,
            seed,
        } = self.config;
        if item_count == 0 {
            return Err(SyntheticSourceError::NoItems);
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let users = (1..=user_count).map(|n| format!("user{n}")).collect();
        let items = (1..=item_count)
            .map(|n| {
                let category = CATEGORIES.choose(&mut rng).copied().unwrap_or_default();
                Item::new(format!("item{n}"), format!("Product {n}"), category)
            })
            .collect();
        let rows = (0..user_count)
            .map(|_| (0..item_count).map(|_| rng.gen_range(0..=1_u32)).collect())
            .collect();

        log::debug!("generated {user_count} users x {item_count} items with seed {seed}");
        Ok(Dataset::from_parts(users, items, rows)?)
    }
}
