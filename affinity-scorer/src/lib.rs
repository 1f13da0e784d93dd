//! Item-item collaborative filtering for the Affinity engine.
//!
//! The crate provides the two halves of the recommendation pipeline:
//! - **Similarity building** treats every item column of an
//!   [`InteractionMatrix`](affinity_core::InteractionMatrix) as a vector over
//!   users and computes pairwise cosine similarity. Items with no
//!   interactions score `0.0` against everything, themselves included.
//! - **Recommendation** averages each catalog item's similarity to the items
//!   a user already engaged with, ranks by that mean, drops the items the
//!   user has seen and truncates to `top_n`. Users without interactions, and
//!   users whose ranked list empties out, fall back to uniform sampling from
//!   the catalog using an injected random generator.
//!
//! [`ItemItemRecommender`] wraps both behind the
//! [`Recommender`](affinity_core::Recommender) trait and seeds a
//! `ChaCha8Rng` from each request, so results are reproducible.
//!
//! # Examples
//!
//! ```
//! use affinity_core::{Dataset, Item, RecommendRequest, Recommender};
//! use affinity_scorer::ItemItemRecommender;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let dataset = Dataset::from_parts(
//!     vec!["u1".into(), "u2".into()],
//!     vec![
//!         Item::new("item1", "Product 1", "Books"),
//!         Item::new("item2", "Product 2", "Books"),
//!         Item::new("item3", "Product 3", "Clothing"),
//!     ],
//!     vec![vec![1, 0, 0], vec![1, 1, 0]],
//! )?;
//! let recommender = ItemItemRecommender::new(dataset);
//! let records = recommender.recommend(&RecommendRequest::new("u1").with_top_n(1))?;
//!
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].id, "item2");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod cosine;
mod recommender;
mod sampling;

pub use cosine::build_similarity;
pub use recommender::{ItemItemRecommender, ItemScore, recommend};
