//! Item-item similarity models.
//!
//! A [`SimilarityModel`] is a square, symmetric table of scores indexed by
//! item identifier on both axes. Its axes follow the column order of the
//! [`InteractionMatrix`] it was derived from. Models are immutable once
//! built, so a single model can be shared across threads for a batch of
//! requests.

use std::collections::HashMap;

use crate::InteractionMatrix;

/// Square, symmetric item-item similarity scores.
///
/// # Examples
/// ```
/// use affinity_core::{InteractionMatrix, SimilarityModel};
///
/// # fn main() -> Result<(), affinity_core::InteractionMatrixError> {
/// let matrix = InteractionMatrix::new(
///     vec!["u1".into()],
///     vec!["item1".into(), "item2".into()],
///     vec![vec![1, 1]],
/// )?;
/// let model = SimilarityModel::from_pairwise(&matrix, |i, j| if i == j { 1.0 } else { 0.5 });
///
/// assert_eq!(model.get("item1", "item2"), Some(0.5));
/// assert_eq!(model.get("item2", "item1"), Some(0.5));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityModel {
    items: Vec<String>,
    index: HashMap<String, usize>,
    scores: Vec<f64>,
}

impl SimilarityModel {
    /// Build a model over the columns of `matrix`.
    ///
    /// `pair_score(i, j)` is called once for every `i <= j` and the result is
    /// mirrored into `(j, i)`, so the model is symmetric regardless of the
    /// scoring function.
    pub fn from_pairwise<F>(matrix: &InteractionMatrix, mut pair_score: F) -> Self
    where
        F: FnMut(usize, usize) -> f64,
    {
        let items = matrix.items().to_vec();
        let n = items.len();
        let mut scores = vec![0.0_f64; n.saturating_mul(n)];
        for row in 0..n {
            for col in row..n {
                let score = pair_score(row, col);
                for (a, b) in [(row, col), (col, row)] {
                    if let Some(slot) = scores.get_mut(a * n + b) {
                        *slot = score;
                    }
                }
            }
        }
        let index = items
            .iter()
            .enumerate()
            .map(|(position, id)| (id.clone(), position))
            .collect();
        Self {
            items,
            index,
            scores,
        }
    }

    /// Item identifiers along both axes.
    #[must_use]
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Number of items on each axis.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Report whether the model covers no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Axis position of `item_id`, if present.
    #[must_use]
    pub fn position(&self, item_id: &str) -> Option<usize> {
        self.index.get(item_id).copied()
    }

    /// Similarity between two items by identifier.
    #[must_use]
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        self.score_at(self.position(a)?, self.position(b)?)
    }

    /// Similarity between two items by axis position.
    #[must_use]
    pub fn score_at(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.len() || col >= self.len() {
            return None;
        }
        self.scores.get(row * self.len() + col).copied()
    }

    /// Iterate over rows in axis order.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.scores.chunks(self.len().max(1))
    }

    /// Report whether the model's axes match the columns of `matrix`,
    /// including order.
    #[must_use]
    pub fn is_aligned_with(&self, matrix: &InteractionMatrix) -> bool {
        self.items == matrix.items()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn matrix(items: usize) -> InteractionMatrix {
        InteractionMatrix::new(
            vec!["user1".into()],
            (1..=items).map(|i| format!("item{i}")).collect(),
            vec![vec![1; items]],
        )
        .expect("valid matrix")
    }

    #[rstest]
    fn pairwise_scores_are_mirrored() {
        let mut calls = Vec::new();
        let model = SimilarityModel::from_pairwise(&matrix(3), |i, j| {
            calls.push((i, j));
            f64::from(u32::try_from(i * 10 + j).expect("small index"))
        });
        assert_eq!(calls.len(), 6);
        assert_eq!(model.score_at(0, 2), Some(2.0));
        assert_eq!(model.score_at(2, 0), Some(2.0));
        assert_eq!(model.score_at(1, 1), Some(11.0));
        assert_eq!(model.score_at(3, 0), None);
    }

    #[rstest]
    fn rows_cover_every_item() {
        let model = SimilarityModel::from_pairwise(&matrix(2), |_, _| 1.0);
        let rows: Vec<&[f64]> = model.rows().collect();
        assert_eq!(rows, vec![&[1.0, 1.0][..], &[1.0, 1.0][..]]);
    }

    #[rstest]
    fn alignment_compares_column_order() {
        let source = matrix(2);
        let model = SimilarityModel::from_pairwise(&source, |_, _| 0.0);
        assert!(model.is_aligned_with(&source));

        let reordered = InteractionMatrix::new(
            vec!["user1".into()],
            vec!["item2".into(), "item1".into()],
            vec![vec![0, 0]],
        )
        .expect("valid matrix");
        assert!(!model.is_aligned_with(&reordered));
    }
}
