//! Cosine similarity between interaction-matrix columns.

use affinity_core::{InteractionMatrix, SimilarityModel};

/// Build an item-item cosine similarity model from `matrix`.
///
/// Each item's column is treated as a vector over users. The similarity of
/// columns `a` and `b` is `dot(a, b) / (|a| * |b|)`, or `0.0` when either
/// norm is zero. The diagonal is exactly `1.0` for every item with at least
/// one interaction. The model is symmetric and aligned with the matrix's
/// column order.
///
/// # Examples
/// ```
/// use affinity_core::InteractionMatrix;
/// use affinity_scorer::build_similarity;
///
/// # fn main() -> Result<(), affinity_core::InteractionMatrixError> {
/// let matrix = InteractionMatrix::new(
///     vec!["u1".into()],
///     vec!["item1".into(), "item2".into(), "item3".into()],
///     vec![vec![1, 1, 0]],
/// )?;
/// let model = build_similarity(&matrix);
///
/// assert_eq!(model.get("item1", "item2"), Some(1.0));
/// assert_eq!(model.get("item3", "item3"), Some(0.0));
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn build_similarity(matrix: &InteractionMatrix) -> SimilarityModel {
    let columns: Vec<Vec<f64>> = (0..matrix.item_count())
        .map(|column| matrix.column(column).map(f64::from).collect())
        .collect();
    let norms: Vec<f64> = columns.iter().map(|column| norm(column)).collect();

    log::debug!(
        "building cosine similarity for {} items over {} users",
        matrix.item_count(),
        matrix.user_count()
    );

    SimilarityModel::from_pairwise(matrix, |i, j| {
        let (Some(a), Some(b), Some(&norm_a), Some(&norm_b)) =
            (columns.get(i), columns.get(j), norms.get(i), norms.get(j))
        else {
            return 0.0;
        };
        if i == j {
            return if norm_a > 0.0 { 1.0 } else { 0.0 };
        }
        cosine(a, b, norm_a, norm_b)
    })
}

#[expect(
    clippy::float_arithmetic,
    reason = "vector norms require floating-point sums of squares"
)]
fn norm(values: &[f64]) -> f64 {
    values.iter().map(|v| v * v).sum::<f64>().sqrt()
}

/// Cosine of the angle between `a` and `b`, defined as `0.0` when either
/// vector is all zeros.
#[expect(
    clippy::float_arithmetic,
    reason = "cosine similarity divides the dot product by both norms"
)]
pub(crate) fn cosine(a: &[f64], b: &[f64], norm_a: f64, norm_b: f64) -> f64 {
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    (dot / (norm_a * norm_b)).clamp(-1.0, 1.0)
}
