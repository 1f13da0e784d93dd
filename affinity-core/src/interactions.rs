//! Dense user-item interaction matrices.
//!
//! Rows are users and columns are items. Entries are non-negative integer
//! signals where `0` means "no interaction". Both axes keep their insertion
//! order and are indexed by identifier for constant-time lookup.

use std::collections::HashMap;

use thiserror::Error;

/// Errors returned by [`InteractionMatrix::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InteractionMatrixError {
    /// The matrix has no item columns.
    #[error("interaction matrix must contain at least one item")]
    NoItems,
    /// A user identifier appears more than once.
    #[error("user {user_id:?} appears more than once")]
    DuplicateUser {
        /// Repeated identifier.
        user_id: String,
    },
    /// An item identifier appears more than once.
    #[error("item {item_id:?} appears more than once")]
    DuplicateItem {
        /// Repeated identifier.
        item_id: String,
    },
    /// The number of rows differs from the number of users.
    #[error("expected {users} rows (one per user) but found {rows}")]
    RowCountMismatch {
        /// Number of user identifiers supplied.
        users: usize,
        /// Number of rows supplied.
        rows: usize,
    },
    /// A row does not have one entry per item.
    #[error("row for user {user_id:?} has {found} entries, expected {expected}")]
    RowLengthMismatch {
        /// User owning the malformed row.
        user_id: String,
        /// Number of item columns.
        expected: usize,
        /// Number of entries found in the row.
        found: usize,
    },
}

/// A dense table of user-item interaction signals.
///
/// # Examples
/// ```
/// use affinity_core::InteractionMatrix;
///
/// # fn main() -> Result<(), affinity_core::InteractionMatrixError> {
/// let matrix = InteractionMatrix::new(
///     vec!["u1".into(), "u2".into()],
///     vec!["item1".into(), "item2".into()],
///     vec![vec![1, 0], vec![0, 3]],
/// )?;
///
/// assert_eq!(matrix.get("u2", "item2"), Some(3));
/// assert_eq!(matrix.interacted_columns("u1"), Some(vec![0]));
/// assert!(matrix.interacted_columns("u9").is_none());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionMatrix {
    users: Vec<String>,
    items: Vec<String>,
    user_index: HashMap<String, usize>,
    item_index: HashMap<String, usize>,
    values: Vec<u32>,
}

impl InteractionMatrix {
    /// Validate and construct a matrix from row-major user rows.
    ///
    /// `rows[u][i]` is the signal of `users[u]` for `items[i]`. Zero users is
    /// legal; zero items is not.
    ///
    /// # Errors
    /// Returns [`InteractionMatrixError`] when identifiers repeat, when there
    /// are no items, or when the rows do not form a `users × items` table.
    pub fn new(
        users: Vec<String>,
        items: Vec<String>,
        rows: Vec<Vec<u32>>,
    ) -> Result<Self, InteractionMatrixError> {
        if items.is_empty() {
            return Err(InteractionMatrixError::NoItems);
        }
        if rows.len() != users.len() {
            return Err(InteractionMatrixError::RowCountMismatch {
                users: users.len(),
                rows: rows.len(),
            });
        }
        let user_index = index_unique(&users)
            .map_err(|user_id| InteractionMatrixError::DuplicateUser { user_id })?;
        let item_index = index_unique(&items)
            .map_err(|item_id| InteractionMatrixError::DuplicateItem { item_id })?;

        let mut values = Vec::with_capacity(users.len().saturating_mul(items.len()));
        for (user_id, row) in users.iter().zip(rows) {
            if row.len() != items.len() {
                return Err(InteractionMatrixError::RowLengthMismatch {
                    user_id: user_id.clone(),
                    expected: items.len(),
                    found: row.len(),
                });
            }
            values.extend(row);
        }

        Ok(Self {
            users,
            items,
            user_index,
            item_index,
            values,
        })
    }

    /// User identifiers in row order.
    #[must_use]
    pub fn users(&self) -> &[String] {
        &self.users
    }

    /// Item identifiers in column order.
    #[must_use]
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Number of user rows.
    #[must_use]
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Number of item columns.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Column position of `item_id`, if present.
    #[must_use]
    pub fn item_position(&self, item_id: &str) -> Option<usize> {
        self.item_index.get(item_id).copied()
    }

    /// Signals recorded for `user_id`, in column order.
    #[must_use]
    pub fn user_row(&self, user_id: &str) -> Option<&[u32]> {
        let row = *self.user_index.get(user_id)?;
        let start = row.checked_mul(self.items.len())?;
        let end = start.checked_add(self.items.len())?;
        self.values.get(start..end)
    }

    /// Signal for a single `(user, item)` pair.
    #[must_use]
    pub fn get(&self, user_id: &str, item_id: &str) -> Option<u32> {
        let column = self.item_position(item_id)?;
        self.user_row(user_id)?.get(column).copied()
    }

    /// Iterate over one item column across all users, in row order.
    ///
    /// Yields nothing when `column` is out of range.
    pub fn column(&self, column: usize) -> impl Iterator<Item = u32> + '_ {
        let in_range = column < self.items.len();
        self.values
            .iter()
            .skip(if in_range { column } else { self.values.len() })
            .step_by(self.items.len())
            .copied()
    }

    /// Column positions where `user_id` has a strictly positive signal.
    ///
    /// Returns `None` for unknown users and an empty vector for users with
    /// no interactions.
    #[must_use]
    pub fn interacted_columns(&self, user_id: &str) -> Option<Vec<usize>> {
        let row = self.user_row(user_id)?;
        Some(
            row.iter()
                .enumerate()
                .filter(|&(_, &signal)| signal > 0)
                .map(|(column, _)| column)
                .collect(),
        )
    }
}

/// Build an identifier index, returning the first repeated identifier.
fn index_unique(ids: &[String]) -> Result<HashMap<String, usize>, String> {
    let mut index = HashMap::with_capacity(ids.len());
    for (position, id) in ids.iter().enumerate() {
        if index.insert(id.clone(), position).is_some() {
            return Err(id.clone());
        }
    }
    Ok(index)
}
