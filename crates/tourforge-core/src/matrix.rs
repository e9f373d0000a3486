//! Distance model.
//!
//! A [`DistanceMatrix`] is built once and then only read, so it can be shared
//! by reference across every search task without synchronization.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, TourForgeError};

/// Cost of traveling along one edge, and of whole routes.
pub type Cost = u64;

/// Largest city count a matrix may hold.
///
/// Routes track their visited set in a 64-bit mask.
pub const MAX_CITIES_SUPPORTED: usize = 64;

/// Largest edge cost accepted in a matrix of `city_count` cities.
///
/// A tour has `city_count` edges, so its total never exceeds [`Cost::MAX`].
pub fn max_edge_cost(city_count: usize) -> Cost {
    Cost::MAX / city_count.max(1) as Cost
}

/// Square grid of pairwise travel costs.
///
/// `distance(i, j)` is the cost from city `i` to city `j`. The grid does not
/// have to be symmetric, but the diagonal is always zero.
///
/// # Example
///
/// ```
/// use tourforge_core::DistanceMatrix;
///
/// let matrix = DistanceMatrix::from_rows(vec![
///     vec![0, 2, 9],
///     vec![1, 0, 6],
///     vec![15, 7, 0],
/// ]).unwrap();
///
/// assert_eq!(matrix.city_count(), 3);
/// assert_eq!(matrix.distance(0, 2), 9);
/// assert_eq!(matrix.distance(2, 0), 15);
/// assert!(!matrix.is_symmetric());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DistanceMatrix {
    city_count: usize,
    // Row-major, flattened for cache locality
    costs: Vec<Cost>,
}

impl DistanceMatrix {
    /// Builds a matrix from its rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid is empty, not square, larger than
    /// [`MAX_CITIES_SUPPORTED`], has a non-zero diagonal entry, or has an
    /// edge above [`max_edge_cost`] for its size.
    pub fn from_rows(rows: Vec<Vec<Cost>>) -> Result<Self> {
        let city_count = rows.len();
        if city_count == 0 {
            return Err(TourForgeError::EmptyMatrix);
        }
        if city_count > MAX_CITIES_SUPPORTED {
            return Err(TourForgeError::TooManyCities {
                count: city_count,
                max: MAX_CITIES_SUPPORTED,
            });
        }

        let max = max_edge_cost(city_count);
        let mut costs = Vec::with_capacity(city_count * city_count);
        for (row_index, row) in rows.into_iter().enumerate() {
            if row.len() != city_count {
                return Err(TourForgeError::NotSquare {
                    row: row_index,
                    len: row.len(),
                    expected: city_count,
                });
            }
            if row[row_index] != 0 {
                return Err(TourForgeError::NonZeroDiagonal {
                    city: row_index,
                    value: row[row_index],
                });
            }
            if let Some((to, &value)) = row.iter().enumerate().find(|&(_, &c)| c > max) {
                return Err(TourForgeError::CostTooLarge {
                    from: row_index,
                    to,
                    value,
                    max,
                });
            }
            costs.extend(row);
        }

        Ok(Self { city_count, costs })
    }

    /// Returns the number of cities.
    #[inline]
    pub fn city_count(&self) -> usize {
        self.city_count
    }

    /// Returns the cost of traveling from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is not below [`city_count`](Self::city_count).
    #[inline]
    pub fn distance(&self, from: usize, to: usize) -> Cost {
        assert!(
            from < self.city_count && to < self.city_count,
            "city index out of range: ({}, {}) in a {}-city matrix",
            from,
            to,
            self.city_count
        );
        self.costs[from * self.city_count + to]
    }

    /// Returns the outgoing costs of one city.
    pub fn row(&self, from: usize) -> &[Cost] {
        let start = from * self.city_count;
        &self.costs[start..start + self.city_count]
    }

    /// Returns the leading `city_count`×`city_count` block.
    ///
    /// # Panics
    ///
    /// Panics if `city_count` is zero or larger than this matrix.
    pub fn sub_matrix(&self, city_count: usize) -> Self {
        assert!(
            city_count > 0 && city_count <= self.city_count,
            "sub-matrix of {} cities requested from a {}-city matrix",
            city_count,
            self.city_count
        );
        let costs = (0..city_count)
            .flat_map(|from| self.row(from)[..city_count].iter().copied())
            .collect();
        Self { city_count, costs }
    }

    /// Returns whether `distance(i, j) == distance(j, i)` for every pair.
    pub fn is_symmetric(&self) -> bool {
        (0..self.city_count)
            .all(|i| (i + 1..self.city_count).all(|j| self.distance(i, j) == self.distance(j, i)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> DistanceMatrix {
        DistanceMatrix::from_rows(vec![vec![0, 2, 9], vec![1, 0, 6], vec![15, 7, 0]]).unwrap()
    }

    #[test]
    fn test_distance_lookup() {
        let matrix = small();
        assert_eq!(matrix.distance(0, 1), 2);
        assert_eq!(matrix.distance(1, 0), 1);
        assert_eq!(matrix.distance(2, 1), 7);
        assert_eq!(matrix.distance(1, 1), 0);
    }

    #[test]
    fn test_row() {
        assert_eq!(small().row(2), &[15, 7, 0]);
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(
            DistanceMatrix::from_rows(Vec::new()),
            Err(TourForgeError::EmptyMatrix)
        );
    }

    #[test]
    fn test_not_square_rejected() {
        let err = DistanceMatrix::from_rows(vec![vec![0, 1], vec![1]]).unwrap_err();
        assert_eq!(
            err,
            TourForgeError::NotSquare {
                row: 1,
                len: 1,
                expected: 2
            }
        );
    }

    #[test]
    fn test_non_zero_diagonal_rejected() {
        let err = DistanceMatrix::from_rows(vec![vec![0, 1], vec![1, 3]]).unwrap_err();
        assert_eq!(err, TourForgeError::NonZeroDiagonal { city: 1, value: 3 });
        assert!(err.to_string().contains("city 1"));
    }

    #[test]
    fn test_too_many_cities_rejected() {
        let n = MAX_CITIES_SUPPORTED + 1;
        let rows = (0..n)
            .map(|i| (0..n).map(|j| if i == j { 0 } else { 1 }).collect())
            .collect();
        assert!(matches!(
            DistanceMatrix::from_rows(rows),
            Err(TourForgeError::TooManyCities { count, .. }) if count == n
        ));
    }

    #[test]
    fn test_cost_too_large_rejected() {
        let max = max_edge_cost(3);
        assert!(DistanceMatrix::from_rows(vec![
            vec![0, max, 1],
            vec![1, 0, max],
            vec![max, 1, 0],
        ])
        .is_ok());

        let err = DistanceMatrix::from_rows(vec![
            vec![0, 1, 1],
            vec![1, 0, max + 1],
            vec![1, 1, 0],
        ])
        .unwrap_err();
        assert_eq!(
            err,
            TourForgeError::CostTooLarge {
                from: 1,
                to: 2,
                value: max + 1,
                max
            }
        );
    }

    #[test]
    fn test_sub_matrix() {
        let sub = small().sub_matrix(2);
        assert_eq!(sub.city_count(), 2);
        assert_eq!(sub.distance(0, 1), 2);
        assert_eq!(sub.distance(1, 0), 1);
    }

    #[test]
    fn test_symmetry() {
        assert!(!small().is_symmetric());
        let sym = DistanceMatrix::from_rows(vec![vec![0, 4], vec![4, 0]]).unwrap();
        assert!(sym.is_symmetric());
    }

    #[test]
    #[should_panic(expected = "city index out of range")]
    fn test_out_of_range_panics() {
        small().distance(0, 3);
    }
}
