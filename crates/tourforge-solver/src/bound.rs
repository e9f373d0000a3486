//! Route cost bounds for branch-and-bound pruning.
//!
//! A bounder estimates the cheapest cost any completion of a partial route
//! can reach. If that estimate already meets the best complete tour found so
//! far, the branch can be pruned.

use tourforge_core::{Cost, DistanceMatrix, PartialRoute};

/// Estimates route costs for pruning and scoring.
///
/// Implementations must be pure: the same route and length always yield
/// the same value, and the estimate for a partial route must never exceed
/// the cost of any tour completing it. For a complete route the estimate
/// is the exact tour cost.
pub trait RouteBounder: Send + Sync {
    /// Returns the bound for the first `fixed_len` slots of `route`.
    fn estimate(&self, matrix: &DistanceMatrix, route: &PartialRoute, fixed_len: usize) -> Cost;
}

/// Bounds a route by the cost of its committed edges.
///
/// Remaining edges are non-negative, so the committed prefix never
/// overestimates. This is a loose bound that costs one pass over the
/// prefix.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrefixCostBounder;

impl PrefixCostBounder {
    /// Creates a new prefix cost bounder.
    pub fn new() -> Self {
        Self
    }
}

impl RouteBounder for PrefixCostBounder {
    #[inline]
    fn estimate(&self, matrix: &DistanceMatrix, route: &PartialRoute, fixed_len: usize) -> Cost {
        route_cost(matrix, route, fixed_len)
    }
}

/// Sums the edges along the first `fixed_len` slots of `route`.
///
/// When `fixed_len` covers every city the closing edge back to the first
/// city is added, giving the true tour cost.
///
/// # Panics
///
/// Panics if `fixed_len` exceeds the committed prefix of `route`.
///
/// # Example
///
/// ```
/// use tourforge_core::{DistanceMatrix, PartialRoute};
/// use tourforge_solver::route_cost;
///
/// let matrix = DistanceMatrix::from_rows(vec![
///     vec![0, 2, 9],
///     vec![1, 0, 6],
///     vec![15, 7, 0],
/// ]).unwrap();
/// let route = PartialRoute::from_prefix(3, &[0, 1, 2]).unwrap();
///
/// assert_eq!(route_cost(&matrix, &route, 2), 2);
/// assert_eq!(route_cost(&matrix, &route, 3), 2 + 6 + 15);
/// ```
pub fn route_cost(matrix: &DistanceMatrix, route: &PartialRoute, fixed_len: usize) -> Cost {
    assert!(
        fixed_len <= route.fixed_len(),
        "cost of {} slots requested but only {} are committed",
        fixed_len,
        route.fixed_len()
    );
    let cities = &route.slots()[..fixed_len];
    let path: Cost = cities
        .windows(2)
        .map(|edge| matrix.distance(edge[0], edge[1]))
        .sum();

    if fixed_len == route.city_count() {
        path + matrix.distance(cities[fixed_len - 1], cities[0])
    } else {
        path
    }
}
