//! Shared best-tour tracking.
//!
//! The tracker follows a two-phase contract:
//!
//! 1. [`BestTracker::current_best`] is a lock-free read used for pruning.
//!    It may be momentarily stale, but it only ever decreases, so a stale
//!    value can only be too large.
//! 2. [`BestTracker::try_update`] commits a candidate under the lock, after
//!    re-checking that it still strictly improves on the stored tour.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

use tourforge_core::{Cost, DistanceMatrix, PartialRoute, Tour};

use crate::bound::route_cost;

/// The best complete tour found so far, shared by every search task.
///
/// Cost and route are always replaced together; a reader of
/// [`snapshot`](Self::snapshot) never sees the cost of one tour paired with
/// the cities of another.
///
/// # Example
///
/// ```
/// use tourforge_core::{DistanceMatrix, PartialRoute};
/// use tourforge_solver::BestTracker;
///
/// let matrix = DistanceMatrix::from_rows(vec![
///     vec![0, 2, 9],
///     vec![1, 0, 6],
///     vec![15, 7, 0],
/// ]).unwrap();
///
/// // Identity tour 0 -> 1 -> 2 -> 0
/// let tracker = BestTracker::from_identity(&matrix);
/// assert_eq!(tracker.current_best(), 23);
///
/// // 0 -> 2 -> 1 -> 0
/// let other = PartialRoute::from_prefix(3, &[0, 2, 1]).unwrap();
/// assert!(tracker.try_update(17, &other));
/// assert!(!tracker.try_update(17, &other));
/// assert_eq!(tracker.snapshot().cities(), &[0, 2, 1]);
/// ```
#[derive(Debug)]
pub struct BestTracker {
    // Mirror of `best.cost()`, written only while holding `best`.
    best_cost: AtomicU64,
    best: Mutex<Tour>,
}

impl BestTracker {
    /// Creates a tracker seeded with `tour`.
    pub fn new(tour: Tour) -> Self {
        Self {
            best_cost: AtomicU64::new(tour.cost()),
            best: Mutex::new(tour),
        }
    }

    /// Creates a tracker seeded with the identity tour `0, 1, ..., N-1`.
    pub fn from_identity(matrix: &DistanceMatrix) -> Self {
        let city_count = matrix.city_count();
        let identity = PartialRoute::identity(city_count);
        let cost = route_cost(matrix, &identity, city_count);
        Self::new(Tour::from_route(&identity, cost))
    }

    /// Returns the cost of the best tour, without locking.
    #[inline]
    pub fn current_best(&self) -> Cost {
        self.best_cost.load(Ordering::Acquire)
    }

    /// Replaces the best tour if `cost` strictly improves on it.
    ///
    /// Returns `true` when the candidate was committed. Returns `false`,
    /// leaving the tracker untouched, when a tour at least as good was
    /// already stored, including one committed concurrently between the
    /// unlocked pre-check and the lock acquisition.
    ///
    /// # Panics
    ///
    /// Panics if `route` is not complete.
    pub fn try_update(&self, cost: Cost, route: &PartialRoute) -> bool {
        if cost >= self.current_best() {
            return false;
        }

        let mut best = self.best.lock().unwrap_or_else(PoisonError::into_inner);
        if cost >= best.cost() {
            return false;
        }
        *best = Tour::from_route(route, cost);
        self.best_cost.store(cost, Ordering::Release);
        true
    }

    /// Returns a consistent copy of the best tour.
    pub fn snapshot(&self) -> Tour {
        self.best
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the number of cities of the tracked tour.
    pub fn city_count(&self) -> usize {
        self.best.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Consumes the tracker and returns the best tour.
    pub fn into_tour(self) -> Tour {
        self.best.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tourforge_test::matrices::pentagon_matrix;
    use tourforge_test::oracle::anchored_permutations;

    fn route(cities: &[usize]) -> PartialRoute {
        PartialRoute::from_prefix(cities.len(), cities).unwrap()
    }

    #[test]
    fn test_seeded_from_identity() {
        let matrix = pentagon_matrix();
        let tracker = BestTracker::from_identity(&matrix);
        let tour = tracker.snapshot();

        assert_eq!(tour.cities(), &[0, 1, 2, 3, 4]);
        assert_eq!(tracker.current_best(), tour.cost());
        assert_eq!(tracker.city_count(), 5);
    }

    #[test]
    fn test_strict_improvement_only() {
        let tracker = BestTracker::new(Tour::new(100, vec![0, 1, 2]).unwrap());

        assert!(!tracker.try_update(100, &route(&[0, 2, 1])));
        assert_eq!(tracker.snapshot().cities(), &[0, 1, 2]);

        assert!(tracker.try_update(99, &route(&[0, 2, 1])));
        assert_eq!(tracker.current_best(), 99);
        assert_eq!(tracker.snapshot().cities(), &[0, 2, 1]);

        assert!(!tracker.try_update(150, &route(&[0, 1, 2])));
        assert_eq!(tracker.into_tour().cost(), 99);
    }

    #[test]
    #[should_panic(expected = "incomplete route")]
    fn test_partial_route_rejected() {
        let tracker = BestTracker::new(Tour::new(100, vec![0, 1, 2]).unwrap());
        tracker.try_update(1, &PartialRoute::start(3));
    }

    #[test]
    fn test_concurrent_updates_keep_minimum_pair() {
        // Pairs of routes share a cost, so the minimum is a tie between the
        // last two routes.
        let routes = anchored_permutations(6);
        let cost_of = |index: usize| 10_000 - (index / 2) as Cost;
        let candidates: Vec<(Cost, PartialRoute)> = routes
            .iter()
            .enumerate()
            .map(|(i, cities)| (cost_of(i), route(cities)))
            .collect();

        let tracker = BestTracker::new(Tour::new(Cost::MAX, routes[0].clone()).unwrap());

        rayon::scope(|s| {
            for offset in 0..8 {
                let candidates = &candidates;
                let tracker = &tracker;
                s.spawn(move |_| {
                    let n = candidates.len();
                    for k in 0..n {
                        let (cost, candidate) = &candidates[(k * 7 + offset * 13) % n];
                        tracker.try_update(*cost, candidate);
                    }
                });
            }
        });

        let expected_min = candidates.iter().map(|(c, _)| *c).min().unwrap();
        let best = tracker.into_tour();
        assert_eq!(best.cost(), expected_min);

        let index = routes
            .iter()
            .position(|cities| cities.as_slice() == best.cities())
            .unwrap();
        assert_eq!(cost_of(index), best.cost());
    }

    #[test]
    fn test_current_best_never_increases() {
        let routes = anchored_permutations(5);
        let tracker = BestTracker::new(Tour::new(Cost::MAX, routes[0].clone()).unwrap());
        let mut last = tracker.current_best();

        for (i, cities) in routes.iter().enumerate() {
            let cost = ((i * 37) % 11) as Cost + 5;
            tracker.try_update(cost, &route(cities));
            let now = tracker.current_best();
            assert!(now <= last);
            last = now;
        }
    }
}
