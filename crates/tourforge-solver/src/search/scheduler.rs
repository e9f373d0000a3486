//! Recursive branch-and-bound exploration.

use tourforge_core::{DistanceMatrix, PartialRoute};
use tracing::debug;

use crate::best::BestTracker;
use crate::bound::RouteBounder;
use crate::policy::ForkPolicy;
use crate::statistics::StatisticsCollector;

/// Everything a search task reads while exploring.
///
/// Only the tracker and the statistics are written, both internally
/// synchronized, so a shared reference is handed to every forked task.
pub(super) struct Scheduler<'a, B, P> {
    pub(super) matrix: &'a DistanceMatrix,
    pub(super) tracker: &'a BestTracker,
    pub(super) bounder: &'a B,
    pub(super) policy: &'a P,
    pub(super) statistics: &'a StatisticsCollector,
    pub(super) log_progress: bool,
}

impl<B, P> Scheduler<'_, B, P>
where
    B: RouteBounder,
    P: ForkPolicy,
{
    /// Explores every completion of `route`.
    ///
    /// Returns only after all tasks forked below this route have finished.
    pub(super) fn explore(&self, route: PartialRoute) {
        self.statistics.record_node();

        let fixed_len = route.fixed_len();
        let cost = self.bounder.estimate(self.matrix, &route, fixed_len);
        if cost >= self.tracker.current_best() {
            self.statistics.record_pruned();
            return;
        }

        if route.is_complete() {
            self.statistics.record_leaf();
            if self.tracker.try_update(cost, &route) {
                self.statistics.record_improvement();
                if self.log_progress {
                    debug!(event = "new_best", cost = cost);
                }
            }
            return;
        }

        let branching_factor = route.unvisited_count();
        if self.policy.should_fork(fixed_len, branching_factor) {
            rayon::scope(|s| {
                for city in route.unvisited() {
                    let child = route.extended(city);
                    self.statistics.record_fork();
                    s.spawn(move |_| self.explore(child));
                }
            });
        } else {
            for city in route.unvisited() {
                self.explore(route.extended(city));
            }
        }
    }
}
