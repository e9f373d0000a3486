//! Exact tour search using parallel branch-and-bound.
//!
//! The search starts from the route that fixes city 0 and extends it one
//! city at a time. Each route is first bounded: if its committed cost
//! already meets the best tour found so far, the whole subtree is skipped.
//! Complete routes are offered to the shared [`BestTracker`].
//!
//! Branching steps accepted by the [`ForkPolicy`] spawn their children as
//! tasks on a work-stealing pool and wait for all of them before returning;
//! the remaining steps recurse inline.
//!
//! Logging levels:
//! - **INFO**: Search start/end with counters
//! - **DEBUG**: Each improvement of the best tour

mod scheduler;

use std::fmt::{self, Debug};

use tourforge_config::{SearchConfig, ThreadCount};
use tourforge_core::{DistanceMatrix, PartialRoute, Tour};
use tracing::info;

use crate::best::BestTracker;
use crate::bound::{PrefixCostBounder, RouteBounder};
use crate::error::SolveError;
use crate::policy::{DepthLimitedFork, ForkPolicy};
use crate::statistics::{SearchStatistics, StatisticsCollector};

use scheduler::Scheduler;

/// Outcome of a complete search.
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// The optimal tour.
    pub tour: Tour,
    /// Counters gathered during the search.
    pub statistics: SearchStatistics,
}

/// Branch-and-bound tour solver.
///
/// # Type Parameters
/// * `B` - The bounder used for pruning and scoring
/// * `P` - The policy deciding which branching steps fork
///
/// # Example
///
/// ```
/// use tourforge_core::builtin_matrix;
/// use tourforge_solver::BranchAndBoundSolver;
///
/// let matrix = builtin_matrix(6);
/// let result = BranchAndBoundSolver::new().solve(&matrix).unwrap();
///
/// assert_eq!(result.tour.cities()[0], 0);
/// assert_eq!(result.tour.len(), 6);
/// ```
pub struct BranchAndBoundSolver<B = PrefixCostBounder, P = DepthLimitedFork> {
    bounder: B,
    policy: P,
    thread_count: ThreadCount,
    log_progress: bool,
}

impl BranchAndBoundSolver {
    /// Creates a solver with the prefix cost bound, the default fork depth
    /// and one worker per core.
    pub fn new() -> Self {
        Self::from_config(&SearchConfig::default())
    }

    /// Creates a solver from a search configuration.
    pub fn from_config(config: &SearchConfig) -> Self {
        Self {
            bounder: PrefixCostBounder::new(),
            policy: DepthLimitedFork::new(config.fork_depth),
            thread_count: config.thread_count,
            log_progress: config.log_progress,
        }
    }
}

impl Default for BranchAndBoundSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl<B, P> BranchAndBoundSolver<B, P> {
    /// Replaces the bounder.
    pub fn with_bounder<B2: RouteBounder>(self, bounder: B2) -> BranchAndBoundSolver<B2, P> {
        BranchAndBoundSolver {
            bounder,
            policy: self.policy,
            thread_count: self.thread_count,
            log_progress: self.log_progress,
        }
    }

    /// Replaces the fork policy.
    pub fn with_fork_policy<P2: ForkPolicy>(self, policy: P2) -> BranchAndBoundSolver<B, P2> {
        BranchAndBoundSolver {
            bounder: self.bounder,
            policy,
            thread_count: self.thread_count,
            log_progress: self.log_progress,
        }
    }

    /// Sets the number of worker threads.
    pub fn with_thread_count(mut self, thread_count: ThreadCount) -> Self {
        self.thread_count = thread_count;
        self
    }

    /// Enables or disables improvement logging.
    pub fn with_log_progress(mut self, log_progress: bool) -> Self {
        self.log_progress = log_progress;
        self
    }
}

impl<B, P> BranchAndBoundSolver<B, P>
where
    B: RouteBounder,
    P: ForkPolicy,
{
    /// Finds an optimal tour of `matrix`.
    ///
    /// The best tour starts as the identity tour and is replaced whenever
    /// the search completes a strictly cheaper one.
    pub fn solve(&self, matrix: &DistanceMatrix) -> Result<SolveResult, SolveError> {
        let tracker = BestTracker::from_identity(matrix);
        let statistics = self.solve_with_tracker(matrix, &tracker)?;
        Ok(SolveResult {
            tour: tracker.into_tour(),
            statistics,
        })
    }

    /// Runs the full search against an injected tracker.
    ///
    /// The tracker may be seeded with any tour of the right size; routes
    /// that cannot beat it are pruned.
    pub fn solve_with_tracker(
        &self,
        matrix: &DistanceMatrix,
        tracker: &BestTracker,
    ) -> Result<SearchStatistics, SolveError> {
        self.explore_from(matrix, tracker, PartialRoute::start(matrix.city_count()))
    }

    /// Explores every completion of `route` against an injected tracker.
    ///
    /// Returns once the whole subtree below `route` has been explored.
    pub fn explore_from(
        &self,
        matrix: &DistanceMatrix,
        tracker: &BestTracker,
        route: PartialRoute,
    ) -> Result<SearchStatistics, SolveError> {
        let city_count = matrix.city_count();
        if tracker.city_count() != city_count {
            return Err(SolveError::TrackerMismatch {
                tracker: tracker.city_count(),
                matrix: city_count,
            });
        }
        if route.city_count() != city_count {
            return Err(SolveError::RouteMismatch {
                route: route.city_count(),
                matrix: city_count,
            });
        }

        let threads = self.thread_count.resolve();
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("tourforge-worker-{}", i))
            .build()?;

        info!(
            event = "solve_start",
            city_count = city_count as u64,
            thread_count = threads as u64,
            fork_policy = self.policy.policy_name(),
            initial_cost = tracker.current_best(),
        );

        let collector = StatisticsCollector::new();
        let scheduler = Scheduler {
            matrix,
            tracker,
            bounder: &self.bounder,
            policy: &self.policy,
            statistics: &collector,
            log_progress: self.log_progress,
        };
        pool.install(|| scheduler.explore(route));

        let statistics = collector.into_statistics();

        info!(
            event = "solve_end",
            cost = tracker.current_best(),
            nodes = statistics.nodes_explored,
            pruned = statistics.branches_pruned,
            leaves = statistics.leaves_evaluated,
            improvements = statistics.improvements,
            tasks_forked = statistics.tasks_forked,
            duration_ms = statistics.duration_ms(),
        );

        Ok(statistics)
    }
}

impl<B, P> Debug for BranchAndBoundSolver<B, P>
where
    P: ForkPolicy,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BranchAndBoundSolver")
            .field("fork_policy", &self.policy.policy_name())
            .field("thread_count", &self.thread_count)
            .field("log_progress", &self.log_progress)
            .finish()
    }
}
