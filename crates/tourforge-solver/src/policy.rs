//! Fork policies.
//!
//! At every branching step the scheduler asks its policy whether the
//! children should become independent tasks or be explored inline on the
//! current task. Forking near the root, where subtrees are large, gives the
//! pool enough work; forking near the leaves only adds task overhead.

use tourforge_config::DEFAULT_FORK_DEPTH;

/// Decides whether the children of a branching step run as separate tasks.
///
/// Any `Fn(usize, usize) -> bool + Send + Sync` closure is a policy:
///
/// ```
/// use tourforge_solver::ForkPolicy;
///
/// let wide_only = |_depth: usize, branching_factor: usize| branching_factor >= 8;
/// assert!(wide_only.should_fork(1, 9));
/// assert!(!wide_only.should_fork(1, 4));
/// ```
pub trait ForkPolicy: Send + Sync {
    /// Returns whether to fork.
    ///
    /// `depth` is the number of fixed cities of the route being branched,
    /// `branching_factor` the number of children it will produce.
    fn should_fork(&self, depth: usize, branching_factor: usize) -> bool;

    /// Returns the policy name used in log events.
    fn policy_name(&self) -> &'static str {
        "Custom"
    }
}

impl<F> ForkPolicy for F
where
    F: Fn(usize, usize) -> bool + Send + Sync,
{
    fn should_fork(&self, depth: usize, branching_factor: usize) -> bool {
        self(depth, branching_factor)
    }
}

/// Forks every branching step whose route has at most `max_depth` fixed
/// cities, and explores deeper levels inline.
///
/// With the default depth of 3 this creates at most
/// `(N-1) + (N-1)(N-2) + (N-1)(N-2)(N-3)` tasks for an N-city problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthLimitedFork {
    max_depth: usize,
}

impl DepthLimitedFork {
    /// Creates a policy forking up to `max_depth` fixed cities.
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Creates a policy that never forks.
    ///
    /// Branching steps always have at least one fixed city, so a limit of
    /// zero keeps the whole search on the calling task.
    pub fn sequential() -> Self {
        Self::new(0)
    }

    /// Returns the depth limit.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl Default for DepthLimitedFork {
    fn default() -> Self {
        Self::new(DEFAULT_FORK_DEPTH)
    }
}

impl ForkPolicy for DepthLimitedFork {
    #[inline]
    fn should_fork(&self, depth: usize, _branching_factor: usize) -> bool {
        depth <= self.max_depth
    }

    fn policy_name(&self) -> &'static str {
        if self.max_depth == 0 {
            "Sequential"
        } else {
            "DepthLimited"
        }
    }
}
