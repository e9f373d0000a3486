//! Error types for the search engine.

use thiserror::Error;

/// Errors raised while setting up a search.
///
/// The search itself has no failure path; these only occur at its boundary.
#[derive(Debug, Error)]
pub enum SolveError {
    /// The worker pool could not be created.
    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// The injected tracker holds a tour of a different size.
    #[error("Best tracker holds a {tracker}-city tour but the matrix has {matrix} cities")]
    TrackerMismatch { tracker: usize, matrix: usize },

    /// The starting route was built for a different matrix.
    #[error("Route has {route} city slots but the matrix has {matrix} cities")]
    RouteMismatch { route: usize, matrix: usize },
}
