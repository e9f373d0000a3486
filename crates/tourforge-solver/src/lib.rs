//! TourForge Solver Engine
//!
//! This crate provides the exact branch-and-bound tour search:
//! - Bound estimation for partial and complete routes
//! - The shared best-tour tracker
//! - Fork policies deciding which branches become concurrent tasks
//! - The search scheduler and its statistics

pub mod best;
pub mod bound;
pub mod error;
pub mod policy;
pub mod search;
pub mod statistics;

pub use best::BestTracker;
pub use bound::{route_cost, PrefixCostBounder, RouteBounder};
pub use error::SolveError;
pub use policy::{DepthLimitedFork, ForkPolicy};
pub use search::{BranchAndBoundSolver, SolveResult};
pub use statistics::{SearchStatistics, StatisticsCollector};
