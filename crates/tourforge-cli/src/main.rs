//! `tourforge` binary: finds an optimal tour over the leading block of the
//! built-in distance table and prints its cost, route and search time.

mod args;
mod report;

use std::time::Instant;

use clap::Parser;
use tourforge_config::SearchConfig;
use tourforge_core::builtin_matrix;
use tourforge_solver::{BestTracker, BranchAndBoundSolver};
use tracing::error;

use args::Cli;

fn main() {
    let cli = Cli::parse();
    tourforge_console::init();

    let matrix = builtin_matrix(cli.city_count());
    let solver = BranchAndBoundSolver::from_config(&SearchConfig::default());
    let tracker = BestTracker::from_identity(&matrix);

    let started = Instant::now();
    if let Err(err) = solver.solve_with_tracker(&matrix, &tracker) {
        error!(event = "solve_failed", error = %err);
    }
    let elapsed = started.elapsed();

    let tour = tracker.into_tour();
    println!("{}", report::tour_line(&tour));
    println!("{}", report::timing_line(elapsed));
}
