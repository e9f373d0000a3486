//! Distance matrix fixtures.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tourforge_core::{Cost, DistanceMatrix};

/// Cost of a pentagon side.
pub const PENTAGON_SIDE: Cost = 10;

/// Cost of a pentagon diagonal.
pub const PENTAGON_DIAGONAL: Cost = 16;

/// Optimal tour cost of [`pentagon_matrix`].
pub const PENTAGON_OPTIMUM: Cost = 5 * PENTAGON_SIDE;

/// Vertex of the regular pentagon each city sits on.
///
/// Walking the perimeter visits the cities in the order 0, 2, 4, 1, 3, so
/// the identity tour uses only diagonals.
const PENTAGON_VERTEX: [usize; 5] = [0, 3, 1, 4, 2];

/// Symmetric 5-city matrix of a regular pentagon with shuffled labels.
///
/// The optimal tours are `0 -> 2 -> 4 -> 1 -> 3 -> 0` and its reverse, both
/// costing [`PENTAGON_OPTIMUM`].
pub fn pentagon_matrix() -> DistanceMatrix {
    let rows = (0..5)
        .map(|from| {
            (0..5)
                .map(|to| {
                    let steps = (PENTAGON_VERTEX[from] + 5 - PENTAGON_VERTEX[to]) % 5;
                    match steps {
                        0 => 0,
                        1 | 4 => PENTAGON_SIDE,
                        _ => PENTAGON_DIAGONAL,
                    }
                })
                .collect()
        })
        .collect();
    build(rows)
}

/// Small asymmetric 4-city matrix.
pub fn asymmetric_matrix() -> DistanceMatrix {
    build(vec![
        vec![0, 3, 12, 7],
        vec![9, 0, 4, 15],
        vec![2, 11, 0, 5],
        vec![6, 8, 1, 0],
    ])
}

/// Matrix where every edge between distinct cities costs `cost`.
///
/// Every tour costs the same, so no complete tour ever improves on the
/// identity tour.
pub fn uniform_matrix(city_count: usize, cost: Cost) -> DistanceMatrix {
    let rows = (0..city_count)
        .map(|from| {
            (0..city_count)
                .map(|to| if from == to { 0 } else { cost })
                .collect()
        })
        .collect();
    build(rows)
}

/// Asymmetric matrix with edge costs drawn from `1..=100`.
///
/// The same seed always yields the same matrix.
pub fn random_matrix(city_count: usize, seed: u64) -> DistanceMatrix {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let rows = (0..city_count)
        .map(|from| {
            (0..city_count)
                .map(|to| {
                    if from == to {
                        0
                    } else {
                        rng.random_range(1..=100)
                    }
                })
                .collect()
        })
        .collect();
    build(rows)
}

fn build(rows: Vec<Vec<Cost>>) -> DistanceMatrix {
    DistanceMatrix::from_rows(rows).expect("fixture matrix is valid")
}
