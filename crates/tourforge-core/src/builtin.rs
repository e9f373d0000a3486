//! Built-in 15-city distance table.
//!
//! Smaller problems use the leading N×N block of the table, so the distances
//! seen by a 7-city run are exactly the top-left 7×7 entries.

use crate::matrix::{Cost, DistanceMatrix};

/// Smallest city count accepted by [`clamp_city_count`].
pub const MIN_CITIES: usize = 5;

/// Largest city count accepted by [`clamp_city_count`].
pub const MAX_CITIES: usize = 15;

/// Travel costs between the 15 built-in cities.
///
/// Mostly symmetric; a handful of edges carry a one-way surcharge.
pub const BUILTIN_DISTANCES: [[Cost; MAX_CITIES]; MAX_CITIES] = [
    [0, 48, 74, 50, 44, 86, 33, 75, 23, 76, 55, 28, 55, 47, 93],
    [48, 0, 86, 38, 90, 67, 60, 35, 25, 73, 83, 35, 63, 25, 104],
    [74, 86, 0, 50, 74, 66, 41, 80, 80, 27, 38, 62, 24, 105, 20],
    [50, 38, 50, 0, 88, 37, 38, 34, 41, 36, 55, 31, 27, 60, 67],
    [44, 90, 74, 79, 0, 115, 43, 111, 67, 99, 45, 56, 67, 90, 90],
    [86, 58, 66, 46, 115, 0, 72, 27, 73, 40, 83, 67, 52, 83, 84],
    [33, 60, 41, 38, 43, 72, 0, 72, 54, 49, 24, 27, 25, 72, 60],
    [75, 35, 89, 34, 111, 27, 72, 0, 56, 58, 89, 57, 60, 69, 93],
    [23, 25, 80, 41, 67, 73, 45, 65, 0, 74, 69, 18, 57, 27, 99],
    [76, 82, 27, 36, 90, 40, 49, 58, 74, 0, 50, 60, 33, 95, 36],
    [55, 83, 29, 55, 45, 83, 33, 89, 69, 50, 0, 51, 31, 96, 45],
    [28, 35, 62, 31, 56, 67, 27, 57, 18, 60, 51, 0, 40, 45, 82],
    [55, 63, 24, 27, 67, 61, 25, 60, 57, 24, 31, 40, 0, 81, 42],
    [47, 25, 105, 60, 90, 83, 72, 60, 27, 95, 105, 45, 81, 0, 124],
    [93, 104, 20, 67, 99, 75, 60, 93, 99, 36, 45, 82, 42, 124, 0],
];

/// Clamps a requested city count into `[MIN_CITIES, MAX_CITIES]`.
///
/// ```
/// use tourforge_core::clamp_city_count;
///
/// assert_eq!(clamp_city_count(0), 5);
/// assert_eq!(clamp_city_count(9), 9);
/// assert_eq!(clamp_city_count(40), 15);
/// ```
pub fn clamp_city_count(requested: usize) -> usize {
    requested.clamp(MIN_CITIES, MAX_CITIES)
}

/// Returns the leading block of the built-in table for `requested` cities,
/// after clamping.
pub fn builtin_matrix(requested: usize) -> DistanceMatrix {
    let city_count = clamp_city_count(requested);
    full_table().sub_matrix(city_count)
}

fn full_table() -> DistanceMatrix {
    let rows = BUILTIN_DISTANCES.iter().map(|row| row.to_vec()).collect();
    match DistanceMatrix::from_rows(rows) {
        Ok(matrix) => matrix,
        Err(err) => unreachable!("built-in distance table is malformed: {err}"),
    }
}
