//! Brute-force oracle.
//!
//! Enumerates every tour starting at city 0. Only usable for a handful of
//! cities, which is all the tests need.

use tourforge_core::{CityIndex, Cost, DistanceMatrix, Tour};

/// Returns every ordering of `0..city_count` that starts with city 0, in
/// lexicographic order.
pub fn anchored_permutations(city_count: usize) -> Vec<Vec<CityIndex>> {
    fn extend(
        prefix: &mut Vec<CityIndex>,
        remaining: &mut Vec<CityIndex>,
        out: &mut Vec<Vec<CityIndex>>,
    ) {
        if remaining.is_empty() {
            out.push(prefix.clone());
            return;
        }
        for i in 0..remaining.len() {
            let city = remaining.remove(i);
            prefix.push(city);
            extend(prefix, remaining, out);
            prefix.pop();
            remaining.insert(i, city);
        }
    }

    let mut out = Vec::new();
    if city_count == 0 {
        return out;
    }
    let mut prefix = vec![0];
    let mut remaining: Vec<CityIndex> = (1..city_count).collect();
    extend(&mut prefix, &mut remaining, &mut out);
    out
}

/// Returns the cost of the closed tour visiting `cities` in order.
pub fn tour_cost(matrix: &DistanceMatrix, cities: &[CityIndex]) -> Cost {
    cities
        .iter()
        .zip(cities.iter().cycle().skip(1))
        .map(|(&from, &to)| matrix.distance(from, to))
        .sum()
}

/// Returns the first cheapest tour by exhaustive enumeration.
pub fn brute_force(matrix: &DistanceMatrix) -> Tour {
    anchored_permutations(matrix.city_count())
        .into_iter()
        .map(|cities| (tour_cost(matrix, &cities), cities))
        .min_by_key(|(cost, _)| *cost)
        .map(|(cost, cities)| Tour::new(cost, cities).expect("enumerated tours are valid"))
        .expect("at least one tour exists")
}

/// Returns whether two tours anchored at city 0 describe the same cycle,
/// in either direction.
pub fn is_same_cycle(a: &[CityIndex], b: &[CityIndex]) -> bool {
    if a.len() != b.len() || a.first() != b.first() {
        return false;
    }
    if a == b {
        return true;
    }
    let reversed: Vec<CityIndex> = a[..1].iter().chain(a[1..].iter().rev()).copied().collect();
    reversed == b
}
