//! Complete tours.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, TourForgeError};
use crate::matrix::Cost;
use crate::route::{CityIndex, PartialRoute};

/// A complete tour: every city exactly once, starting at city 0, with the
/// return to city 0 implied.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tour {
    cost: Cost,
    cities: Vec<CityIndex>,
}

impl Tour {
    /// Creates a tour after checking that `cities` is a permutation of
    /// `0..cities.len()` starting at city 0.
    pub fn new(cost: Cost, cities: Vec<CityIndex>) -> Result<Self> {
        if !is_anchored_permutation(&cities) {
            return Err(TourForgeError::InvalidRoute(format!(
                "{:?} is not a tour starting at city 0",
                cities
            )));
        }
        Ok(Self { cost, cities })
    }

    /// Creates a tour from a complete route.
    ///
    /// # Panics
    ///
    /// Panics if the route is not complete.
    pub fn from_route(route: &PartialRoute, cost: Cost) -> Self {
        assert!(route.is_complete(), "tour from an incomplete route");
        Self {
            cost,
            cities: route.fixed().to_vec(),
        }
    }

    /// Returns the total cost including the closing edge.
    #[inline]
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Returns the visiting order, without the return to city 0.
    #[inline]
    pub fn cities(&self) -> &[CityIndex] {
        &self.cities
    }

    /// Returns the number of cities visited.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Returns whether the tour visits no city.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Iterates over the visiting order followed by the return to the start.
    pub fn closed_path(&self) -> impl Iterator<Item = CityIndex> + '_ {
        self.cities.iter().copied().chain(self.cities.first().copied())
    }
}

impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, city) in self.closed_path().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", city)?;
        }
        Ok(())
    }
}

fn is_anchored_permutation(cities: &[CityIndex]) -> bool {
    if cities.first() != Some(&0) {
        return false;
    }
    let mut seen = vec![false; cities.len()];
    cities.iter().all(|&city| {
        city < seen.len() && !std::mem::replace(&mut seen[city], true)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_permutation() {
        assert!(Tour::new(10, vec![0, 2, 1]).is_ok());
        assert!(Tour::new(10, vec![1, 0, 2]).is_err());
        assert!(Tour::new(10, vec![0, 1, 1]).is_err());
        assert!(Tour::new(10, vec![0, 3, 1]).is_err());
        assert!(Tour::new(10, Vec::new()).is_err());
    }

    #[test]
    fn test_from_route() {
        let route = PartialRoute::start(3).extended(2).extended(1);
        let tour = Tour::from_route(&route, 42);
        assert_eq!(tour.cost(), 42);
        assert_eq!(tour.cities(), &[0, 2, 1]);
        assert_eq!(tour.len(), 3);
    }

    #[test]
    fn test_closed_path_and_display() {
        let tour = Tour::new(7, vec![0, 3, 1, 2]).unwrap();
        assert_eq!(tour.closed_path().collect::<Vec<_>>(), vec![0, 3, 1, 2, 0]);
        assert_eq!(tour.to_string(), "0 -> 3 -> 1 -> 2 -> 0");
    }
}
