//! Partial routes: tour prefixes anchored at city 0.
//!
//! Every search step owns its own `PartialRoute`. Extending a route produces
//! an independent copy, so routes handed to concurrent tasks never alias.
//! For the small problems this crate targets, the city slots live inline
//! and a copy does not touch the heap.

use smallvec::{smallvec, SmallVec};

use crate::error::{Result, TourForgeError};
use crate::matrix::MAX_CITIES_SUPPORTED;

/// Index of a city in a [`DistanceMatrix`](crate::DistanceMatrix).
pub type CityIndex = usize;

/// Inline capacity of route storage.
const INLINE_CITIES: usize = 16;

/// An ordered sequence of `city_count` slots of which the first `fixed_len`
/// are committed.
///
/// The committed prefix is always a permutation prefix starting at city 0.
/// Slots past the prefix hold no meaningful value.
///
/// # Example
///
/// ```
/// use tourforge_core::PartialRoute;
///
/// let root = PartialRoute::start(4);
/// assert_eq!(root.fixed(), &[0]);
///
/// let child = root.extended(2);
/// assert_eq!(child.fixed(), &[0, 2]);
/// assert_eq!(child.unvisited().collect::<Vec<_>>(), vec![1, 3]);
///
/// // The parent is untouched.
/// assert_eq!(root.fixed_len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialRoute {
    cities: SmallVec<[CityIndex; INLINE_CITIES]>,
    fixed_len: usize,
    // Bit i set when city i is in the committed prefix.
    visited: u64,
}

impl PartialRoute {
    /// Creates the root route: city 0 fixed, nothing else committed.
    ///
    /// # Panics
    ///
    /// Panics if `city_count` is zero or above
    /// [`MAX_CITIES_SUPPORTED`](crate::MAX_CITIES_SUPPORTED).
    pub fn start(city_count: usize) -> Self {
        assert_city_count(city_count);
        Self {
            cities: smallvec![0; city_count],
            fixed_len: 1,
            visited: 1,
        }
    }

    /// Creates the complete tour `0, 1, ..., city_count - 1`.
    ///
    /// # Panics
    ///
    /// Same conditions as [`start`](Self::start).
    pub fn identity(city_count: usize) -> Self {
        assert_city_count(city_count);
        Self {
            cities: (0..city_count).collect(),
            fixed_len: city_count,
            visited: full_mask(city_count),
        }
    }

    /// Builds a route whose committed prefix is `prefix`.
    ///
    /// # Errors
    ///
    /// Returns [`TourForgeError::EmptyMatrix`] for zero cities,
    /// [`TourForgeError::TooManyCities`] above [`MAX_CITIES_SUPPORTED`], and
    /// [`TourForgeError::InvalidRoute`] if the prefix is empty, does
    /// not start at city 0, is longer than `city_count`, repeats a city or
    /// names a city outside the matrix.
    pub fn from_prefix(city_count: usize, prefix: &[CityIndex]) -> Result<Self> {
        if city_count == 0 {
            return Err(TourForgeError::EmptyMatrix);
        }
        if city_count > MAX_CITIES_SUPPORTED {
            return Err(TourForgeError::TooManyCities {
                count: city_count,
                max: MAX_CITIES_SUPPORTED,
            });
        }
        if prefix.first() != Some(&0) {
            return Err(TourForgeError::InvalidRoute(
                "route must start at city 0".to_string(),
            ));
        }
        if prefix.len() > city_count {
            return Err(TourForgeError::InvalidRoute(format!(
                "prefix of {} cities exceeds {} cities",
                prefix.len(),
                city_count
            )));
        }

        let mut route = Self::start(city_count);
        for &city in &prefix[1..] {
            if city >= city_count {
                return Err(TourForgeError::InvalidRoute(format!(
                    "city {} is outside a {}-city matrix",
                    city, city_count
                )));
            }
            if route.is_visited(city) {
                return Err(TourForgeError::InvalidRoute(format!(
                    "city {} appears twice",
                    city
                )));
            }
            route.commit(city);
        }
        Ok(route)
    }

    /// Returns the total number of slots, which is the matrix city count.
    #[inline]
    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    /// Returns how many leading slots are committed.
    #[inline]
    pub fn fixed_len(&self) -> usize {
        self.fixed_len
    }

    /// Returns the committed prefix.
    #[inline]
    pub fn fixed(&self) -> &[CityIndex] {
        &self.cities[..self.fixed_len]
    }

    /// Returns every slot, committed or not.
    #[inline]
    pub fn slots(&self) -> &[CityIndex] {
        &self.cities
    }

    /// Returns whether every slot is committed.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.fixed_len == self.cities.len()
    }

    /// Returns whether `city` is part of the committed prefix.
    #[inline]
    pub fn is_visited(&self, city: CityIndex) -> bool {
        city < self.cities.len() && self.visited & (1 << city) != 0
    }

    /// Returns the number of cities not yet committed.
    #[inline]
    pub fn unvisited_count(&self) -> usize {
        self.cities.len() - self.fixed_len
    }

    /// Iterates over the cities not yet committed, in ascending order.
    pub fn unvisited(&self) -> impl Iterator<Item = CityIndex> + '_ {
        (0..self.cities.len()).filter(move |&city| !self.is_visited(city))
    }

    /// Returns a copy of this route with `city` committed at slot
    /// `fixed_len`.
    ///
    /// # Panics
    ///
    /// Panics if the route is already complete or `city` is already
    /// visited or out of range.
    pub fn extended(&self, city: CityIndex) -> Self {
        assert!(!self.is_complete(), "cannot extend a complete route");
        assert!(
            city < self.cities.len() && !self.is_visited(city),
            "city {} cannot extend route {:?}",
            city,
            self.fixed()
        );
        let mut child = self.clone();
        child.commit(city);
        child
    }

    fn commit(&mut self, city: CityIndex) {
        self.cities[self.fixed_len] = city;
        self.fixed_len += 1;
        self.visited |= 1 << city;
    }
}

fn assert_city_count(city_count: usize) {
    assert!(
        city_count > 0 && city_count <= MAX_CITIES_SUPPORTED,
        "route over {} cities is not supported",
        city_count
    );
}

fn full_mask(city_count: usize) -> u64 {
    if city_count == 64 {
        u64::MAX
    } else {
        (1u64 << city_count) - 1
    }
}
