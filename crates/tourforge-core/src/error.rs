//! Error types for TourForge

use thiserror::Error;

/// Main error type for building problem data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TourForgeError {
    /// The distance grid has no rows.
    #[error("Distance matrix is empty")]
    EmptyMatrix,

    /// A row has a different length than the number of rows.
    #[error("Distance matrix row {row} has {len} entries, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// The cost of staying in place is not zero.
    #[error("Distance from city {city} to itself is {value}, expected 0")]
    NonZeroDiagonal { city: usize, value: u64 },

    /// An edge cost large enough for a tour total to overflow.
    #[error("Distance from city {from} to city {to} is {value}, at most {max} is allowed")]
    CostTooLarge {
        from: usize,
        to: usize,
        value: u64,
        max: u64,
    },

    /// More cities than a route bitmask can track.
    #[error("{count} cities requested, at most {max} are supported")]
    TooManyCities { count: usize, max: usize },

    /// A city sequence that is not a tour of the matrix.
    #[error("Invalid route: {0}")]
    InvalidRoute(String),
}

/// Result type alias for TourForge operations
pub type Result<T> = std::result::Result<T, TourForgeError>;
