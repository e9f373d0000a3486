//! TourForge Core - shared types for exact tour search
//!
//! This crate provides the fundamental data model:
//! - [`DistanceMatrix`]: immutable square grid of edge costs
//! - [`PartialRoute`]: a tour prefix anchored at city 0
//! - [`Tour`]: a complete tour with its cost
//! - The built-in 15-city distance table

pub mod builtin;
pub mod error;
pub mod matrix;
pub mod route;
pub mod tour;

pub use builtin::{builtin_matrix, clamp_city_count, BUILTIN_DISTANCES, MAX_CITIES, MIN_CITIES};
pub use error::{Result, TourForgeError};
pub use matrix::{max_edge_cost, Cost, DistanceMatrix, MAX_CITIES_SUPPORTED};
pub use route::{CityIndex, PartialRoute};
pub use tour::Tour;
