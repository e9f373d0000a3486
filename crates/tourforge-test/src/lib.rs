//! Shared test fixtures for TourForge crates.
//!
//! This crate provides distance matrices with known properties and a
//! brute-force oracle. It does NOT depend on `tourforge-solver`, so the
//! solver can use it as a dev-dependency.
//!
//! - [`matrices`] - Hand-built and seeded random distance matrices
//! - [`oracle`] - Exhaustive enumeration of tours
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! tourforge-test = { workspace = true }
//! ```

pub mod matrices;
pub mod oracle;

pub use matrices::{asymmetric_matrix, pentagon_matrix, random_matrix, uniform_matrix};
pub use oracle::{anchored_permutations, brute_force, is_same_cycle, tour_cost};
