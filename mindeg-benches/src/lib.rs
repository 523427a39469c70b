//! Benchmark support crate for mindeg.
//!
//! Provides seeded synthetic graphs and parameter types used by the Criterion
//! benchmarks for initial tree extraction and degree reduction.

pub mod error;
pub mod graphs;
pub mod params;
