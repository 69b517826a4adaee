//! Benchmark support crate for pegasus.
//!
//! Provides the parameter and setup-error types shared by the Criterion
//! benchmarks for lattice generation and coordinate conversion.

pub mod error;
pub mod params;
