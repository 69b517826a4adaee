//! Benchmark setup error type.
//!
//! Lets setup functions propagate failures with `?` instead of using
//! `.expect()`.

use pegasus_core::PegasusError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Lattice generation or coordinate conversion failed.
    #[error("pegasus operation failed: {0}")]
    Pegasus(#[from] PegasusError),
    /// A benchmark input lattice has no vertices to work on.
    #[error("lattice of size {rows} has no vertices")]
    EmptyLattice {
        /// The lattice size that produced the empty graph.
        rows: usize,
    },
}
