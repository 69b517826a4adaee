//! Benchmark parameter types.

use std::fmt;

use pegasus_core::{Labeling, PegasusBuilder};

/// Parameters for a lattice generation benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct LatticeBenchParams {
    /// Lattice size `m`.
    pub rows: usize,
    /// Label space of the generated vertices.
    pub labeling: Labeling,
    /// Whether dangling boundary qubits are dropped.
    pub fabric_only: bool,
}

impl LatticeBenchParams {
    /// Returns a builder configured with these parameters.
    #[must_use]
    pub const fn builder(&self) -> PegasusBuilder {
        PegasusBuilder::new(self.rows)
            .with_labeling(self.labeling)
            .with_fabric_only(self.fabric_only)
    }
}

impl fmt::Display for LatticeBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m={},labels={}", self.rows, self.labeling)?;
        if self.fabric_only {
            f.write_str(",fabric")?;
        }
        Ok(())
    }
}

/// Parameters for a coordinate conversion benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct ConversionBenchParams {
    /// Lattice size `m`.
    pub rows: usize,
}

impl fmt::Display for ConversionBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m={}", self.rows)
    }
}
