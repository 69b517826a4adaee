//! Nice indices: Chimera-style addressing of the lattice's central region.
//!
//! The central `(m - 1) x (m - 1)` block of the lattice decomposes into three
//! interleaved Chimera tilings of `K4,4` cells. A nice index `(t, y, x, u, k)`
//! names tiling `t`, cell row `y`, cell column `x`, shore `u` and shore slot
//! `k`.

use std::fmt;

use super::PegasusIndex;

/// A node address `(t, y, x, u, k)` in the nice labeling.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NiceIndex {
    /// Tiling, in `[0, 3)`.
    pub t: usize,
    /// Cell row, in `[0, m - 1)`.
    pub y: usize,
    /// Cell column, in `[0, m - 1)`.
    pub x: usize,
    /// Shore (orientation), `0` or `1`.
    pub u: usize,
    /// Slot within the shore, in `[0, 4)`.
    pub k: usize,
}

impl NiceIndex {
    /// Creates an index from its five components without validating them.
    #[must_use]
    pub const fn new(t: usize, y: usize, x: usize, u: usize, k: usize) -> Self {
        Self { t, y, x, u, k }
    }

    /// Returns the components as a plain tuple.
    #[must_use]
    pub const fn to_tuple(self) -> (usize, usize, usize, usize, usize) {
        (self.t, self.y, self.x, self.u, self.k)
    }
}

impl From<(usize, usize, usize, usize, usize)> for NiceIndex {
    fn from((t, y, x, u, k): (usize, usize, usize, usize, usize)) -> Self {
        Self::new(t, y, x, u, k)
    }
}

impl fmt::Display for NiceIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {}, {})",
            self.t, self.y, self.x, self.u, self.k
        )
    }
}

/// Maps an in-range nice index onto its Pegasus index.
pub(super) const fn nice_to_pegasus(n: NiceIndex) -> PegasusIndex {
    let NiceIndex { t, y, x, u, k } = n;
    match (t, u) {
        (0, 0) => PegasusIndex::new(0, x, 4 + k, y),
        (0, _) => PegasusIndex::new(1, y + 1, 4 + k, x),
        (1, 0) => PegasusIndex::new(0, x + 1, 8 + k, y),
        (1, _) => PegasusIndex::new(1, y + 1, k, x),
        (_, 0) => PegasusIndex::new(0, x + 1, k, y),
        (_, _) => PegasusIndex::new(1, y, 8 + k, x),
    }
}

/// Inverts [`nice_to_pegasus`].
///
/// Returns `None` when the tile row/column would underflow; the caller still
/// has to range-check `y` and `x` against the lattice size.
pub(super) const fn pegasus_to_nice(q: PegasusIndex) -> Option<NiceIndex> {
    let PegasusIndex { u, w, k, z } = q;
    let slot = k % 4;
    // (tiling, tile shift) per orientation and k-group
    let (t, shift) = match (u, k / 4) {
        (0, 0) => (2, 1),
        (0, 1) => (0, 0),
        (0, _) => (1, 1),
        (_, 0) => (1, 1),
        (_, 1) => (0, 1),
        (_, _) => (2, 0),
    };
    let Some(cell) = w.checked_sub(shift) else {
        return None;
    };
    if u == 0 {
        Some(NiceIndex::new(t, z, cell, 0, slot))
    } else {
        Some(NiceIndex::new(t, cell, z, 1, slot))
    }
}
