//! Coordinate conversion between the Pegasus label spaces.
//!
//! A node of a size-`m` lattice can be named three ways: by its linear index,
//! by its Pegasus index `(u, w, k, z)`, or (for the central region) by its nice
//! index `(t, y, x, u, k)`. [`PegasusCoordinates`] converts exactly between
//! them; every conversion is the inverse of its counterpart on the valid range.

mod nice;

use std::fmt;

use crate::error::{PegasusError, Result};

pub use self::nice::NiceIndex;

/// Number of `k` slots in a tile.
pub const TILE: usize = 12;

/// A node address `(u, w, k, z)` in the Pegasus lattice.
///
/// `u` is the orientation (0 vertical, 1 horizontal), `w` the tile row or
/// column, `k` the slot within the tile and `z` the position along the qubit's
/// long axis. Ordering follows the linear index.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct PegasusIndex {
    /// Orientation, `0` or `1`.
    pub u: usize,
    /// Tile row/column, in `[0, m)`.
    pub w: usize,
    /// Offset-table slot, in `[0, 12)`.
    pub k: usize,
    /// Position along the long axis, in `[0, m - 1)`.
    pub z: usize,
}

impl PegasusIndex {
    /// Creates an index from its four components without validating them.
    ///
    /// # Examples
    /// ```
    /// use pegasus_core::PegasusIndex;
    ///
    /// let q = PegasusIndex::new(1, 0, 11, 2);
    /// assert_eq!((q.u, q.w, q.k, q.z), (1, 0, 11, 2));
    /// ```
    #[must_use]
    pub const fn new(u: usize, w: usize, k: usize, z: usize) -> Self {
        Self { u, w, k, z }
    }

    /// Returns the components as a plain tuple.
    #[must_use]
    pub const fn to_tuple(self) -> (usize, usize, usize, usize) {
        (self.u, self.w, self.k, self.z)
    }
}

impl From<(usize, usize, usize, usize)> for PegasusIndex {
    fn from((u, w, k, z): (usize, usize, usize, usize)) -> Self {
        Self::new(u, w, k, z)
    }
}

impl fmt::Display for PegasusIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.u, self.w, self.k, self.z)
    }
}

/// Converter between linear, Pegasus and nice indices for a fixed lattice size.
///
/// # Examples
/// ```
/// use pegasus_core::{PegasusCoordinates, PegasusIndex};
///
/// let coords = PegasusCoordinates::new(4);
/// let q = PegasusIndex::new(1, 2, 7, 1);
/// let v = coords.pegasus_to_linear(q).expect("coordinate is valid");
/// assert_eq!(v, 12 * 4 * 3 + 2 * 12 * 3 + 7 * 3 + 1);
/// assert_eq!(coords.linear_to_pegasus(v).expect("index is valid"), q);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct PegasusCoordinates {
    m: usize,
    m1: usize,
}

impl PegasusCoordinates {
    /// Creates a converter for a lattice of size `m`.
    ///
    /// A size whose node count does not fit in `usize` yields a converter
    /// that addresses no nodes; use [`Self::try_new`] to reject it instead.
    #[must_use]
    pub const fn new(m: usize) -> Self {
        Self {
            m,
            m1: m.saturating_sub(1),
        }
    }

    /// Creates a converter for a lattice of size `m`, rejecting sizes the
    /// linear index cannot address.
    ///
    /// # Errors
    /// Returns [`PegasusError::InvalidSize`] when `m == 0` or when
    /// `24 * m * (m - 1)` overflows `usize`.
    ///
    /// # Examples
    /// ```
    /// use pegasus_core::{PegasusCoordinates, PegasusError};
    ///
    /// assert_eq!(PegasusCoordinates::try_new(2)?.node_count(), 48);
    /// assert_eq!(
    ///     PegasusCoordinates::try_new(usize::MAX),
    ///     Err(PegasusError::InvalidSize { got: usize::MAX })
    /// );
    /// # Ok::<(), pegasus_core::PegasusError>(())
    /// ```
    pub const fn try_new(m: usize) -> Result<Self> {
        let coords = Self::new(m);
        if m == 0 || coords.checked_node_count().is_none() {
            return Err(PegasusError::InvalidSize { got: m });
        }
        Ok(coords)
    }

    /// Returns the lattice size `m`.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.m
    }

    /// Returns the number of nodes in the lattice, `24 * m * (m - 1)`, or
    /// `None` when it does not fit in `usize`.
    #[must_use]
    pub const fn checked_node_count(&self) -> Option<usize> {
        let Some(tiles) = (2 * TILE).checked_mul(self.m) else {
            return None;
        };
        tiles.checked_mul(self.m1)
    }

    /// Returns the number of nodes in the lattice, `24 * m * (m - 1)`.
    ///
    /// Zero when the count does not fit in `usize`.
    ///
    /// # Examples
    /// ```
    /// use pegasus_core::PegasusCoordinates;
    ///
    /// assert_eq!(PegasusCoordinates::new(1).node_count(), 0);
    /// assert_eq!(PegasusCoordinates::new(2).node_count(), 48);
    /// ```
    #[must_use]
    pub const fn node_count(&self) -> usize {
        match self.checked_node_count() {
            Some(count) => count,
            None => 0,
        }
    }

    /// Returns the number of nodes with a nice representation, `24 * (m - 1)^2`.
    #[must_use]
    pub const fn nice_node_count(&self) -> usize {
        if self.checked_node_count().is_none() {
            return 0;
        }
        2 * TILE * self.m1 * self.m1
    }

    /// Checks that a linear index addresses a node of the lattice.
    ///
    /// # Errors
    /// Returns [`PegasusError::LinearOutOfRange`] when `index` is not below
    /// [`Self::node_count`].
    pub const fn validate_linear(&self, index: usize) -> Result<()> {
        if index < self.node_count() {
            Ok(())
        } else {
            Err(PegasusError::LinearOutOfRange {
                index,
                m: self.m,
                node_count: self.node_count(),
            })
        }
    }

    /// Checks every component of a Pegasus index against its range.
    ///
    /// # Errors
    /// Returns [`PegasusError::InvalidPegasusCoordinate`] when any component
    /// is out of range for this lattice size, or when the lattice is too
    /// large for its nodes to be addressed.
    pub const fn validate_pegasus(&self, q: PegasusIndex) -> Result<()> {
        let addressable = self.checked_node_count().is_some();
        if addressable && q.u < 2 && q.w < self.m && q.k < TILE && q.z < self.m1 {
            Ok(())
        } else {
            Err(PegasusError::InvalidPegasusCoordinate {
                coordinate: q,
                m: self.m,
            })
        }
    }

    /// Checks every component of a nice index against its range.
    ///
    /// # Errors
    /// Returns [`PegasusError::InvalidNiceCoordinate`] when any component is
    /// out of range for this lattice size.
    pub const fn validate_nice(&self, n: NiceIndex) -> Result<()> {
        if n.t < 3 && n.y < self.m1 && n.x < self.m1 && n.u < 2 && n.k < 4 {
            Ok(())
        } else {
            Err(PegasusError::InvalidNiceCoordinate {
                coordinate: n,
                m: self.m,
            })
        }
    }

    /// Decomposes a linear index into its Pegasus index.
    ///
    /// # Errors
    /// Returns [`PegasusError::LinearOutOfRange`] when `index` does not
    /// address a node of this lattice.
    ///
    /// # Examples
    /// ```
    /// use pegasus_core::{PegasusCoordinates, PegasusIndex};
    ///
    /// let coords = PegasusCoordinates::new(2);
    /// assert_eq!(coords.linear_to_pegasus(47)?, PegasusIndex::new(1, 1, 11, 0));
    /// assert!(coords.linear_to_pegasus(48).is_err());
    /// # Ok::<(), pegasus_core::PegasusError>(())
    /// ```
    pub fn linear_to_pegasus(&self, index: usize) -> Result<PegasusIndex> {
        self.validate_linear(index)?;
        Ok(self.decompose(index))
    }

    /// Composes the linear index of a Pegasus index.
    ///
    /// # Errors
    /// Returns [`PegasusError::InvalidPegasusCoordinate`] when any component
    /// is out of range for this lattice size.
    pub fn pegasus_to_linear(&self, q: PegasusIndex) -> Result<usize> {
        self.validate_pegasus(q)?;
        self.compose(q).ok_or(PegasusError::InvalidPegasusCoordinate {
            coordinate: q,
            m: self.m,
        })
    }

    /// Converts a nice index into its Pegasus index.
    ///
    /// # Errors
    /// Returns [`PegasusError::InvalidNiceCoordinate`] when any component is
    /// out of range for this lattice size.
    ///
    /// # Examples
    /// ```
    /// use pegasus_core::{NiceIndex, PegasusCoordinates, PegasusIndex};
    ///
    /// let coords = PegasusCoordinates::new(3);
    /// let q = coords.nice_to_pegasus(NiceIndex::new(1, 0, 1, 0, 3))?;
    /// assert_eq!(q, PegasusIndex::new(0, 2, 11, 0));
    /// assert_eq!(coords.pegasus_to_nice(q)?, NiceIndex::new(1, 0, 1, 0, 3));
    /// # Ok::<(), pegasus_core::PegasusError>(())
    /// ```
    pub fn nice_to_pegasus(&self, n: NiceIndex) -> Result<PegasusIndex> {
        self.validate_nice(n)?;
        Ok(nice::nice_to_pegasus(n))
    }

    /// Converts a Pegasus index into its nice index.
    ///
    /// # Errors
    /// Returns [`PegasusError::InvalidPegasusCoordinate`] when `q` is out of
    /// range and [`PegasusError::NoNiceRepresentation`] when `q` lies on the
    /// lattice boundary outside the nice region.
    pub fn pegasus_to_nice(&self, q: PegasusIndex) -> Result<NiceIndex> {
        self.validate_pegasus(q)?;
        nice::pegasus_to_nice(q)
            .filter(|n| self.validate_nice(*n).is_ok())
            .ok_or(PegasusError::NoNiceRepresentation {
                coordinate: q,
                m: self.m,
            })
    }

    /// Converts a linear index straight into its nice index.
    ///
    /// # Errors
    /// Propagates the errors of [`Self::linear_to_pegasus`] and
    /// [`Self::pegasus_to_nice`].
    pub fn linear_to_nice(&self, index: usize) -> Result<NiceIndex> {
        self.pegasus_to_nice(self.linear_to_pegasus(index)?)
    }

    /// Converts a nice index straight into its linear index.
    ///
    /// # Errors
    /// Returns [`PegasusError::InvalidNiceCoordinate`] when any component is
    /// out of range for this lattice size.
    pub fn nice_to_linear(&self, n: NiceIndex) -> Result<usize> {
        self.pegasus_to_linear(self.nice_to_pegasus(n)?)
    }

    /// Iterates every valid Pegasus index in linear order.
    ///
    /// # Examples
    /// ```
    /// use pegasus_core::PegasusCoordinates;
    ///
    /// let coords = PegasusCoordinates::new(3);
    /// assert_eq!(coords.pegasus_indices().count(), coords.node_count());
    /// ```
    pub fn pegasus_indices(&self) -> impl Iterator<Item = PegasusIndex> + use<> {
        let coords = *self;
        (0..coords.node_count()).map(move |v| coords.decompose(v))
    }

    /// Iterates every valid nice index in `(t, y, x, u, k)` order.
    pub fn nice_indices(&self) -> impl Iterator<Item = NiceIndex> + use<> {
        let m1 = self.m1;
        (0..3).flat_map(move |t| {
            (0..m1).flat_map(move |y| {
                (0..m1).flat_map(move |x| {
                    (0..2).flat_map(move |u| (0..4).map(move |k| NiceIndex::new(t, y, x, u, k)))
                })
            })
        })
    }

    /// Lazily converts a sequence of linear indices into Pegasus indices.
    pub fn iter_linear_to_pegasus<I>(
        &self,
        indices: I,
    ) -> impl Iterator<Item = Result<PegasusIndex>> + use<I>
    where
        I: IntoIterator<Item = usize>,
    {
        let coords = *self;
        indices.into_iter().map(move |v| coords.linear_to_pegasus(v))
    }

    /// Lazily converts a sequence of Pegasus indices into linear indices.
    pub fn iter_pegasus_to_linear<I>(
        &self,
        coordinates: I,
    ) -> impl Iterator<Item = Result<usize>> + use<I>
    where
        I: IntoIterator<Item = PegasusIndex>,
    {
        let coords = *self;
        coordinates.into_iter().map(move |q| coords.pegasus_to_linear(q))
    }

    /// Lazily converts a sequence of Pegasus indices into nice indices.
    pub fn iter_pegasus_to_nice<I>(
        &self,
        coordinates: I,
    ) -> impl Iterator<Item = Result<NiceIndex>> + use<I>
    where
        I: IntoIterator<Item = PegasusIndex>,
    {
        let coords = *self;
        coordinates.into_iter().map(move |q| coords.pegasus_to_nice(q))
    }

    /// Lazily converts a sequence of nice indices into Pegasus indices.
    pub fn iter_nice_to_pegasus<I>(
        &self,
        coordinates: I,
    ) -> impl Iterator<Item = Result<PegasusIndex>> + use<I>
    where
        I: IntoIterator<Item = NiceIndex>,
    {
        let coords = *self;
        coordinates.into_iter().map(move |n| coords.nice_to_pegasus(n))
    }

    /// Converts linear-labelled edges into Pegasus-labelled edges.
    ///
    /// # Errors
    /// Returns the first [`PegasusError::LinearOutOfRange`] encountered.
    pub fn linear_edges_to_pegasus<I>(
        &self,
        edges: I,
    ) -> Result<Vec<(PegasusIndex, PegasusIndex)>>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        edges
            .into_iter()
            .map(|(a, b)| Ok((self.linear_to_pegasus(a)?, self.linear_to_pegasus(b)?)))
            .collect()
    }

    /// Converts Pegasus-labelled edges into linear-labelled edges.
    ///
    /// # Errors
    /// Returns the first [`PegasusError::InvalidPegasusCoordinate`] encountered.
    pub fn pegasus_edges_to_linear<I>(&self, edges: I) -> Result<Vec<(usize, usize)>>
    where
        I: IntoIterator<Item = (PegasusIndex, PegasusIndex)>,
    {
        edges
            .into_iter()
            .map(|(a, b)| Ok((self.pegasus_to_linear(a)?, self.pegasus_to_linear(b)?)))
            .collect()
    }

    // Both helpers assume the input was validated; `m1 > 0` whenever a valid
    // index exists.
    fn compose(&self, q: PegasusIndex) -> Option<usize> {
        q.u.checked_mul(self.m)?
            .checked_add(q.w)?
            .checked_mul(TILE)?
            .checked_add(q.k)?
            .checked_mul(self.m1)?
            .checked_add(q.z)
    }

    const fn decompose(&self, index: usize) -> PegasusIndex {
        let z = index % self.m1;
        let chain = index / self.m1;
        let k = chain % TILE;
        let tile = chain / TILE;
        PegasusIndex::new(tile / self.m, tile % self.m, k, z)
    }
}
