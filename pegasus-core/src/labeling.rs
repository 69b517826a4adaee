//! Labeling modes and node labels.
//!
//! A graph names all of its vertices in exactly one label space, selected by
//! [`Labeling`]. [`NodeLabel`] carries a label of any of the three spaces so
//! that overrides and lookups can be checked against the graph's mode.

use std::{fmt, str::FromStr, sync::Arc};

use crate::{
    coordinates::{NiceIndex, PegasusIndex},
    error::PegasusError,
};

/// Label space used for the vertices of a graph.
///
/// # Examples
/// ```
/// use pegasus_core::Labeling;
///
/// let mode: Labeling = "coordinate".parse().expect("known mode");
/// assert_eq!(mode, Labeling::Coordinate);
/// assert_eq!(Labeling::default(), Labeling::Int);
/// assert!("chimera".parse::<Labeling>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Labeling {
    /// Linear indices.
    #[default]
    Int,
    /// Pegasus indices `(u, w, k, z)`.
    Coordinate,
    /// Nice indices `(t, y, x, u, k)`.
    Nice,
}

impl Labeling {
    /// Returns the canonical name of the mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Coordinate => "coordinate",
            Self::Nice => "nice",
        }
    }
}

impl fmt::Display for Labeling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Labeling {
    type Err = PegasusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "int" => Ok(Self::Int),
            "coordinate" => Ok(Self::Coordinate),
            "nice" => Ok(Self::Nice),
            other => Err(PegasusError::InvalidLabelingMode {
                mode: Arc::from(other),
            }),
        }
    }
}

/// A vertex label in one of the three label spaces.
///
/// Labels of one graph always share a variant, so the derived ordering sorts
/// them by linear index, by `(u, w, k, z)` or by `(t, y, x, u, k)`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum NodeLabel {
    /// A linear index.
    Linear(usize),
    /// A Pegasus index.
    Pegasus(PegasusIndex),
    /// A nice index.
    Nice(NiceIndex),
}

impl NodeLabel {
    /// Returns the labeling mode this label belongs to.
    ///
    /// # Examples
    /// ```
    /// use pegasus_core::{Labeling, NodeLabel, PegasusIndex};
    ///
    /// assert_eq!(NodeLabel::Linear(3).labeling(), Labeling::Int);
    /// let q = NodeLabel::from(PegasusIndex::new(0, 0, 0, 0));
    /// assert_eq!(q.labeling(), Labeling::Coordinate);
    /// ```
    #[must_use]
    pub const fn labeling(&self) -> Labeling {
        match self {
            Self::Linear(_) => Labeling::Int,
            Self::Pegasus(_) => Labeling::Coordinate,
            Self::Nice(_) => Labeling::Nice,
        }
    }

    /// Returns the linear index if this is a linear label.
    #[must_use]
    pub const fn as_linear(&self) -> Option<usize> {
        match self {
            Self::Linear(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the Pegasus index if this is a Pegasus label.
    #[must_use]
    pub const fn as_pegasus(&self) -> Option<PegasusIndex> {
        match self {
            Self::Pegasus(q) => Some(*q),
            _ => None,
        }
    }

    /// Returns the nice index if this is a nice label.
    #[must_use]
    pub const fn as_nice(&self) -> Option<NiceIndex> {
        match self {
            Self::Nice(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<usize> for NodeLabel {
    fn from(value: usize) -> Self {
        Self::Linear(value)
    }
}

impl From<PegasusIndex> for NodeLabel {
    fn from(value: PegasusIndex) -> Self {
        Self::Pegasus(value)
    }
}

impl From<NiceIndex> for NodeLabel {
    fn from(value: NiceIndex) -> Self {
        Self::Nice(value)
    }
}

impl fmt::Display for NodeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear(v) => write!(f, "{v}"),
            Self::Pegasus(q) => q.fmt(f),
            Self::Nice(n) => n.fmt(f),
        }
    }
}
