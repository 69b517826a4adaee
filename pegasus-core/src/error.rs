//! Error types for the Pegasus core library.
//!
//! Defines the error enum exposed by the public API, its stable error codes
//! and a convenient result alias.

use std::{fmt, sync::Arc};

use thiserror::Error;

use crate::{
    coordinates::{NiceIndex, PegasusIndex},
    labeling::{Labeling, NodeLabel},
};

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Coarse classification of a [`PegasusError`].
///
/// None of the categories is transient: generation is deterministic, so every
/// error points at a caller mistake and is never worth retrying.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorCategory {
    /// Conflicting or malformed size, offset or labeling parameters.
    Configuration,
    /// A linear index or tuple lies outside the valid range for the lattice size.
    Coordinate,
    /// An override or lookup references a label that cannot belong to the graph.
    Structural,
}

/// Error type produced by coordinate conversion and lattice construction.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum PegasusError {
    /// The lattice size must be at least one and small enough for every
    /// node to have a linear index.
    #[error("lattice size must be at least 1 and addressable by a linear index (got {got})")]
    InvalidSize {
        /// The rejected lattice size.
        got: usize,
    },
    /// Both an offsets index and explicit offset lists were supplied.
    #[error("provide at most one of offsets_index and offset_lists")]
    ConflictingOffsets,
    /// The offsets index does not name one of the predefined configurations.
    #[error("offsets index {index} is out of range (expected 0..{available})")]
    InvalidOffsetsIndex {
        /// The rejected index.
        index: usize,
        /// Number of predefined configurations.
        available: usize,
    },
    /// An explicit offset table does not have exactly one entry per tile slot.
    #[error("{table} offset table has {len} entries but {expected} are required")]
    InvalidOffsetTableLength {
        /// Which table was malformed (`vertical` or `horizontal`).
        table: &'static str,
        /// Number of entries supplied.
        len: usize,
        /// Number of entries required.
        expected: usize,
    },
    /// An explicit offset table contains a value outside `{2, 6, 10}`.
    #[error("{table} offset table has invalid value {value} at position {position}")]
    InvalidOffsetValue {
        /// Which table was malformed (`vertical` or `horizontal`).
        table: &'static str,
        /// Slot holding the invalid value.
        position: usize,
        /// The invalid value.
        value: u8,
    },
    /// The labeling mode name is not recognised.
    #[error("unknown labeling mode `{mode}` (expected `int`, `coordinate` or `nice`)")]
    InvalidLabelingMode {
        /// The rejected mode name.
        mode: Arc<str>,
    },
    /// Nice labels are only defined over the standard offset configuration.
    #[error("nice labeling requires the standard offsets (configuration 0)")]
    NiceRequiresStandardOffsets,
    /// A linear index does not address any node of the lattice.
    #[error("linear index {index} is out of range for m={m} (lattice has {node_count} nodes)")]
    LinearOutOfRange {
        /// The rejected index.
        index: usize,
        /// Lattice size.
        m: usize,
        /// Number of nodes in the lattice.
        node_count: usize,
    },
    /// A Pegasus index has a component outside its range.
    #[error("pegasus coordinate {coordinate} is invalid for m={m}")]
    InvalidPegasusCoordinate {
        /// The rejected coordinate.
        coordinate: PegasusIndex,
        /// Lattice size.
        m: usize,
    },
    /// A nice index has a component outside its range.
    #[error("nice coordinate {coordinate} is invalid for m={m}")]
    InvalidNiceCoordinate {
        /// The rejected coordinate.
        coordinate: NiceIndex,
        /// Lattice size.
        m: usize,
    },
    /// A valid Pegasus index lies outside the region covered by nice labels.
    #[error("pegasus coordinate {coordinate} has no nice representation for m={m}")]
    NoNiceRepresentation {
        /// The coordinate without a nice counterpart.
        coordinate: PegasusIndex,
        /// Lattice size.
        m: usize,
    },
    /// An override label is of a different kind than the graph's labeling mode.
    #[error("label {label} does not match the `{expected}` labeling mode")]
    LabelMismatch {
        /// The offending label.
        label: NodeLabel,
        /// Labeling mode of the graph being built.
        expected: Labeling,
    },
    /// An override edge joins a node to itself.
    #[error("edge override joins node {node} to itself")]
    SelfLoop {
        /// The node at both ends of the edge.
        node: NodeLabel,
    },
    /// A lookup referenced a node that is not a vertex of the graph.
    #[error("node {node} is not a vertex of this graph")]
    UnknownNode {
        /// The missing node.
        node: NodeLabel,
    },
}

define_error_codes! {
    /// Stable codes describing [`PegasusError`] variants.
    enum PegasusErrorCode for PegasusError {
        /// The lattice size is zero or too large to address.
        InvalidSize => InvalidSize { .. } => "PEGASUS_INVALID_SIZE",
        /// Both offset forms were supplied.
        ConflictingOffsets => ConflictingOffsets => "PEGASUS_CONFLICTING_OFFSETS",
        /// The offsets index is out of range.
        InvalidOffsetsIndex => InvalidOffsetsIndex { .. } => "PEGASUS_INVALID_OFFSETS_INDEX",
        /// An explicit offset table has the wrong length.
        InvalidOffsetTableLength => InvalidOffsetTableLength { .. } => "PEGASUS_INVALID_OFFSET_TABLE_LENGTH",
        /// An explicit offset table holds a forbidden value.
        InvalidOffsetValue => InvalidOffsetValue { .. } => "PEGASUS_INVALID_OFFSET_VALUE",
        /// The labeling mode name is not recognised.
        InvalidLabelingMode => InvalidLabelingMode { .. } => "PEGASUS_INVALID_LABELING_MODE",
        /// Nice labels need the standard offsets.
        NiceRequiresStandardOffsets => NiceRequiresStandardOffsets => "PEGASUS_NICE_REQUIRES_STANDARD_OFFSETS",
        /// A linear index is out of range.
        LinearOutOfRange => LinearOutOfRange { .. } => "PEGASUS_LINEAR_OUT_OF_RANGE",
        /// A Pegasus index is out of range.
        InvalidPegasusCoordinate => InvalidPegasusCoordinate { .. } => "PEGASUS_INVALID_PEGASUS_COORDINATE",
        /// A nice index is out of range.
        InvalidNiceCoordinate => InvalidNiceCoordinate { .. } => "PEGASUS_INVALID_NICE_COORDINATE",
        /// A Pegasus index has no nice counterpart.
        NoNiceRepresentation => NoNiceRepresentation { .. } => "PEGASUS_NO_NICE_REPRESENTATION",
        /// An override label has the wrong kind.
        LabelMismatch => LabelMismatch { .. } => "PEGASUS_LABEL_MISMATCH",
        /// An override edge is a self-loop.
        SelfLoop => SelfLoop { .. } => "PEGASUS_SELF_LOOP",
        /// A lookup referenced a missing node.
        UnknownNode => UnknownNode { .. } => "PEGASUS_UNKNOWN_NODE",
    }
}

impl PegasusError {
    /// Classifies the error into configuration, coordinate or structural faults.
    ///
    /// # Examples
    /// ```
    /// use pegasus_core::{ErrorCategory, PegasusError};
    ///
    /// assert_eq!(
    ///     PegasusError::ConflictingOffsets.category(),
    ///     ErrorCategory::Configuration,
    /// );
    /// ```
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidSize { .. }
            | Self::ConflictingOffsets
            | Self::InvalidOffsetsIndex { .. }
            | Self::InvalidOffsetTableLength { .. }
            | Self::InvalidOffsetValue { .. }
            | Self::InvalidLabelingMode { .. }
            | Self::NiceRequiresStandardOffsets => ErrorCategory::Configuration,
            Self::LinearOutOfRange { .. }
            | Self::InvalidPegasusCoordinate { .. }
            | Self::InvalidNiceCoordinate { .. }
            | Self::NoNiceRepresentation { .. } => ErrorCategory::Coordinate,
            Self::LabelMismatch { .. } | Self::SelfLoop { .. } | Self::UnknownNode { .. } => {
                ErrorCategory::Structural
            }
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, PegasusError>;
