//! Builder for configuring and generating Pegasus lattices.
//!
//! Collects the lattice size, offset selection, labeling mode, overrides and
//! flags, validates them together in [`PegasusBuilder::build`] and produces an
//! immutable [`PegasusGraph`].

use std::collections::BTreeSet;

use tracing::{Span, debug, field, instrument, warn};

use crate::{
    Result,
    coordinates::{PegasusCoordinates, PegasusIndex},
    error::PegasusError,
    generator::{TupleEdge, lattice_edges},
    graph::{Edge, GraphProperties, NodeMetadata, OffsetSource, PegasusGraph},
    labeling::{Labeling, NodeLabel},
    offsets::OffsetLists,
};

/// Configures and generates [`PegasusGraph`] instances.
///
/// Builders are plain values: equal builders always produce equal graphs,
/// which is what the graph cache keys on.
///
/// # Examples
/// ```
/// use pegasus_core::{Labeling, PegasusBuilder};
///
/// let graph = PegasusBuilder::new(3)
///     .with_offsets_index(5)
///     .with_labeling(Labeling::Coordinate)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(graph.node_count(), 144);
/// assert_eq!(graph.edge_count(), 720);
/// assert_eq!(graph.properties().name(), "pegasus_graph(3, 5)");
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct PegasusBuilder {
    rows: usize,
    offsets_index: Option<usize>,
    offset_lists: Option<(Vec<u8>, Vec<u8>)>,
    labeling: Labeling,
    node_list: Option<Vec<NodeLabel>>,
    edge_list: Option<Vec<(NodeLabel, NodeLabel)>>,
    attach_metadata: bool,
    fabric_only: bool,
}

impl PegasusBuilder {
    /// Creates a builder for a lattice of size `m` with default settings:
    /// offsets configuration `0`, integer labels, metadata attached, all
    /// boundary qubits kept.
    ///
    /// # Examples
    /// ```
    /// use pegasus_core::{Labeling, PegasusBuilder};
    ///
    /// let builder = PegasusBuilder::new(6);
    /// assert_eq!(builder.rows(), 6);
    /// assert_eq!(builder.labeling(), Labeling::Int);
    /// assert!(builder.attaches_metadata());
    /// assert!(!builder.fabric_only());
    /// ```
    #[must_use]
    pub const fn new(m: usize) -> Self {
        Self {
            rows: m,
            offsets_index: None,
            offset_lists: None,
            labeling: Labeling::Int,
            node_list: None,
            edge_list: None,
            attach_metadata: true,
            fabric_only: false,
        }
    }

    /// Selects one of the eight predefined offset configurations.
    #[must_use]
    pub const fn with_offsets_index(mut self, index: usize) -> Self {
        self.offsets_index = Some(index);
        self
    }

    /// Supplies explicit vertical and horizontal offset tables.
    ///
    /// The tables are validated by [`Self::build`]; combining them with
    /// [`Self::with_offsets_index`] is rejected there.
    #[must_use]
    pub fn with_offset_lists(
        mut self,
        vertical: impl Into<Vec<u8>>,
        horizontal: impl Into<Vec<u8>>,
    ) -> Self {
        self.offset_lists = Some((vertical.into(), horizontal.into()));
        self
    }

    /// Sets the label space used for the vertices.
    #[must_use]
    pub const fn with_labeling(mut self, labeling: Labeling) -> Self {
        self.labeling = labeling;
        self
    }

    /// Restricts the vertex set to exactly `nodes`.
    ///
    /// Generated vertices not listed are removed with their edges; listed
    /// labels that are not otherwise present become isolated vertices.
    #[must_use]
    pub fn with_node_list<I, L>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<NodeLabel>,
    {
        self.node_list = Some(nodes.into_iter().map(Into::into).collect());
        self
    }

    /// Replaces edge synthesis with an explicit edge list.
    ///
    /// The vertex set becomes the endpoints of `edges` (before any node list
    /// is applied).
    #[must_use]
    pub fn with_edge_list<I, L>(mut self, edges: I) -> Self
    where
        I: IntoIterator<Item = (L, L)>,
        L: Into<NodeLabel>,
    {
        self.edge_list = Some(
            edges
                .into_iter()
                .map(|(a, b)| (a.into(), b.into()))
                .collect(),
        );
        self
    }

    /// Enables or disables the per-vertex cross-reference.
    #[must_use]
    pub const fn with_metadata(mut self, attach: bool) -> Self {
        self.attach_metadata = attach;
        self
    }

    /// Drops the boundary qubits that have no cross-orientation coupler.
    #[must_use]
    pub const fn with_fabric_only(mut self, fabric_only: bool) -> Self {
        self.fabric_only = fabric_only;
        self
    }

    /// Returns the lattice size.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the requested offsets index, if any.
    #[must_use]
    pub const fn offsets_index(&self) -> Option<usize> {
        self.offsets_index
    }

    /// Returns the labeling mode.
    #[must_use]
    pub const fn labeling(&self) -> Labeling {
        self.labeling
    }

    /// Reports whether per-vertex cross-references will be attached.
    #[must_use]
    pub const fn attaches_metadata(&self) -> bool {
        self.attach_metadata
    }

    /// Reports whether dangling boundary qubits will be dropped.
    #[must_use]
    pub const fn fabric_only(&self) -> bool {
        self.fabric_only
    }

    /// Validates the configuration and generates the lattice.
    ///
    /// # Errors
    /// Returns [`PegasusError::InvalidSize`] for `m == 0` or a lattice too
    /// large to index, [`PegasusError::ConflictingOffsets`] when both offset
    /// forms were given, offset validation errors for a bad index or malformed tables,
    /// [`PegasusError::NiceRequiresStandardOffsets`] for nice labels over
    /// non-standard offsets, coordinate errors for override labels out of
    /// range, [`PegasusError::LabelMismatch`] for override labels of another
    /// label space and [`PegasusError::SelfLoop`] for looped override edges.
    ///
    /// # Examples
    /// ```
    /// use pegasus_core::{PegasusBuilder, PegasusError};
    ///
    /// let err = PegasusBuilder::new(2)
    ///     .with_offsets_index(1)
    ///     .with_offset_lists([6u8; 12], [6u8; 12])
    ///     .build()
    ///     .expect_err("both offset forms conflict");
    /// assert_eq!(err, PegasusError::ConflictingOffsets);
    /// ```
    #[instrument(
        name = "pegasus.build",
        err,
        skip(self),
        fields(
            m = self.rows,
            labeling = %self.labeling,
            offsets = field::Empty,
            fabric_only = self.fabric_only,
            node_override = self.node_list.is_some(),
            edge_override = self.edge_list.is_some(),
        ),
    )]
    pub fn build(&self) -> Result<PegasusGraph> {
        if self.rows == 0 {
            warn!("lattice size must be positive, rejecting configuration");
            return Err(PegasusError::InvalidSize { got: self.rows });
        }
        let coords = PegasusCoordinates::try_new(self.rows).inspect_err(|_| {
            warn!("lattice is too large to index, rejecting configuration");
        })?;
        let (offsets, source) = self.resolve_offsets()?;
        Span::current().record("offsets", field::display(source));
        if self.labeling == Labeling::Nice && !offsets.is_standard() {
            warn!(offsets = %offsets, "nice labels need the standard offsets");
            return Err(PegasusError::NiceRequiresStandardOffsets);
        }

        let (vertices, edges) = self.tuple_topology(coords, offsets)?;

        let nodes = vertices
            .into_iter()
            .map(|q| Ok((self.relabel(coords, q)?, self.metadata_for(coords, q)?)))
            .collect::<Result<Vec<_>>>()?;
        let labelled_edges = edges
            .into_iter()
            .map(|(a, b)| {
                Ok(Edge::new(
                    self.relabel(coords, a)?,
                    self.relabel(coords, b)?,
                ))
            })
            .collect::<Result<BTreeSet<_>>>()?;

        let properties = GraphProperties::new(self.rows, self.labeling, offsets, source)
            .with_flags(self.attach_metadata, self.fabric_only);
        let graph = PegasusGraph::from_parts(properties, nodes, labelled_edges);
        debug!(
            lattice = graph.properties().name(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "generated pegasus lattice"
        );
        record_build();
        Ok(graph)
    }

    fn resolve_offsets(&self) -> Result<(OffsetLists, OffsetSource)> {
        match (self.offsets_index, &self.offset_lists) {
            (Some(index), Some(_)) => {
                warn!(
                    offsets_index = index,
                    "offsets index and explicit offset lists are mutually exclusive"
                );
                Err(PegasusError::ConflictingOffsets)
            }
            (Some(index), None) => Ok((
                OffsetLists::from_index(index)?,
                OffsetSource::Index(index),
            )),
            (None, Some((vertical, horizontal))) => Ok((
                OffsetLists::new(vertical, horizontal)?,
                OffsetSource::Explicit,
            )),
            (None, None) => Ok((OffsetLists::standard(), OffsetSource::Index(0))),
        }
    }

    /// Vertex and edge sets in Pegasus-index space after overrides.
    fn tuple_topology(
        &self,
        coords: PegasusCoordinates,
        offsets: OffsetLists,
    ) -> Result<(BTreeSet<PegasusIndex>, BTreeSet<TupleEdge>)> {
        let (mut vertices, mut edges) = match &self.edge_list {
            None => {
                let keep = |q: &PegasusIndex| self.keeps(coords, offsets, *q);
                let vertices: BTreeSet<_> = coords.pegasus_indices().filter(keep).collect();
                let edges: BTreeSet<_> = lattice_edges(coords, offsets)
                    .filter(|(a, b)| keep(a) && keep(b))
                    .map(canonical)
                    .collect();
                (vertices, edges)
            }
            Some(list) => {
                let edges = list
                    .iter()
                    .map(|(a, b)| self.resolve_edge(coords, a, b))
                    .collect::<Result<BTreeSet<_>>>()?;
                let vertices = edges.iter().flat_map(|&(a, b)| [a, b]).collect();
                (vertices, edges)
            }
        };

        if let Some(list) = &self.node_list {
            let wanted = list
                .iter()
                .map(|label| self.resolve_label(coords, label))
                .collect::<Result<BTreeSet<_>>>()?;
            let before = vertices.len();
            edges.retain(|(a, b)| wanted.contains(a) && wanted.contains(b));
            vertices.retain(|q| wanted.contains(q));
            debug!(
                removed = before - vertices.len(),
                added = wanted.len() - vertices.len(),
                "applied node list override"
            );
            vertices = wanted;
        }
        Ok((vertices, edges))
    }

    fn keeps(&self, coords: PegasusCoordinates, offsets: OffsetLists, q: PegasusIndex) -> bool {
        let nice_ok = self.labeling != Labeling::Nice || coords.pegasus_to_nice(q).is_ok();
        let fabric_ok = !self.fabric_only || offsets.in_fabric(q, self.rows);
        nice_ok && fabric_ok
    }

    fn resolve_edge(
        &self,
        coords: PegasusCoordinates,
        a: &NodeLabel,
        b: &NodeLabel,
    ) -> Result<TupleEdge> {
        let qa = self.resolve_label(coords, a)?;
        let qb = self.resolve_label(coords, b)?;
        if qa == qb {
            return Err(PegasusError::SelfLoop { node: *a });
        }
        Ok(canonical((qa, qb)))
    }

    /// Maps an override label onto its Pegasus index, checking its kind and range.
    fn resolve_label(
        &self,
        coords: PegasusCoordinates,
        label: &NodeLabel,
    ) -> Result<PegasusIndex> {
        match (self.labeling, *label) {
            (Labeling::Int, NodeLabel::Linear(v)) => coords.linear_to_pegasus(v),
            (Labeling::Coordinate, NodeLabel::Pegasus(q)) => {
                coords.validate_pegasus(q)?;
                Ok(q)
            }
            (Labeling::Nice, NodeLabel::Nice(n)) => coords.nice_to_pegasus(n),
            (expected, _) => Err(PegasusError::LabelMismatch {
                label: *label,
                expected,
            }),
        }
    }

    fn relabel(&self, coords: PegasusCoordinates, q: PegasusIndex) -> Result<NodeLabel> {
        Ok(match self.labeling {
            Labeling::Int => NodeLabel::Linear(coords.pegasus_to_linear(q)?),
            Labeling::Coordinate => NodeLabel::Pegasus(q),
            Labeling::Nice => NodeLabel::Nice(coords.pegasus_to_nice(q)?),
        })
    }

    fn metadata_for(
        &self,
        coords: PegasusCoordinates,
        q: PegasusIndex,
    ) -> Result<NodeMetadata> {
        if !self.attach_metadata {
            return Ok(NodeMetadata::Absent);
        }
        Ok(match self.labeling {
            Labeling::Coordinate => NodeMetadata::LinearIndex(coords.pegasus_to_linear(q)?),
            Labeling::Int | Labeling::Nice => NodeMetadata::PegasusIndex(q),
        })
    }
}

/// Generates the default-configured lattice of size `m`.
///
/// # Errors
/// Returns [`PegasusError::InvalidSize`] for `m == 0` or a lattice too large
/// to index.
///
/// # Examples
/// ```
/// let graph = pegasus_core::pegasus_graph(2).expect("m is positive");
/// assert_eq!(graph.node_count(), 48);
/// ```
pub fn pegasus_graph(m: usize) -> Result<PegasusGraph> {
    PegasusBuilder::new(m).build()
}

fn canonical((a, b): TupleEdge) -> TupleEdge {
    if a <= b { (a, b) } else { (b, a) }
}

#[cfg(feature = "metrics")]
fn record_build() {
    metrics::counter!("pegasus_graphs_built").increment(1);
}

#[cfg(not(feature = "metrics"))]
fn record_build() {}
