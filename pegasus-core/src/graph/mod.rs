//! The immutable Pegasus graph produced by [`crate::PegasusBuilder`].
//!
//! A [`PegasusGraph`] owns its vertex set, its undirected edge set, a
//! [`NodeMetadata`] record per vertex and the [`GraphProperties`] downstream
//! consumers need to rebuild an equivalent reference lattice. There is no
//! mutating API; share a graph behind an `Arc` when several owners need it.

mod yield_report;

use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
};

use crate::{
    builder::PegasusBuilder,
    coordinates::{PegasusCoordinates, PegasusIndex, TILE},
    error::{PegasusError, Result},
    labeling::{Labeling, NodeLabel},
    offsets::{OffsetLists, OffsetTable},
};

pub use self::yield_report::YieldReport;

/// Family name reported by every generated graph.
pub const FAMILY: &str = "pegasus";

/// An undirected edge in canonical form (`source <= target`).
///
/// # Examples
/// ```
/// use pegasus_core::{Edge, NodeLabel};
///
/// let edge = Edge::new(NodeLabel::Linear(9), NodeLabel::Linear(4));
/// assert_eq!(edge.source(), NodeLabel::Linear(4));
/// assert_eq!(edge.target(), NodeLabel::Linear(9));
/// assert_eq!(edge, Edge::new(NodeLabel::Linear(4), NodeLabel::Linear(9)));
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Edge {
    source: NodeLabel,
    target: NodeLabel,
}

impl Edge {
    /// Creates an edge, ordering the endpoints.
    #[must_use]
    pub fn new(a: NodeLabel, b: NodeLabel) -> Self {
        if a <= b {
            Self {
                source: a,
                target: b,
            }
        } else {
            Self {
                source: b,
                target: a,
            }
        }
    }

    /// Returns the smaller endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> NodeLabel { self.source }

    /// Returns the larger endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> NodeLabel { self.target }

    /// Returns both endpoints as a pair.
    #[must_use]
    pub const fn endpoints(&self) -> (NodeLabel, NodeLabel) {
        (self.source, self.target)
    }

    /// Reports whether `node` is one of the endpoints.
    #[must_use]
    pub fn touches(&self, node: &NodeLabel) -> bool {
        self.source == *node || self.target == *node
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.source, self.target)
    }
}

/// Per-vertex cross-reference into another label space.
///
/// Every vertex carries one record. When metadata is disabled it is
/// [`NodeMetadata::Absent`]; otherwise it holds the Pegasus index of the
/// vertex, or its linear index when the graph is already labelled by Pegasus
/// index.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum NodeMetadata {
    /// No cross-reference was attached.
    #[default]
    Absent,
    /// The vertex's Pegasus index.
    PegasusIndex(PegasusIndex),
    /// The vertex's linear index.
    LinearIndex(usize),
}

impl NodeMetadata {
    /// Returns the recorded Pegasus index, if any.
    #[must_use]
    pub const fn pegasus_index(&self) -> Option<PegasusIndex> {
        match self {
            Self::PegasusIndex(q) => Some(*q),
            _ => None,
        }
    }

    /// Returns the recorded linear index, if any.
    #[must_use]
    pub const fn linear_index(&self) -> Option<usize> {
        match self {
            Self::LinearIndex(v) => Some(*v),
            _ => None,
        }
    }

    /// Reports whether no cross-reference was attached.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

/// How the offset tables of a graph were chosen.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OffsetSource {
    /// One of the predefined configurations.
    Index(usize),
    /// Tables supplied explicitly by the caller.
    Explicit,
}

impl fmt::Display for OffsetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{index}"),
            Self::Explicit => f.write_str("explicit"),
        }
    }
}

/// Whole-graph properties of a generated lattice.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GraphProperties {
    name: String,
    rows: usize,
    labeling: Labeling,
    offsets: OffsetLists,
    offset_source: OffsetSource,
    metadata: bool,
    fabric_only: bool,
}

impl GraphProperties {
    pub(crate) fn new(
        rows: usize,
        labeling: Labeling,
        offsets: OffsetLists,
        offset_source: OffsetSource,
    ) -> Self {
        let name = match offset_source {
            OffsetSource::Index(index) => format!("pegasus_graph({rows}, {index})"),
            OffsetSource::Explicit => format!("pegasus_graph({rows}, {offsets})"),
        };
        Self {
            name,
            rows,
            labeling,
            offsets,
            offset_source,
            metadata: false,
            fabric_only: false,
        }
    }

    pub(crate) fn with_flags(mut self, metadata: bool, fabric_only: bool) -> Self {
        self.metadata = metadata;
        self.fabric_only = fabric_only;
        self
    }

    /// Returns the graph family, always `"pegasus"`.
    #[must_use]
    pub const fn family(&self) -> &'static str {
        FAMILY
    }

    /// Returns the descriptive name, `pegasus_graph(m, offsets)`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the lattice size `m`.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of tile columns, equal to [`Self::rows`].
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.rows
    }

    /// Returns the tile width, `12`.
    #[must_use]
    pub const fn tile(&self) -> usize {
        TILE
    }

    /// Returns the labeling mode of the vertices.
    #[must_use]
    pub const fn labeling(&self) -> Labeling {
        self.labeling
    }

    /// Returns the offset tables used to generate the couplers.
    #[must_use]
    pub const fn offsets(&self) -> &OffsetLists {
        &self.offsets
    }

    /// Returns the vertical offset table.
    #[must_use]
    pub const fn vertical_offsets(&self) -> &OffsetTable {
        self.offsets.vertical()
    }

    /// Returns the horizontal offset table.
    #[must_use]
    pub const fn horizontal_offsets(&self) -> &OffsetTable {
        self.offsets.horizontal()
    }

    /// Returns how the offset tables were chosen.
    #[must_use]
    pub const fn offset_source(&self) -> OffsetSource {
        self.offset_source
    }

    /// Reports whether per-vertex cross-references were attached.
    #[must_use]
    pub const fn has_metadata(&self) -> bool {
        self.metadata
    }

    /// Reports whether the dangling boundary qubits were dropped.
    #[must_use]
    pub const fn fabric_only(&self) -> bool {
        self.fabric_only
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct NodeEntry {
    metadata: NodeMetadata,
    neighbours: BTreeSet<NodeLabel>,
}

/// A generated Pegasus lattice.
///
/// # Examples
/// ```
/// use pegasus_core::{Labeling, NodeLabel, PegasusBuilder, PegasusIndex};
///
/// let graph = PegasusBuilder::new(2)
///     .with_labeling(Labeling::Coordinate)
///     .build()
///     .expect("configuration is valid");
/// assert_eq!(graph.node_count(), 48);
/// assert_eq!(graph.edge_count(), 168);
/// let q = NodeLabel::from(PegasusIndex::new(0, 0, 2, 0));
/// assert_eq!(graph.degree(&q), Some(5));
/// assert_eq!(graph.properties().family(), "pegasus");
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PegasusGraph {
    properties: GraphProperties,
    nodes: BTreeMap<NodeLabel, NodeEntry>,
    edges: BTreeSet<Edge>,
}

impl PegasusGraph {
    pub(crate) fn from_parts(
        properties: GraphProperties,
        nodes: impl IntoIterator<Item = (NodeLabel, NodeMetadata)>,
        edges: BTreeSet<Edge>,
    ) -> Self {
        let mut entries: BTreeMap<NodeLabel, NodeEntry> = nodes
            .into_iter()
            .map(|(label, metadata)| {
                (
                    label,
                    NodeEntry {
                        metadata,
                        neighbours: BTreeSet::new(),
                    },
                )
            })
            .collect();
        for edge in &edges {
            let (a, b) = edge.endpoints();
            entries.entry(a).or_default().neighbours.insert(b);
            entries.entry(b).or_default().neighbours.insert(a);
        }
        Self {
            properties,
            nodes: entries,
            edges,
        }
    }

    /// Returns the whole-graph properties.
    #[must_use]
    pub const fn properties(&self) -> &GraphProperties {
        &self.properties
    }

    /// Returns a converter for this graph's lattice size.
    #[must_use]
    pub const fn coordinates(&self) -> PegasusCoordinates {
        PegasusCoordinates::new(self.properties.rows)
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Iterates the vertices in label order.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeLabel> {
        self.nodes.keys()
    }

    /// Iterates the edges in canonical order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// Iterates the vertices with their metadata records.
    pub fn nodes_with_metadata(&self) -> impl Iterator<Item = (&NodeLabel, &NodeMetadata)> {
        self.nodes.iter().map(|(label, entry)| (label, &entry.metadata))
    }

    /// Reports whether `node` is a vertex.
    #[must_use]
    pub fn contains_node(&self, node: &NodeLabel) -> bool {
        self.nodes.contains_key(node)
    }

    /// Reports whether `a` and `b` are joined by an edge, in either order.
    #[must_use]
    pub fn contains_edge(&self, a: &NodeLabel, b: &NodeLabel) -> bool {
        self.edges.contains(&Edge::new(*a, *b))
    }

    /// Iterates the neighbours of `node`, or `None` if it is not a vertex.
    pub fn neighbours<'a>(
        &'a self,
        node: &NodeLabel,
    ) -> Option<impl Iterator<Item = &'a NodeLabel> + use<'a>> {
        self.nodes.get(node).map(|entry| entry.neighbours.iter())
    }

    /// Returns the degree of `node`, or `None` if it is not a vertex.
    #[must_use]
    pub fn degree(&self, node: &NodeLabel) -> Option<usize> {
        self.nodes.get(node).map(|entry| entry.neighbours.len())
    }

    /// Returns the metadata record of `node`, or `None` if it is not a vertex.
    #[must_use]
    pub fn metadata(&self, node: &NodeLabel) -> Option<&NodeMetadata> {
        self.nodes.get(node).map(|entry| &entry.metadata)
    }

    /// Returns the Pegasus index of a vertex whatever the labeling mode.
    ///
    /// Uses the attached metadata when present and the converter otherwise.
    ///
    /// # Errors
    /// Returns [`PegasusError::UnknownNode`] when `node` is not a vertex.
    ///
    /// # Examples
    /// ```
    /// use pegasus_core::{NodeLabel, PegasusBuilder, PegasusIndex};
    ///
    /// let graph = PegasusBuilder::new(3)
    ///     .with_metadata(false)
    ///     .build()
    ///     .expect("configuration is valid");
    /// let q = graph.pegasus_index(&NodeLabel::Linear(75))?;
    /// assert_eq!(q, PegasusIndex::new(1, 0, 1, 1));
    /// # Ok::<(), pegasus_core::PegasusError>(())
    /// ```
    pub fn pegasus_index(&self, node: &NodeLabel) -> Result<PegasusIndex> {
        let metadata = self
            .metadata(node)
            .ok_or(PegasusError::UnknownNode { node: *node })?;
        if let Some(q) = metadata.pegasus_index() {
            return Ok(q);
        }
        let coords = self.coordinates();
        match *node {
            NodeLabel::Linear(v) => coords.linear_to_pegasus(v),
            NodeLabel::Pegasus(q) => Ok(q),
            NodeLabel::Nice(n) => coords.nice_to_pegasus(n),
        }
    }

    /// Rebuilds the defect-free lattice described by this graph's properties.
    ///
    /// # Errors
    /// Propagates configuration errors from [`PegasusBuilder::build`]; a graph
    /// produced by the builder always yields a valid configuration.
    pub fn reference_lattice(&self) -> Result<Self> {
        let props = &self.properties;
        let base = PegasusBuilder::new(props.rows)
            .with_labeling(props.labeling)
            .with_metadata(props.metadata)
            .with_fabric_only(props.fabric_only);
        let builder = match props.offset_source {
            OffsetSource::Index(index) => base.with_offsets_index(index),
            OffsetSource::Explicit => base.with_offset_lists(
                props.offsets.vertical().to_vec(),
                props.offsets.horizontal().to_vec(),
            ),
        };
        builder.build()
    }

    /// Compares this graph with its reference lattice and lists what is missing.
    ///
    /// # Errors
    /// Propagates errors from [`Self::reference_lattice`].
    pub fn yield_report(&self) -> Result<YieldReport> {
        let reference = self.reference_lattice()?;
        Ok(YieldReport::compare(&reference, self))
    }
}
