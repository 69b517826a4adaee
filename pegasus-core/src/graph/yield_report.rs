//! Fault detection against a defect-free reference lattice.

use super::{Edge, PegasusGraph};
use crate::labeling::NodeLabel;

/// Vertices and edges of the reference lattice that a graph lacks.
///
/// # Examples
/// ```
/// use pegasus_core::{NodeLabel, PegasusBuilder};
///
/// let perfect = PegasusBuilder::new(2).build().expect("valid configuration");
/// let survivors: Vec<_> = perfect
///     .nodes()
///     .copied()
///     .filter(|label| *label != NodeLabel::Linear(0))
///     .collect();
/// let damaged = PegasusBuilder::new(2)
///     .with_node_list(survivors)
///     .build()
///     .expect("valid configuration");
///
/// let report = damaged.yield_report().expect("reference rebuilds");
/// assert_eq!(report.missing_nodes(), &[NodeLabel::Linear(0)]);
/// assert_eq!(report.missing_edges().len(), perfect.degree(&NodeLabel::Linear(0)).unwrap_or(0));
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct YieldReport {
    missing_nodes: Vec<NodeLabel>,
    missing_edges: Vec<Edge>,
}

impl YieldReport {
    pub(super) fn compare(reference: &PegasusGraph, actual: &PegasusGraph) -> Self {
        Self {
            missing_nodes: reference
                .nodes()
                .filter(|label| !actual.contains_node(label))
                .copied()
                .collect(),
            missing_edges: reference
                .edges()
                .filter(|edge| !actual.edges.contains(edge))
                .copied()
                .collect(),
        }
    }

    /// Vertices of the reference lattice absent from the graph, in label order.
    #[must_use]
    pub fn missing_nodes(&self) -> &[NodeLabel] {
        &self.missing_nodes
    }

    /// Edges of the reference lattice absent from the graph, including those
    /// lost with a missing endpoint.
    #[must_use]
    pub fn missing_edges(&self) -> &[Edge] {
        &self.missing_edges
    }

    /// Reports whether nothing is missing.
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.missing_nodes.is_empty() && self.missing_edges.is_empty()
    }
}
