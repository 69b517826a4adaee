use std::collections::BTreeSet;

use pegasus_core::{Labeling, PegasusBuilder, PegasusGraph, PegasusIndex};
use test_strategy::Arbitrary;

/// A randomly drawn lattice configuration.
#[derive(Clone, Copy, Debug, Arbitrary)]
pub struct LatticeRequest {
    #[strategy(2_usize..=5)]
    pub rows: usize,
    #[strategy(0_usize..8)]
    pub offsets_index: usize,
    pub fabric_only: bool,
    pub with_metadata: bool,
}

impl LatticeRequest {
    #[must_use]
    pub const fn builder(&self, labeling: Labeling) -> PegasusBuilder {
        PegasusBuilder::new(self.rows)
            .with_offsets_index(self.offsets_index)
            .with_labeling(labeling)
            .with_fabric_only(self.fabric_only)
            .with_metadata(self.with_metadata)
    }
}

#[must_use]
pub fn build(builder: &PegasusBuilder) -> PegasusGraph {
    builder.build().expect("test configuration must be valid")
}

/// Vertices of `graph` as Pegasus indices, whatever its labeling.
#[must_use]
pub fn tuple_nodes(graph: &PegasusGraph) -> BTreeSet<PegasusIndex> {
    graph
        .nodes()
        .map(|label| graph.pegasus_index(label).expect("label is a vertex"))
        .collect()
}

/// Edges of `graph` as ordered pairs of Pegasus indices.
#[must_use]
pub fn tuple_edges(graph: &PegasusGraph) -> BTreeSet<(PegasusIndex, PegasusIndex)> {
    graph
        .edges()
        .map(|edge| {
            let (a, b) = edge.endpoints();
            let a = graph.pegasus_index(&a).expect("endpoint is a vertex");
            let b = graph.pegasus_index(&b).expect("endpoint is a vertex");
            if a <= b { (a, b) } else { (b, a) }
        })
        .collect()
}

/// Closed-form edge count of the full lattice of size `m >= 2`.
#[must_use]
pub const fn full_edge_count(m: usize) -> usize {
    let m1 = m - 1;
    24 * m * (m - 2) + 12 * m * m1 + 144 * m1 * m1
}
