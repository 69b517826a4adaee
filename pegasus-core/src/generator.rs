//! Edge synthesis for the Pegasus lattice.
//!
//! Edges are produced in Pegasus-index space as three disjoint families:
//! consecutive chain positions, even/odd slot pairs, and the offset-driven
//! couplers between vertical and horizontal qubits. Relabeling into the
//! requested label space happens in the builder.

use crate::{
    coordinates::{PegasusCoordinates, PegasusIndex, TILE},
    offsets::OffsetLists,
};

/// An edge between two Pegasus indices.
pub(crate) type TupleEdge = (PegasusIndex, PegasusIndex);

/// `(u, w, k, z) - (u, w, k, z + 1)` for every chain.
pub(crate) fn chain_edges(coords: PegasusCoordinates) -> impl Iterator<Item = TupleEdge> {
    let last = coords.rows().saturating_sub(2);
    coords
        .pegasus_indices()
        .filter(move |q| q.z < last)
        .map(|q| (q, PegasusIndex { z: q.z + 1, ..q }))
}

/// `(u, w, 2j, z) - (u, w, 2j + 1, z)` for every slot pair.
pub(crate) fn pair_edges(coords: PegasusCoordinates) -> impl Iterator<Item = TupleEdge> {
    coords
        .pegasus_indices()
        .filter(|q| q.k % 2 == 0)
        .map(|q| (q, PegasusIndex { k: q.k + 1, ..q }))
}

/// Couplers from each vertical qubit `(0, w, k, z)` to the horizontal qubits
/// `(1, z + shift, kk, w - drop)`.
///
/// On the first tile only slots `k >= off1[kk]` couple and on the last tile
/// only slots `k < off1[kk]`; these bounds keep the partner's `w` and `z`
/// inside the lattice.
pub(crate) fn cross_edges(
    coords: PegasusCoordinates,
    offsets: OffsetLists,
) -> impl Iterator<Item = TupleEdge> {
    let last = coords.rows().saturating_sub(1);
    coords
        .pegasus_indices()
        .filter(|q| q.u == 0)
        .flat_map(move |q| {
            (0..TILE).filter_map(move |kk| {
                let clip = offsets.clip(kk);
                if (q.w == 0 && q.k < clip) || (q.w == last && q.k >= clip) {
                    return None;
                }
                let partner = PegasusIndex::new(
                    1,
                    q.z + offsets.tile_shift(q.k, kk),
                    kk,
                    q.w - usize::from(q.k < clip),
                );
                Some((q, partner))
            })
        })
}

/// All three edge families of the lattice.
pub(crate) fn lattice_edges(
    coords: PegasusCoordinates,
    offsets: OffsetLists,
) -> impl Iterator<Item = TupleEdge> {
    chain_edges(coords)
        .chain(pair_edges(coords))
        .chain(cross_edges(coords, offsets))
}
