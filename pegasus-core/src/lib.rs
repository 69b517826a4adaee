//! Pegasus lattice generation and coordinate conversion.
//!
//! [`PegasusBuilder`] produces the Pegasus hardware graph of size `m`: vertical
//! and horizontal qubits arranged in `m` tiles of twelve slots, joined by
//! chain, pair and offset-driven cross couplers. Vertices can be labelled by
//! linear index, by Pegasus index `(u, w, k, z)` or by nice index
//! `(t, y, x, u, k)`; [`PegasusCoordinates`] converts between all three.
//!
//! # Metrics
//!
//! When the `metrics` feature is enabled the crate emits:
//!
//! - `pegasus_graphs_built` (counter)
//! - `pegasus_graph_cache_hits` (counter, `cache` feature)
//! - `pegasus_graph_cache_misses` (counter, `cache` feature)
//!
//! These metric names are stable for downstream crates.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
#[cfg(feature = "cache")]
mod cache;
mod coordinates;
mod error;
mod generator;
mod graph;
mod labeling;
mod offsets;

#[cfg(feature = "cache")]
#[cfg_attr(docsrs, doc(cfg(feature = "cache")))]
pub use crate::cache::GraphCache;
pub use crate::{
    builder::{PegasusBuilder, pegasus_graph},
    coordinates::{NiceIndex, PegasusCoordinates, PegasusIndex, TILE},
    error::{ErrorCategory, PegasusError, PegasusErrorCode, Result},
    graph::{
        Edge, FAMILY, GraphProperties, NodeMetadata, OffsetSource, PegasusGraph, YieldReport,
    },
    labeling::{Labeling, NodeLabel},
    offsets::{ALLOWED_OFFSETS, OFFSET_CONFIGURATIONS, OffsetLists, OffsetTable},
};
