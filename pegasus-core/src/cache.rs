//! Least-recently-used cache of generated lattices.
//!
//! Generation is deterministic, so a builder value fully identifies its graph.
//! The cache keys on [`PegasusBuilder`] and hands out shared
//! [`Arc<PegasusGraph>`] handles; the lock is never held while a lattice is
//! being generated.

use std::{
    num::NonZeroUsize,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use lru::LruCache;
use tracing::trace;

use crate::{Result, builder::PegasusBuilder, graph::PegasusGraph};

/// Shares generated lattices between callers that request the same
/// configuration.
///
/// # Examples
/// ```
/// use std::{num::NonZeroUsize, sync::Arc};
///
/// use pegasus_core::{GraphCache, PegasusBuilder};
///
/// let cache = GraphCache::new(NonZeroUsize::MIN);
/// let builder = PegasusBuilder::new(2);
/// let first = cache.get_or_build(&builder)?;
/// let second = cache.get_or_build(&builder)?;
/// assert!(Arc::ptr_eq(&first, &second));
/// assert_eq!(cache.len(), 1);
/// # Ok::<(), pegasus_core::PegasusError>(())
/// ```
#[derive(Debug)]
pub struct GraphCache {
    graphs: Mutex<LruCache<PegasusBuilder, Arc<PegasusGraph>>>,
}

impl GraphCache {
    /// Number of lattices retained by [`GraphCache::default`].
    pub const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(16) {
        Some(capacity) => capacity,
        None => NonZeroUsize::MIN,
    };

    /// Creates a cache retaining at most `capacity` lattices.
    #[must_use]
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            graphs: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Returns the cached lattice for `builder`, generating it on a miss.
    ///
    /// Two callers missing on the same configuration concurrently both
    /// generate it; the later insert wins and both results are equal.
    ///
    /// # Errors
    /// Propagates the configuration errors of [`PegasusBuilder::build`].
    /// Failed builds are not cached.
    pub fn get_or_build(&self, builder: &PegasusBuilder) -> Result<Arc<PegasusGraph>> {
        let cached = self.lock().get(builder).cloned();
        if let Some(graph) = cached {
            trace!(m = builder.rows(), "lattice cache hit");
            record_hit();
            return Ok(graph);
        }
        trace!(m = builder.rows(), "lattice cache miss");
        record_miss();
        let graph = Arc::new(builder.build()?);
        self.lock().put(builder.clone(), Arc::clone(&graph));
        Ok(graph)
    }

    /// Returns the number of cached lattices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Reports whether the cache holds no lattices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Returns the maximum number of retained lattices.
    #[must_use]
    pub fn capacity(&self) -> NonZeroUsize {
        self.lock().cap()
    }

    /// Drops every cached lattice. Handles already given out stay valid.
    pub fn clear(&self) {
        self.lock().clear();
    }

    // Entries are inserted whole; a poisoned map is still consistent.
    fn lock(&self) -> MutexGuard<'_, LruCache<PegasusBuilder, Arc<PegasusGraph>>> {
        self.graphs.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for GraphCache {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

#[cfg(feature = "metrics")]
fn record_hit() {
    metrics::counter!("pegasus_graph_cache_hits").increment(1);
}

#[cfg(not(feature = "metrics"))]
fn record_hit() {}

#[cfg(feature = "metrics")]
fn record_miss() {
    metrics::counter!("pegasus_graph_cache_misses").increment(1);
}

#[cfg(not(feature = "metrics"))]
fn record_miss() {}

#[cfg(test)]
mod tests {
    use std::{num::NonZeroUsize, sync::Arc, thread};

    use rstest::rstest;

    use super::*;
    use crate::{Labeling, PegasusError};

    fn capacity(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).expect("test capacity is non-zero")
    }

    #[rstest]
    fn default_cache_is_empty() {
        let cache = GraphCache::default();
        assert!(cache.is_empty());
        assert_eq!(cache.capacity().get(), 16);
    }

    #[rstest]
    fn repeated_requests_share_one_graph() {
        let cache = GraphCache::new(capacity(4));
        let builder = PegasusBuilder::new(3).with_labeling(Labeling::Coordinate);
        let first = cache.get_or_build(&builder).expect("valid configuration");
        let second = cache
            .get_or_build(&builder.clone())
            .expect("valid configuration");
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.node_count(), 144);
    }

    #[rstest]
    fn distinct_configurations_are_cached_separately() {
        let cache = GraphCache::new(capacity(4));
        let int = cache
            .get_or_build(&PegasusBuilder::new(2))
            .expect("valid configuration");
        let fabric = cache
            .get_or_build(&PegasusBuilder::new(2).with_fabric_only(true))
            .expect("valid configuration");
        assert_eq!(cache.len(), 2);
        assert_ne!(int.node_count(), fabric.node_count());
    }

    #[rstest]
    fn least_recently_used_lattice_is_evicted() {
        let cache = GraphCache::new(capacity(2));
        let a = PegasusBuilder::new(2);
        let b = PegasusBuilder::new(3);
        let c = PegasusBuilder::new(2).with_offsets_index(7);
        let first_a = cache.get_or_build(&a).expect("valid");
        cache.get_or_build(&b).expect("valid");
        cache.get_or_build(&a).expect("valid");
        cache.get_or_build(&c).expect("valid");
        assert_eq!(cache.len(), 2);

        let again_a = cache.get_or_build(&a).expect("valid");
        assert!(Arc::ptr_eq(&first_a, &again_a));
        let again_b = cache.get_or_build(&b).expect("valid");
        assert_eq!(again_b.node_count(), 144);
    }

    #[rstest]
    fn failed_builds_are_not_cached() {
        let cache = GraphCache::default();
        let err = cache
            .get_or_build(&PegasusBuilder::new(0))
            .expect_err("zero rows are invalid");
        assert_eq!(err, PegasusError::InvalidSize { got: 0 });
        assert!(cache.is_empty());
    }

    #[rstest]
    fn clear_keeps_outstanding_handles_alive() {
        let cache = GraphCache::default();
        let graph = cache
            .get_or_build(&PegasusBuilder::new(2))
            .expect("valid configuration");
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(graph.edge_count(), 168);
    }

    #[rstest]
    fn concurrent_callers_observe_equal_graphs() {
        let cache = Arc::new(GraphCache::default());
        let builder = PegasusBuilder::new(3).with_offsets_index(5);
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let cache = Arc::clone(&cache);
                let builder = builder.clone();
                thread::spawn(move || cache.get_or_build(&builder))
            })
            .collect();
        let graphs: Vec<_> = handles
            .into_iter()
            .map(|handle| {
                handle
                    .join()
                    .expect("worker panicked")
                    .expect("valid configuration")
            })
            .collect();
        assert!(graphs.windows(2).all(|pair| pair[0] == pair[1]));
        assert_eq!(cache.len(), 1);
    }
}
