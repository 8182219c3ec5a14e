// memo.rs
use super::projection::{CatalogProjection, build_projection};
use super::stats::compute_stats;
use crate::models::{CatalogStats, ViewControls};
use crate::store::Snapshot;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
struct StatsKey {
    version: u64,
    now: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ProjectionKey {
    version: u64,
    now: DateTime<Utc>,
    controls: ViewControls,
}

/// Last-value memoization for the derived views.
///
/// Stats are keyed only on the snapshot version and the reference instant,
/// so toolbar changes rebuild the product lists but reuse the summary counts.
#[derive(Default)]
pub struct ProjectionCache {
    stats: Mutex<Option<(StatsKey, CatalogStats)>>,
    projection: Mutex<Option<(ProjectionKey, Arc<CatalogProjection>)>>,
    stats_computations: AtomicU64,
    projection_computations: AtomicU64,
}

impl ProjectionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self, snapshot: &Snapshot, now: DateTime<Utc>) -> CatalogStats {
        let key = StatsKey {
            version: snapshot.version,
            now,
        };

        let mut slot = self.stats.lock();
        if let Some((cached_key, stats)) = slot.as_ref() {
            if *cached_key == key {
                debug!(version = key.version, "Catalog stats cache hit");
                return *stats;
            }
        }

        let stats = compute_stats(&snapshot.products, now);
        self.stats_computations.fetch_add(1, Ordering::Relaxed);
        *slot = Some((key, stats));
        stats
    }

    pub fn projection(
        &self,
        snapshot: &Snapshot,
        controls: &ViewControls,
        now: DateTime<Utc>,
    ) -> Arc<CatalogProjection> {
        let key = ProjectionKey {
            version: snapshot.version,
            now,
            controls: controls.clone(),
        };

        if let Some((cached_key, projection)) = self.projection.lock().as_ref() {
            if *cached_key == key {
                debug!(version = key.version, "Catalog projection cache hit");
                return Arc::clone(projection);
            }
        }

        let stats = self.stats(snapshot, now);
        let projection = Arc::new(build_projection(&snapshot.products, controls, now, stats));
        self.projection_computations.fetch_add(1, Ordering::Relaxed);
        *self.projection.lock() = Some((key, Arc::clone(&projection)));
        projection
    }

    pub fn invalidate(&self) {
        *self.stats.lock() = None;
        *self.projection.lock() = None;
    }

    pub fn stats_computations(&self) -> u64 {
        self.stats_computations.load(Ordering::Relaxed)
    }

    pub fn projection_computations(&self) -> u64 {
        self.projection_computations.load(Ordering::Relaxed)
    }
}
