//! Chart data cache with mutation-aware regeneration.
//!
//! The cache keys the last generated collections by the configuration's
//! geometry fingerprint. `ensure_fresh` is one atomic critical section:
//! fingerprint compare and possible regeneration happen under a single
//! lock, so racing callers never interleave a stale read with an in-flight
//! regeneration. Snapshots are handed out as `Arc`s and replaced
//! wholesale; no caller can observe a partially updated collection.

use std::sync::{Arc, Mutex};

use crate::error::ChartResult;
use crate::generate::{ChartData, generate_chart_data};
use hg_config::{ChartConfig, Fingerprint, fingerprint};
use tracing::debug;

#[derive(Default)]
struct CacheInner {
    fingerprint: Option<Fingerprint>,
    snapshot: Option<Arc<ChartData>>,
    recompute_count: u64,
}

/// Cache of the last generated `{curves, zones}` collections.
#[derive(Default)]
pub struct ChartDataCache {
    inner: Mutex<CacheInner>,
}

impl ChartDataCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return chart data matching `config`, regenerating at most once per
    /// distinct geometry fingerprint.
    ///
    /// On a failed pass the previously cached snapshot stays intact and
    /// keeps being served for its own fingerprint.
    pub fn ensure_fresh(&self, config: &ChartConfig) -> ChartResult<Arc<ChartData>> {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        let fp = fingerprint(config);
        if let (Some(stored), Some(snapshot)) = (&inner.fingerprint, &inner.snapshot) {
            if *stored == fp {
                return Ok(Arc::clone(snapshot));
            }
        }

        let data = generate_chart_data(config)?;
        let snapshot = Arc::new(data);
        inner.fingerprint = Some(fp);
        inner.snapshot = Some(Arc::clone(&snapshot));
        inner.recompute_count += 1;
        debug!(
            recompute_count = inner.recompute_count,
            "chart data regenerated"
        );
        Ok(snapshot)
    }

    /// How many generation passes this cache has run.
    pub fn recompute_count(&self) -> u64 {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .recompute_count
    }

    /// The currently cached snapshot, if any pass has completed.
    pub fn snapshot(&self) -> Option<Arc<ChartData>> {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .snapshot
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_call_with_same_config_reuses_snapshot() {
        let cache = ChartDataCache::new();
        let config = ChartConfig::default();
        let first = cache.ensure_fresh(&config).unwrap();
        let second = cache.ensure_fresh(&config).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.recompute_count(), 1);
    }

    #[test]
    fn style_change_does_not_regenerate() {
        let cache = ChartDataCache::new();
        let config = ChartConfig::default();
        cache.ensure_fresh(&config).unwrap();

        let mut restyled = config.clone();
        restyled.styles.saturation.line_width = 5.0;
        let snapshot = cache.ensure_fresh(&restyled).unwrap();
        assert_eq!(cache.recompute_count(), 1);
        assert_eq!(snapshot.saturation.points.len(), 51);
    }

    #[test]
    fn geometry_change_regenerates_once() {
        let cache = ChartDataCache::new();
        let config = ChartConfig::default();
        cache.ensure_fresh(&config).unwrap();

        let mut wider = config.clone();
        wider.limits.range_temp_c = (0.0, 60.0);
        let snapshot = cache.ensure_fresh(&wider).unwrap();
        assert_eq!(cache.recompute_count(), 2);
        assert_eq!(snapshot.saturation.points.len(), 61);

        // repeated calls with the new config stay cached
        cache.ensure_fresh(&wider).unwrap();
        assert_eq!(cache.recompute_count(), 2);
    }

    #[test]
    fn failed_pass_keeps_previous_snapshot() {
        let cache = ChartDataCache::new();
        let config = ChartConfig::default();
        let good = cache.ensure_fresh(&config).unwrap();

        let mut bad = config.clone();
        bad.limits.step_temp = 0.0;
        assert!(cache.ensure_fresh(&bad).is_err());
        assert_eq!(cache.recompute_count(), 1);

        let still_good = cache.snapshot().unwrap();
        assert!(Arc::ptr_eq(&good, &still_good));
        // the original config still hits the cache
        let again = cache.ensure_fresh(&config).unwrap();
        assert!(Arc::ptr_eq(&good, &again));
        assert_eq!(cache.recompute_count(), 1);
    }
}
