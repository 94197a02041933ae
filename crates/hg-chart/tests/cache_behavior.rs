//! Cache contract: regeneration happens exactly once per distinct
//! geometry fingerprint, and repeated generation is deterministic.

use hg_chart::ChartDataCache;
use hg_config::{ChartConfig, ZoneSpec, ZoneSpecKind};

fn zoned_config() -> ChartConfig {
    let mut config = ChartConfig::default();
    config.zones.push(ZoneSpec {
        name: "Summer comfort".to_string(),
        kind: ZoneSpecKind::DbtRh {
            t_min: 23.0,
            t_max: 28.0,
            rh_min: 40.0,
            rh_max: 60.0,
        },
    });
    config
}

#[test]
fn identical_configs_yield_bit_identical_collections() {
    let cache_a = ChartDataCache::new();
    let cache_b = ChartDataCache::new();
    let config = zoned_config();

    let a = cache_a.ensure_fresh(&config).unwrap();
    let b = cache_b.ensure_fresh(&config.clone()).unwrap();

    // two independent passes over equal configs produce identical data
    assert_eq!(*a, *b);
    assert_eq!(cache_a.recompute_count(), 1);
    assert_eq!(cache_b.recompute_count(), 1);
}

#[test]
fn regeneration_triggers_exactly_once_per_fingerprint() {
    let cache = ChartDataCache::new();
    let config = zoned_config();

    cache.ensure_fresh(&config).unwrap();
    cache.ensure_fresh(&config).unwrap();
    assert_eq!(cache.recompute_count(), 1);

    // style-only mutation: no regeneration
    let mut restyled = config.clone();
    restyled.styles.constant_rh.line_width = 4.0;
    restyled.styles.zones.fill_color = [1.0, 0.0, 0.0, 0.3];
    cache.ensure_fresh(&restyled).unwrap();
    assert_eq!(cache.recompute_count(), 1);

    // geometry mutation: exactly one more pass
    let mut resteped = config.clone();
    resteped.limits.step_temp = 0.5;
    cache.ensure_fresh(&resteped).unwrap();
    assert_eq!(cache.recompute_count(), 2);
    cache.ensure_fresh(&resteped).unwrap();
    assert_eq!(cache.recompute_count(), 2);

    // flipping back to the first fingerprint regenerates again: the cache
    // holds one snapshot, keyed by the last fingerprint
    cache.ensure_fresh(&config).unwrap();
    assert_eq!(cache.recompute_count(), 3);
}

#[test]
fn snapshots_are_whole_collections() {
    let cache = ChartDataCache::new();
    let config = zoned_config();
    let first = cache.ensure_fresh(&config).unwrap();

    let mut wider = config.clone();
    wider.limits.range_temp_c = (0.0, 60.0);
    let second = cache.ensure_fresh(&wider).unwrap();

    // the old snapshot is untouched by the regeneration
    assert_eq!(first.saturation.points.len(), 51);
    assert_eq!(second.saturation.points.len(), 61);
    assert_eq!(first.zones.len(), 1);
    assert_eq!(second.zones.len(), 1);
}
