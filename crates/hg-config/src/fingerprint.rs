//! Geometry fingerprint for mutation-aware regeneration.
//!
//! The fingerprint is a SHA-256 over a canonical, geometry-only projection
//! of the configuration: ranges, steps, enable flags, sorted trigger
//! lists, pressure source, zone geometry and the unit system. Style
//! fields and label placement hints affect rendering only and are
//! excluded, so two configurations differing only in styling fingerprint
//! equal.

use hg_core::units::UnitSystem;
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::schema::{ChartConfig, ZoneSpecKind};

/// Bumped whenever the projection layout or generation semantics change,
/// so stale caches from older engine versions cannot collide.
const GEOMETRY_SCHEMA_VERSION: &str = "hygrochart-geometry-1";

/// Content fingerprint of the geometry-affecting configuration state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Serialize)]
struct FamilyKey {
    enabled: bool,
    // sorted trigger values, or (range, step) for stepped families
    values: Option<Vec<f64>>,
    range: Option<(f64, f64)>,
    step: Option<f64>,
}

#[derive(Serialize)]
struct ZoneKey<'a> {
    name: &'a str,
    kind: &'a ZoneSpecKind,
}

#[derive(Serialize)]
struct GeometryKey<'a> {
    version: &'static str,
    units: UnitSystem,
    range_temp_c: (f64, f64),
    range_humidity_g_kg: (f64, f64),
    altitude_m: f64,
    pressure_kpa: Option<f64>,
    step_temp: f64,
    constant_rh: FamilyKey,
    constant_volume: FamilyKey,
    constant_enthalpy: FamilyKey,
    constant_wet_bulb: FamilyKey,
    dry_bulb_grid: FamilyKey,
    dry_bulb_hide_above_saturation: bool,
    humidity_grid: FamilyKey,
    zones: Vec<ZoneKey<'a>>,
}

fn sorted(values: &[f64]) -> Vec<f64> {
    let mut out = values.to_vec();
    out.sort_by(|a, b| a.total_cmp(b));
    out.dedup();
    out
}

/// Compute the geometry fingerprint of a configuration.
pub fn fingerprint(config: &ChartConfig) -> Fingerprint {
    let families = &config.families;
    let key = GeometryKey {
        version: GEOMETRY_SCHEMA_VERSION,
        units: config.units,
        range_temp_c: config.limits.range_temp_c,
        range_humidity_g_kg: config.limits.range_humidity_g_kg,
        altitude_m: config.limits.altitude_m,
        pressure_kpa: config.limits.pressure_kpa,
        step_temp: config.limits.step_temp,
        constant_rh: FamilyKey {
            enabled: families.constant_rh.enabled,
            values: Some(sorted(&families.constant_rh.values)),
            range: None,
            step: None,
        },
        constant_volume: FamilyKey {
            enabled: families.constant_volume.enabled,
            values: None,
            range: Some(families.constant_volume.range),
            step: Some(families.constant_volume.step),
        },
        constant_enthalpy: FamilyKey {
            enabled: families.constant_enthalpy.enabled,
            values: None,
            range: Some(families.constant_enthalpy.range),
            step: Some(families.constant_enthalpy.step),
        },
        constant_wet_bulb: FamilyKey {
            enabled: families.constant_wet_bulb.enabled,
            values: None,
            range: Some(families.constant_wet_bulb.range),
            step: Some(families.constant_wet_bulb.step),
        },
        dry_bulb_grid: FamilyKey {
            enabled: families.dry_bulb_grid.enabled,
            values: None,
            range: None,
            step: Some(families.dry_bulb_grid.step),
        },
        dry_bulb_hide_above_saturation: families.dry_bulb_grid.hide_above_saturation,
        humidity_grid: FamilyKey {
            enabled: families.humidity_grid.enabled,
            values: None,
            range: None,
            step: Some(families.humidity_grid.step),
        },
        zones: config
            .zones
            .iter()
            .map(|z| ZoneKey {
                name: &z.name,
                kind: &z.kind,
            })
            .collect(),
    };

    let mut hasher = Sha256::new();
    let encoded = serde_json::to_string(&key).unwrap_or_default();
    hasher.update(encoded.as_bytes());
    Fingerprint(format!("{:x}", hasher.finalize()))
}
