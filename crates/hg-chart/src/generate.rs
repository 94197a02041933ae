//! One full chart-data generation pass.
//!
//! Order: validate → derive pressure → saturation curve → interior curve
//! families → zones. Configuration errors abort before any curve work;
//! per-curve and per-zone failures are collected as diagnostics and the
//! pass continues.

use crate::curve::{Curve, CurveKind};
use crate::curves::{
    GenContext, IsoFamily, find_dbt_min_seen, make_constant_rh_curves,
    make_constant_wet_bulb_curves, make_dry_bulb_grid, make_humidity_grid, make_iso_family_curves,
    make_saturation_curve,
};
use crate::error::{ChartResult, Diagnostic};
use crate::zones::{Zone, build_zone};
use hg_air::moist_air;
use hg_config::{ChartConfig, validate_config};
use hg_core::units::UnitSystem;
use tracing::debug;

/// The generated chart collections, an immutable snapshot handed to
/// renderers.
///
/// Plot coordinates follow `unit_system`; `pressure_kpa` and curve trigger
/// values stay in SI units as identifiers.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub unit_system: UnitSystem,
    /// Chart pressure [kPa], derived once per pass.
    pub pressure_kpa: f64,
    /// The saturation boundary, always present.
    pub saturation: Curve,
    /// Interior curve families, in generation order.
    pub curves: Vec<Curve>,
    /// Composed zones, in configuration order.
    pub zones: Vec<Zone>,
    /// Recoverable per-curve / per-zone failures of this pass.
    pub diagnostics: Vec<Diagnostic>,
}

impl ChartData {
    /// Interior curves of one family.
    pub fn curves_of(&self, kind: CurveKind) -> impl Iterator<Item = &Curve> {
        self.curves.iter().filter(move |c| c.kind == kind)
    }

    /// Find a family member by trigger value.
    pub fn curve(&self, kind: CurveKind, value: f64) -> Option<&Curve> {
        self.curves_of(kind)
            .find(|c| (c.value - value).abs() < 1e-9)
    }
}

/// Chart pressure: explicit value, or standard atmosphere at the
/// configured altitude.
pub fn chart_pressure_kpa(config: &ChartConfig) -> f64 {
    match config.limits.pressure_kpa {
        Some(p) => p,
        None => moist_air::pressure_by_altitude(config.limits.altitude_m),
    }
}

/// Run one full generation pass over a validated configuration.
pub fn generate_chart_data(config: &ChartConfig) -> ChartResult<ChartData> {
    validate_config(config)?;
    let pressure_kpa = chart_pressure_kpa(config);
    let (t_min, t_max) = config.limits.range_temp_c;
    let (w_min, w_max) = config.limits.range_humidity_g_kg;

    let saturation = make_saturation_curve(t_min, t_max, config.limits.step_temp, pressure_kpa)?;
    let dbt_min_seen = find_dbt_min_seen(&saturation, w_min)?;
    let ctx = GenContext {
        config,
        pressure_kpa,
        t_min,
        t_max,
        w_min,
        w_max,
        dbt_min_seen,
        saturation,
    };

    let mut curves: Vec<Curve> = Vec::new();
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let mut take = |(mut family_curves, mut family_diags): (Vec<Curve>, Vec<Diagnostic>)| {
        curves.append(&mut family_curves);
        diagnostics.append(&mut family_diags);
    };

    let families = &config.families;
    if families.dry_bulb_grid.enabled {
        take(make_dry_bulb_grid(&ctx));
    }
    if families.humidity_grid.enabled {
        take(make_humidity_grid(&ctx));
    }
    if families.constant_rh.enabled {
        take(make_constant_rh_curves(&ctx));
    }
    if families.constant_enthalpy.enabled {
        take(make_iso_family_curves(&ctx, IsoFamily::Enthalpy));
    }
    if families.constant_volume.enabled {
        take(make_iso_family_curves(&ctx, IsoFamily::Volume));
    }
    if families.constant_wet_bulb.enabled {
        take(make_constant_wet_bulb_curves(&ctx));
    }

    let mut zones = Vec::new();
    for spec in &config.zones {
        match build_zone(&ctx, spec) {
            Ok(zone) => zones.push(zone),
            Err(diag) => diagnostics.push(diag),
        }
    }

    let mut data = ChartData {
        unit_system: config.units,
        pressure_kpa,
        saturation: ctx.saturation,
        curves,
        zones,
        diagnostics,
    };
    if config.units == UnitSystem::Ip {
        convert_plot_units(&mut data, UnitSystem::Ip);
    }
    debug!(
        curves = data.curves.len(),
        zones = data.zones.len(),
        diagnostics = data.diagnostics.len(),
        pressure_kpa,
        "chart data generated"
    );
    Ok(data)
}

/// Convert the emitted plot coordinates from internal SI plot units to the
/// target unit system.
fn convert_plot_units(data: &mut ChartData, units: UnitSystem) {
    // internal coordinates are °C and g/kg; the factor rebases kg/kg
    let w_factor = units.humidity_plot_factor() / UnitSystem::Si.humidity_plot_factor();
    let convert = |points: &mut Vec<crate::curve::PlotPoint>| {
        for p in points.iter_mut() {
            p.t = units.temperature_plot(p.t);
            p.w *= w_factor;
        }
    };
    convert(&mut data.saturation.points);
    for curve in &mut data.curves {
        convert(&mut curve.points);
    }
    for zone in &mut data.zones {
        convert(&mut zone.points);
    }
}
