//! Curve generation for every chart family.
//!
//! All generation runs in SI plot units: dry-bulb temperature in °C on x,
//! humidity ratio in g/kg on y, pressure in kPa. Unit-system conversion
//! for IP output happens once per pass at the collection boundary.
//!
//! Family members whose trigger value lies wholly outside the valid
//! sub-saturation window come back as empty curves. Solver failures omit
//! the affected curve and surface a [`Diagnostic`]; the pass continues.

use crate::curve::{Curve, CurveKind, PlotPoint};
use crate::error::{ChartError, ChartResult, Diagnostic};
use hg_air::{AirError, moist_air};
use hg_config::ChartConfig;
use hg_core::numeric::{interp_monotonic, lerp, sample_inclusive};
use hg_core::solve::{SolveConfig, bisect};
use tracing::warn;

/// Factor from internal humidity ratio [kg/kg] to SI plot units [g/kg].
pub(crate) const FACTOR_W: f64 = 1000.0;

/// Temperature tolerance for saturation-boundary intersections [°C].
///
/// Strictly tighter than any sensible temperature step; the bisection
/// bracket is never wider than one step.
pub(crate) const SATURATION_CROSSING_TOL_C: f64 = 1e-3;

pub(crate) fn crossing_solve_config() -> SolveConfig {
    SolveConfig {
        max_iterations: 64,
        abs_tol: SATURATION_CROSSING_TOL_C,
    }
}

/// Shared inputs of one generation pass.
pub(crate) struct GenContext<'a> {
    pub config: &'a ChartConfig,
    /// Chart pressure [kPa], fixed for the whole pass.
    pub pressure_kpa: f64,
    /// Chart box in SI plot units.
    pub t_min: f64,
    pub t_max: f64,
    pub w_min: f64,
    pub w_max: f64,
    /// Temperature where the saturation curve crosses `w_min`, when it
    /// enters the chart from below; interior families start there.
    pub dbt_min_seen: Option<f64>,
    /// Saturation curve over the full temperature range.
    pub saturation: Curve,
}

impl GenContext<'_> {
    /// Left edge for interior families.
    pub(crate) fn interior_t_start(&self) -> f64 {
        self.dbt_min_seen.unwrap_or(self.t_min)
    }
}

/// Saturation humidity ratio in plot units [g/kg].
pub(crate) fn w_sat_gkg(t_c: f64, p_kpa: f64) -> Result<f64, AirError> {
    Ok(FACTOR_W * moist_air::saturation_humidity_ratio(t_c, p_kpa)?)
}

/// Family trigger values from a stepped range, end exclusive.
pub(crate) fn stepped_values(start: f64, end: f64, step: f64) -> Vec<f64> {
    if step <= 0.0 || end <= start {
        return Vec::new();
    }
    let n = ((end - start) / step - 1e-9).ceil() as usize;
    (0..n).map(|i| start + i as f64 * step).collect()
}

/// Build the saturation curve over `[t_min, t_max]` at `step`.
///
/// Monotonic in both axes by construction; a failure here aborts the pass
/// since every other family clips against this boundary.
pub(crate) fn make_saturation_curve(
    t_min: f64,
    t_max: f64,
    step: f64,
    p_kpa: f64,
) -> ChartResult<Curve> {
    let temps = sample_inclusive(t_min, t_max, step);
    let mut points = Vec::with_capacity(temps.len());
    for t in temps {
        points.push(PlotPoint::new(t, w_sat_gkg(t, p_kpa)?));
    }
    Ok(Curve::new(CurveKind::Saturation, 100.0, points))
}

/// Temperature where the saturation curve crosses `w_min`, if it enters
/// the chart from below the humidity floor.
///
/// Errors when the whole saturation curve lies below `w_min`: the chart
/// box would sit entirely in the supersaturated region.
pub(crate) fn find_dbt_min_seen(saturation: &Curve, w_min: f64) -> ChartResult<Option<f64>> {
    if saturation.points.iter().all(|p| p.w <= w_min) {
        return Err(ChartError::InvalidLimits {
            what: "chart limits lie entirely above the saturation curve",
        });
    }
    let first = match saturation.points.first() {
        Some(p) => p,
        None => {
            return Err(ChartError::InvalidLimits {
                what: "empty saturation curve",
            });
        }
    };
    if first.w >= w_min {
        return Ok(None);
    }
    let ws: Vec<f64> = saturation.points.iter().map(|p| p.w).collect();
    let ts: Vec<f64> = saturation.points.iter().map(|p| p.t).collect();
    let t_seen = interp_monotonic(&ws, &ts, w_min)
        .map_err(|_| ChartError::InvalidLimits {
            what: "saturation curve too short to interpolate",
        })?;
    Ok(Some(t_seen))
}

/// RH window with any member visible inside the chart box, in percent.
fn rh_window(ctx: &GenContext<'_>) -> Result<(f64, f64), AirError> {
    let rh_min = moist_air::relative_humidity_from_w(
        ctx.t_max,
        ctx.w_min / FACTOR_W,
        ctx.pressure_kpa,
    )? * 100.0;
    let rh_max = moist_air::relative_humidity_from_w(
        ctx.interior_t_start(),
        ctx.w_max / FACTOR_W,
        ctx.pressure_kpa,
    )? * 100.0;
    Ok((rh_min.max(0.0), rh_max.min(100.0)))
}

/// Points of one constant-RH curve over the given temperatures, truncated
/// at the humidity plot limit with an interpolated boundary point.
pub(crate) fn constant_rh_points(
    temps: &[f64],
    rh_percent: f64,
    p_kpa: f64,
    w_cap: Option<f64>,
) -> Result<Vec<PlotPoint>, AirError> {
    let mut points: Vec<PlotPoint> = Vec::with_capacity(temps.len());
    for &t in temps {
        let w = FACTOR_W * moist_air::humidity_ratio_from_rh(t, rh_percent, p_kpa)?;
        if let Some(cap) = w_cap {
            if w > cap {
                if let Some(prev) = points.last().copied() {
                    let frac = (cap - prev.w) / (w - prev.w);
                    points.push(PlotPoint::new(lerp(prev.t, t, frac), cap));
                }
                break;
            }
        }
        points.push(PlotPoint::new(t, w));
    }
    Ok(points)
}

/// Constant relative humidity curves.
pub(crate) fn make_constant_rh_curves(ctx: &GenContext<'_>) -> (Vec<Curve>, Vec<Diagnostic>) {
    let params = &ctx.config.families.constant_rh;
    let mut curves = Vec::new();
    let mut diagnostics = Vec::new();

    let (rh_lo, rh_hi) = match rh_window(ctx) {
        Ok(window) => window,
        Err(err) => {
            diagnostics.push(Diagnostic::CurveSolveFailed {
                kind: CurveKind::ConstantRh,
                trigger: f64::NAN,
                detail: format!("RH window evaluation failed: {err}"),
            });
            return (curves, diagnostics);
        }
    };

    let mut values = params.values.clone();
    values.sort_by(|a, b| a.total_cmp(b));
    values.dedup();

    let step = ctx.config.limits.step_temp;
    let start = match ctx.dbt_min_seen {
        Some(seen) => step * (seen / step).floor(),
        None => ctx.t_min,
    };
    let temps = sample_inclusive(start, ctx.t_max, step);

    for rh in values {
        if rh <= rh_lo || rh >= rh_hi {
            curves.push(Curve::empty(CurveKind::ConstantRh, rh));
            continue;
        }
        match constant_rh_points(&temps, rh, ctx.pressure_kpa, Some(ctx.w_max)) {
            Ok(points) => curves.push(Curve::new(CurveKind::ConstantRh, rh, points)),
            Err(err) => diagnostics.push(Diagnostic::CurveSolveFailed {
                kind: CurveKind::ConstantRh,
                trigger: rh,
                detail: err.to_string(),
            }),
        }
    }
    (curves, diagnostics)
}

/// Iso-line families solved against the saturation boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IsoFamily {
    Enthalpy,
    Volume,
}

impl IsoFamily {
    fn kind(self) -> CurveKind {
        match self {
            Self::Enthalpy => CurveKind::ConstantEnthalpy,
            Self::Volume => CurveKind::ConstantVolume,
        }
    }

    /// Family value at a chart state (t in °C, w in g/kg).
    pub(crate) fn value_at(self, t_c: f64, w_gkg: f64, p_kpa: f64) -> f64 {
        let w = w_gkg / FACTOR_W;
        match self {
            Self::Enthalpy => moist_air::enthalpy(t_c, w),
            Self::Volume => moist_air::specific_volume(t_c, w, p_kpa),
        }
    }

    /// Humidity ratio [g/kg] on the iso-line at a dry-bulb temperature.
    fn w_on_line(self, t_c: f64, value: f64, p_kpa: f64) -> f64 {
        let w = match self {
            Self::Enthalpy => moist_air::humidity_ratio_from_enthalpy(t_c, value),
            Self::Volume => moist_air::humidity_ratio_from_specific_volume(t_c, value, p_kpa),
        };
        FACTOR_W * w
    }

    /// Dry-bulb temperature where the iso-line reaches a humidity ratio.
    pub(crate) fn t_at_w(self, w_gkg: f64, value: f64, p_kpa: f64) -> f64 {
        let w = w_gkg / FACTOR_W;
        match self {
            Self::Enthalpy => moist_air::dry_bulb_from_enthalpy(w, value),
            Self::Volume => moist_air::dry_bulb_from_specific_volume(w, value, p_kpa),
        }
    }
}

/// Family value along the saturation curve, one entry per curve point.
pub(crate) fn saturation_value_table(
    saturation: &Curve,
    family: IsoFamily,
    p_kpa: f64,
) -> Vec<f64> {
    saturation
        .points
        .iter()
        .map(|p| family.value_at(p.t, p.w, p_kpa))
        .collect()
}

/// Intersection of one iso-line with the saturation curve.
///
/// `table` holds the family value at each saturation point and is
/// monotonically increasing in temperature. Returns `None` when the
/// crossing lies left of the curve's first sample (the visible segment
/// then starts at the chart edge).
pub(crate) fn saturation_crossing(
    saturation: &Curve,
    table: &[f64],
    family: IsoFamily,
    value: f64,
    p_kpa: f64,
) -> Result<Option<PlotPoint>, Diagnostic> {
    if table.is_empty() || value <= table[0] {
        return Ok(None);
    }
    let idx = match table.iter().position(|&v| v > value) {
        Some(i) => i,
        // beyond the last sample: trigger filtered out upstream
        None => table.len() - 1,
    };
    let lo = saturation.points[idx - 1].t;
    let hi = saturation.points[idx].t;
    let objective = |t: f64| match moist_air::saturation_humidity_ratio(t, p_kpa) {
        Ok(w_sat) => family.value_at(t, FACTOR_W * w_sat, p_kpa) - value,
        Err(_) => f64::NAN,
    };
    let outcome = bisect(objective, lo, hi, &crossing_solve_config()).map_err(|err| {
        Diagnostic::CurveSolveFailed {
            kind: family.kind(),
            trigger: value,
            detail: format!("saturation crossing did not converge: {err}"),
        }
    })?;
    let w = w_sat_gkg(outcome.root, p_kpa).map_err(|err| Diagnostic::CurveSolveFailed {
        kind: family.kind(),
        trigger: value,
        detail: err.to_string(),
    })?;
    Ok(Some(PlotPoint::new(outcome.root, w)))
}

/// One constant-enthalpy or constant-volume curve: from its saturation
/// crossing down to the humidity floor, sampled in temperature.
fn make_iso_curve(
    ctx: &GenContext<'_>,
    table: &[f64],
    family: IsoFamily,
    value: f64,
) -> Result<Curve, Diagnostic> {
    let p = ctx.pressure_kpa;
    let start = match saturation_crossing(&ctx.saturation, table, family, value, p)? {
        Some(point) => point,
        None => {
            // crossing left of the chart; enter at the left edge
            let t0 = ctx.t_min;
            PlotPoint::new(t0, family.w_on_line(t0, value, p))
        }
    };
    let t_end = family.t_at_w(ctx.w_min, value, p).min(ctx.t_max);
    if t_end <= start.t {
        return Ok(Curve::empty(family.kind(), value));
    }

    let mut points = vec![start];
    for t in sample_inclusive(start.t, t_end, ctx.config.limits.step_temp) {
        if t <= start.t + SATURATION_CROSSING_TOL_C {
            continue;
        }
        points.push(PlotPoint::new(t, family.w_on_line(t, value, p)));
    }
    Ok(Curve::new(family.kind(), value, points))
}

/// Constant enthalpy or constant specific volume family.
pub(crate) fn make_iso_family_curves(
    ctx: &GenContext<'_>,
    family: IsoFamily,
) -> (Vec<Curve>, Vec<Diagnostic>) {
    let (range, step) = match family {
        IsoFamily::Enthalpy => (
            ctx.config.families.constant_enthalpy.range,
            ctx.config.families.constant_enthalpy.step,
        ),
        IsoFamily::Volume => (
            ctx.config.families.constant_volume.range,
            ctx.config.families.constant_volume.step,
        ),
    };
    let mut curves = Vec::new();
    let mut diagnostics = Vec::new();

    let table = saturation_value_table(&ctx.saturation, family, ctx.pressure_kpa);
    let v_floor = family.value_at(ctx.interior_t_start(), ctx.w_min, ctx.pressure_kpa);
    let v_ceil = match table.last() {
        Some(&v) => v,
        None => return (curves, diagnostics),
    };

    let values = stepped_values(range.0, range.1, step);
    let in_window: Vec<f64> = values
        .iter()
        .copied()
        .filter(|v| *v > v_floor && *v < v_ceil)
        .collect();
    if in_window.is_empty() && !values.is_empty() {
        warn!(
            family = ?family.kind(),
            count = values.len(),
            floor = v_floor,
            ceil = v_ceil,
            "all curves of family are outside chart limits"
        );
    }

    for value in values {
        if !(value > v_floor && value < v_ceil) {
            curves.push(Curve::empty(family.kind(), value));
            continue;
        }
        match make_iso_curve(ctx, &table, family, value) {
            Ok(curve) => curves.push(curve),
            Err(diag) => diagnostics.push(diag),
        }
    }
    (curves, diagnostics)
}

/// Constant wet-bulb temperature curves.
///
/// Each curve starts on the saturation boundary (wet bulb equals dry bulb
/// there) and descends with strictly decreasing humidity ratio until it
/// leaves the chart floor or reaches the right edge.
pub(crate) fn make_constant_wet_bulb_curves(
    ctx: &GenContext<'_>,
) -> (Vec<Curve>, Vec<Diagnostic>) {
    let params = &ctx.config.families.constant_wet_bulb;
    let p = ctx.pressure_kpa;
    let mut curves = Vec::new();
    let mut diagnostics = Vec::new();

    let window = || -> Result<(f64, f64), AirError> {
        let mut wt_min =
            moist_air::wet_bulb_temperature(ctx.interior_t_start(), ctx.w_min / FACTOR_W, p)?;
        if (-0.75..0.0).contains(&wt_min) {
            // slope-change zone around the freezing branch switch
            wt_min = 0.0;
        }
        let w_top_right = (ctx.w_max / FACTOR_W)
            .min(moist_air::saturation_humidity_ratio(ctx.t_max, p)?);
        let wt_top_right = moist_air::wet_bulb_temperature(ctx.t_max, w_top_right, p)?;
        Ok((wt_min, wt_top_right))
    };
    let (wt_min, wt_max) = match window() {
        Ok(w) => w,
        Err(err) => {
            diagnostics.push(Diagnostic::CurveSolveFailed {
                kind: CurveKind::ConstantWetBulb,
                trigger: f64::NAN,
                detail: format!("wet-bulb window evaluation failed: {err}"),
            });
            return (curves, diagnostics);
        }
    };

    let values = stepped_values(params.range.0, params.range.1, params.step);
    if !values.is_empty() && values.iter().all(|wbt| !(*wbt > wt_min && *wbt < wt_max)) {
        warn!(
            count = values.len(),
            lo = wt_min,
            hi = wt_max,
            "all wet-bulb curves are outside chart limits"
        );
    }

    for wbt in values {
        if !(wbt > wt_min && wbt < wt_max) {
            curves.push(Curve::empty(CurveKind::ConstantWetBulb, wbt));
            continue;
        }
        match make_wet_bulb_curve(ctx, wbt) {
            Ok(curve) => curves.push(curve),
            Err(err) => diagnostics.push(Diagnostic::CurveSolveFailed {
                kind: CurveKind::ConstantWetBulb,
                trigger: wbt,
                detail: err.to_string(),
            }),
        }
    }
    (curves, diagnostics)
}

fn make_wet_bulb_curve(ctx: &GenContext<'_>, wbt: f64) -> Result<Curve, AirError> {
    let p = ctx.pressure_kpa;
    let step = ctx.config.limits.step_temp;
    let w_start = w_sat_gkg(wbt, p)?;
    let mut points = vec![PlotPoint::new(wbt, w_start)];

    for t in sample_inclusive(wbt, ctx.t_max, step) {
        if t <= wbt {
            continue;
        }
        let w = FACTOR_W * moist_air::humidity_ratio_from_wet_bulb(t, wbt, p)?;
        if w < ctx.w_min {
            if let Some(prev) = points.last().copied() {
                // interpolated crossing with the chart floor
                let frac = (ctx.w_min - prev.w) / (w - prev.w);
                points.push(PlotPoint::new(lerp(prev.t, t, frac), ctx.w_min));
            }
            break;
        }
        points.push(PlotPoint::new(t, w));
    }
    Ok(Curve::new(CurveKind::ConstantWetBulb, wbt, points))
}

/// Vertical dry-bulb grid lines.
pub(crate) fn make_dry_bulb_grid(ctx: &GenContext<'_>) -> (Vec<Curve>, Vec<Diagnostic>) {
    let params = &ctx.config.families.dry_bulb_grid;
    let p = ctx.pressure_kpa;
    let mut curves = Vec::new();
    let mut diagnostics = Vec::new();

    for t in stepped_values(ctx.t_min, ctx.t_max, params.step) {
        if let Some(seen) = ctx.dbt_min_seen {
            if t <= seen {
                continue;
            }
        }
        let top = if params.hide_above_saturation {
            match w_sat_gkg(t, p) {
                Ok(w_sat) => w_sat.min(ctx.w_max),
                Err(err) => {
                    diagnostics.push(Diagnostic::CurveSolveFailed {
                        kind: CurveKind::DryBulbGrid,
                        trigger: t,
                        detail: err.to_string(),
                    });
                    continue;
                }
            }
        } else {
            ctx.w_max
        };
        if top <= ctx.w_min {
            curves.push(Curve::empty(CurveKind::DryBulbGrid, t));
            continue;
        }
        curves.push(Curve::new(
            CurveKind::DryBulbGrid,
            t,
            vec![PlotPoint::new(t, ctx.w_min), PlotPoint::new(t, top)],
        ));
    }
    (curves, diagnostics)
}

/// Horizontal humidity-ratio grid lines, each starting at its dew point.
pub(crate) fn make_humidity_grid(ctx: &GenContext<'_>) -> (Vec<Curve>, Vec<Diagnostic>) {
    let params = &ctx.config.families.humidity_grid;
    let p = ctx.pressure_kpa;
    let mut curves = Vec::new();
    let mut diagnostics = Vec::new();

    let ws = stepped_values(
        ctx.w_min + params.step,
        ctx.w_max + params.step / 10.0,
        params.step,
    );
    for w in ws {
        let pv = moist_air::vapor_pressure_from_humidity_ratio(w / FACTOR_W, p);
        let t_dp = match moist_air::dew_point_temperature(pv) {
            Ok(t) => t,
            Err(err) => {
                diagnostics.push(Diagnostic::CurveSolveFailed {
                    kind: CurveKind::HumidityGrid,
                    trigger: w,
                    detail: err.to_string(),
                });
                continue;
            }
        };
        if t_dp > ctx.t_max {
            // line would lie entirely in the supersaturated region
            curves.push(Curve::empty(CurveKind::HumidityGrid, w));
            continue;
        }
        let t_left = t_dp.max(ctx.t_min);
        curves.push(Curve::new(
            CurveKind::HumidityGrid,
            w,
            vec![PlotPoint::new(t_left, w), PlotPoint::new(ctx.t_max, w)],
        ));
    }
    (curves, diagnostics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hg_core::units::constants::STD_ATM_KPA;

    fn test_ctx(config: &ChartConfig) -> GenContext<'_> {
        let (t_min, t_max) = config.limits.range_temp_c;
        let (w_min, w_max) = config.limits.range_humidity_g_kg;
        let saturation =
            make_saturation_curve(t_min, t_max, config.limits.step_temp, STD_ATM_KPA).unwrap();
        let dbt_min_seen = find_dbt_min_seen(&saturation, w_min).unwrap();
        GenContext {
            config,
            pressure_kpa: STD_ATM_KPA,
            t_min,
            t_max,
            w_min,
            w_max,
            dbt_min_seen,
            saturation,
        }
    }

    #[test]
    fn stepped_values_are_end_exclusive() {
        assert_eq!(stepped_values(5.0, 20.0, 5.0), vec![5.0, 10.0, 15.0]);
        assert!(stepped_values(5.0, 5.0, 1.0).is_empty());
        assert!(stepped_values(5.0, 4.0, 1.0).is_empty());
    }

    #[test]
    fn saturation_curve_is_monotonic() {
        let curve = make_saturation_curve(0.0, 50.0, 1.0, STD_ATM_KPA).unwrap();
        assert_eq!(curve.points.len(), 51);
        for pair in curve.points.windows(2) {
            assert!(pair[1].w > pair[0].w);
            assert!(pair[1].t > pair[0].t);
        }
    }

    #[test]
    fn dbt_min_seen_when_floor_is_raised() {
        let saturation = make_saturation_curve(0.0, 50.0, 1.0, STD_ATM_KPA).unwrap();
        // w_sat(0 °C) ≈ 3.8 g/kg, so a 5 g/kg floor hides the cold corner
        let seen = find_dbt_min_seen(&saturation, 5.0).unwrap().unwrap();
        assert!(seen > 0.0 && seen < 10.0);
        let w_at_seen = w_sat_gkg(seen, STD_ATM_KPA).unwrap();
        assert!((w_at_seen - 5.0).abs() < 0.2);
        // floor at zero: saturation starts inside the box
        assert!(find_dbt_min_seen(&saturation, 0.0).unwrap().is_none());
    }

    #[test]
    fn limits_above_saturation_rejected() {
        let saturation = make_saturation_curve(0.0, 10.0, 1.0, STD_ATM_KPA).unwrap();
        let err = find_dbt_min_seen(&saturation, 30.0).unwrap_err();
        assert!(matches!(err, ChartError::InvalidLimits { .. }));
    }

    #[test]
    fn rh_curves_stay_sub_saturated_and_capped() {
        let config = ChartConfig::default();
        let ctx = test_ctx(&config);
        let (curves, diagnostics) = make_constant_rh_curves(&ctx);
        assert!(diagnostics.is_empty());
        assert!(curves.iter().any(|c| !c.is_empty()));
        for curve in curves.iter().filter(|c| !c.is_empty()) {
            for p in &curve.points {
                let w_sat = w_sat_gkg(p.t, STD_ATM_KPA).unwrap();
                assert!(p.w <= w_sat + 1e-9, "RH {} at {} °C", curve.value, p.t);
                assert!(p.w <= ctx.w_max + 1e-9);
            }
        }
    }

    #[test]
    fn rh_50_truncates_at_plot_limit() {
        let mut config = ChartConfig::default();
        config.limits.range_humidity_g_kg = (0.0, 30.0);
        config.families.constant_rh.values = vec![50.0];
        let ctx = test_ctx(&config);
        let (curves, _) = make_constant_rh_curves(&ctx);
        let curve = &curves[0];
        assert!(!curve.is_empty());
        assert!(curve.points.len() <= 51);
        let last = curve.points.last().unwrap();
        // w(50 °C, RH 50) ≈ 42 g/kg, so the curve must stop at the cap
        assert!((last.w - 30.0).abs() < 1e-9);
        assert!(last.t < 50.0);
    }

    #[test]
    fn enthalpy_above_reachable_window_is_empty() {
        let mut config = ChartConfig::default();
        config.families.constant_enthalpy.range = (400.0, 410.0);
        let ctx = test_ctx(&config);
        let (curves, diagnostics) = make_iso_family_curves(&ctx, IsoFamily::Enthalpy);
        assert!(diagnostics.is_empty());
        assert_eq!(curves.len(), 2);
        assert!(curves.iter().all(Curve::is_empty));
    }

    #[test]
    fn enthalpy_curves_start_on_saturation() {
        let config = ChartConfig::default();
        let ctx = test_ctx(&config);
        let (curves, diagnostics) = make_iso_family_curves(&ctx, IsoFamily::Enthalpy);
        assert!(diagnostics.is_empty());
        let visible: Vec<&Curve> = curves.iter().filter(|c| !c.is_empty()).collect();
        assert!(!visible.is_empty());
        for curve in visible {
            let first = curve.points[0];
            if first.t > ctx.t_min + 1e-9 {
                let w_sat = w_sat_gkg(first.t, STD_ATM_KPA).unwrap();
                assert!(
                    (first.w - w_sat).abs() < 0.1,
                    "h={} first point off saturation",
                    curve.value
                );
            }
            // below saturation over the rest of the span
            for p in &curve.points[1..] {
                let w_sat = w_sat_gkg(p.t, STD_ATM_KPA).unwrap();
                assert!(p.w <= w_sat + 0.05);
            }
            // enthalpy is constant along the curve
            for p in &curve.points {
                let h = moist_air::enthalpy(p.t, p.w / FACTOR_W);
                assert!((h - curve.value).abs() < 0.2, "h drifted: {h}");
            }
        }
    }

    #[test]
    fn volume_curves_hold_their_volume() {
        let config = ChartConfig::default();
        let ctx = test_ctx(&config);
        let (curves, diagnostics) = make_iso_family_curves(&ctx, IsoFamily::Volume);
        assert!(diagnostics.is_empty());
        for curve in curves.iter().filter(|c| !c.is_empty()) {
            for p in &curve.points {
                let v = moist_air::specific_volume(p.t, p.w / FACTOR_W, STD_ATM_KPA);
                assert!((v - curve.value).abs() < 1e-3);
            }
        }
    }

    #[test]
    fn wet_bulb_20_shape() {
        let mut config = ChartConfig::default();
        config.limits.range_temp_c = (20.0, 40.0);
        config.families.constant_wet_bulb.range = (20.0, 25.0);
        config.families.constant_wet_bulb.step = 5.0;
        let ctx = test_ctx(&config);
        let (curves, diagnostics) = make_constant_wet_bulb_curves(&ctx);
        assert!(diagnostics.is_empty());
        let curve = curves.iter().find(|c| c.value == 20.0).unwrap();
        assert!(!curve.is_empty());

        // starts at dry-bulb = wet-bulb on the saturation curve
        let first = curve.points[0];
        assert!((first.t - 20.0).abs() < 1e-9);
        let w_sat = w_sat_gkg(20.0, STD_ATM_KPA).unwrap();
        assert!((first.w - w_sat).abs() < 1e-6);

        // ends at the right edge, strictly decreasing humidity ratio
        let last = curve.points.last().unwrap();
        assert!((last.t - 40.0).abs() < 1e-9);
        for pair in curve.points.windows(2) {
            assert!(pair[1].w < pair[0].w);
        }
    }

    #[test]
    fn dry_bulb_grid_clips_at_saturation() {
        let config = ChartConfig::default();
        let ctx = test_ctx(&config);
        let (curves, diagnostics) = make_dry_bulb_grid(&ctx);
        assert!(diagnostics.is_empty());
        for curve in curves.iter().filter(|c| !c.is_empty()) {
            assert_eq!(curve.points.len(), 2);
            let top = curve.points[1];
            let w_sat = w_sat_gkg(top.t, STD_ATM_KPA).unwrap();
            assert!(top.w <= w_sat + 1e-9);
            assert!(top.w <= ctx.w_max + 1e-9);
        }
    }

    #[test]
    fn humidity_grid_starts_at_dew_point() {
        let config = ChartConfig::default();
        let ctx = test_ctx(&config);
        let (curves, diagnostics) = make_humidity_grid(&ctx);
        assert!(diagnostics.is_empty());
        let line = curves.iter().find(|c| c.value == 10.0).unwrap();
        let left = line.points[0];
        // dew point for w = 10 g/kg at sea level is ~14 °C
        assert!((left.t - 14.0).abs() < 1.0, "t_dp = {}", left.t);
        let w_sat_at_left = w_sat_gkg(left.t, STD_ATM_KPA).unwrap();
        assert!((w_sat_at_left - 10.0).abs() < 0.5);
    }
}
