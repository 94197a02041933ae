//! Zone generation: closed polygons bounded by chart curves.
//!
//! A zone ring is walked in a consistent direction: the upper bounding
//! curve forward across the shared domain, the lower bounding curve
//! backward, closed on the first vertex. Zones that need a bounding curve
//! not present among the generated families synthesize it with the same
//! builders the Curve Generator uses.

use crate::curve::{Curve, CurveKind, PlotPoint};
use crate::curves::{
    GenContext, IsoFamily, constant_rh_points, make_saturation_curve, saturation_crossing,
    saturation_value_table, w_sat_gkg,
};
use crate::error::Diagnostic;
use hg_config::{ZoneSpec, ZoneSpecKind};
use hg_core::numeric::{lerp, sample_inclusive};

/// Zone tag, doubling as the style key for renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZoneKind {
    DbtRh,
    EnthalpyRh,
    VolumeRh,
    DbtWmax,
    XyPoints,
    OverSaturated,
}

/// One named closed region of the chart.
///
/// The vertex ring is explicitly closed: the last vertex repeats the
/// first.
#[derive(Debug, Clone, PartialEq)]
pub struct Zone {
    pub name: String,
    pub kind: ZoneKind,
    pub points: Vec<PlotPoint>,
}

impl Zone {
    fn closed(name: String, kind: ZoneKind, mut points: Vec<PlotPoint>) -> Self {
        if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
            if first != last {
                points.push(first);
            }
        }
        Self { name, kind, points }
    }
}

fn skip(name: &str, detail: impl Into<String>) -> Diagnostic {
    Diagnostic::ZoneSkipped {
        name: name.to_string(),
        detail: detail.into(),
    }
}

/// Intersection of the infinite lines through two segments.
///
/// `None` when the lines are (close to) parallel.
fn segment_crossing(a: (PlotPoint, PlotPoint), b: (PlotPoint, PlotPoint)) -> Option<PlotPoint> {
    let a1 = a.1.w - a.0.w;
    let b1 = a.0.t - a.1.t;
    let c1 = a1 * a.0.t + b1 * a.0.w;
    let a2 = b.1.w - b.0.w;
    let b2 = b.0.t - b.1.t;
    let c2 = a2 * b.0.t + b2 * b.0.w;
    let det = a1 * b2 - a2 * b1;
    if det.abs() < 1e-12 {
        return None;
    }
    Some(PlotPoint::new(
        (c1 * b2 - c2 * b1) / det,
        (a1 * c2 - a2 * c1) / det,
    ))
}

/// Crossing of a saturation polyline with a horizontal line `w = level`,
/// between the samples straddling the level. The polyline must be
/// monotonically increasing in `w`.
fn horizontal_crossing(points: &[PlotPoint], level: f64) -> Option<PlotPoint> {
    let idx = points.iter().position(|p| p.w > level)?;
    if idx == 0 {
        return Some(points[0]);
    }
    let (p0, p1) = (points[idx - 1], points[idx]);
    let frac = (level - p0.w) / (p1.w - p0.w);
    Some(PlotPoint::new(lerp(p0.t, p1.t, frac), level))
}

/// Dispatch one zone specification.
pub(crate) fn build_zone(ctx: &GenContext<'_>, spec: &ZoneSpec) -> Result<Zone, Diagnostic> {
    match &spec.kind {
        ZoneSpecKind::DbtRh {
            t_min,
            t_max,
            rh_min,
            rh_max,
        } => dbt_rh_zone(ctx, &spec.name, *t_min, *t_max, *rh_min, *rh_max),
        ZoneSpecKind::EnthalpyRh {
            h_min,
            h_max,
            rh_min,
            rh_max,
        } => iso_rh_zone(
            ctx,
            &spec.name,
            IsoFamily::Enthalpy,
            ZoneKind::EnthalpyRh,
            *h_min,
            *h_max,
            *rh_min,
            *rh_max,
        ),
        ZoneSpecKind::VolumeRh {
            v_min,
            v_max,
            rh_min,
            rh_max,
        } => iso_rh_zone(
            ctx,
            &spec.name,
            IsoFamily::Volume,
            ZoneKind::VolumeRh,
            *v_min,
            *v_max,
            *rh_min,
            *rh_max,
        ),
        ZoneSpecKind::DbtWmax {
            t_min,
            t_max,
            w_min,
            w_max,
        } => dbt_wmax_zone(ctx, &spec.name, *t_min, *t_max, *w_min, *w_max),
        ZoneSpecKind::XyPoints { points } => {
            let ring: Vec<PlotPoint> = points.iter().map(|&(t, w)| PlotPoint::new(t, w)).collect();
            Ok(Zone::closed(spec.name.clone(), ZoneKind::XyPoints, ring))
        }
    }
}

/// Region between two dry-bulb temperatures and two constant-RH curves.
fn dbt_rh_zone(
    ctx: &GenContext<'_>,
    name: &str,
    t_min: f64,
    t_max: f64,
    rh_min: f64,
    rh_max: f64,
) -> Result<Zone, Diagnostic> {
    let temps = sample_inclusive(t_min, t_max, ctx.config.limits.step_temp);
    if temps.is_empty() {
        return Err(skip(name, "empty temperature span"));
    }
    let upper = constant_rh_points(&temps, rh_max, ctx.pressure_kpa, None)
        .map_err(|e| skip(name, e.to_string()))?;
    let lower = constant_rh_points(&temps, rh_min, ctx.pressure_kpa, None)
        .map_err(|e| skip(name, e.to_string()))?;

    // upper bound forward, lower bound reversed
    let mut ring = upper;
    ring.extend(lower.into_iter().rev());
    Ok(Zone::closed(name.to_string(), ZoneKind::DbtRh, ring))
}

/// Crossing of a sampled constant-RH curve with an iso-line segment.
///
/// `targets` holds the iso-family value at each RH-curve point and must
/// start below `value`; the last segment extrapolates when the crossing
/// lies beyond the sampled span.
fn cross_rh_with_segment(
    rh_points: &[PlotPoint],
    targets: &[f64],
    segment: (PlotPoint, PlotPoint),
    value: f64,
) -> Result<PlotPoint, String> {
    if rh_points.len() < 2 {
        return Err("bounding RH curve too short".to_string());
    }
    if targets[0] >= value {
        return Err(format!(
            "bounding RH curve starts past the iso-line value {value}"
        ));
    }
    let idx = match targets.iter().position(|&v| v > value) {
        Some(i) => i,
        None => rh_points.len() - 1,
    };
    let rh_segment = (rh_points[idx - 1], rh_points[idx]);
    segment_crossing(segment, rh_segment)
        .ok_or_else(|| "iso-line parallel to bounding RH segment".to_string())
}

/// Region between two constant-enthalpy or constant-volume lines and two
/// constant-RH curves.
#[allow(clippy::too_many_arguments)]
fn iso_rh_zone(
    ctx: &GenContext<'_>,
    name: &str,
    family: IsoFamily,
    kind: ZoneKind,
    lo: f64,
    hi: f64,
    rh_min: f64,
    rh_max: f64,
) -> Result<Zone, Diagnostic> {
    let p = ctx.pressure_kpa;
    let step = ctx.config.limits.step_temp;

    // extend the range left until the lower iso-line's saturation crossing
    // is inside it
    let mut t_low = ctx.t_min;
    let mut guard = 0;
    loop {
        let w_sat = w_sat_gkg(t_low, p).map_err(|e| skip(name, e.to_string()))?;
        if family.value_at(t_low, w_sat, p) <= lo {
            break;
        }
        t_low -= 2.0 * step;
        guard += 1;
        if guard > 200 {
            return Err(skip(name, "could not bracket the lower iso-line"));
        }
    }

    let saturation = make_saturation_curve(t_low, ctx.t_max, step, p)
        .map_err(|e| skip(name, e.to_string()))?;
    let table = saturation_value_table(&saturation, family, p);

    let segment_for = |value: f64| -> Result<(PlotPoint, PlotPoint), Diagnostic> {
        let start = saturation_crossing(&saturation, &table, family, value, p)
            .map_err(|d| skip(name, d.to_string()))?
            .ok_or_else(|| skip(name, "iso-line does not reach the saturation curve"))?;
        let t_end = family.t_at_w(ctx.w_min, value, p);
        Ok((start, PlotPoint::new(t_end, ctx.w_min)))
    };
    let seg_lo = segment_for(lo)?;
    let seg_hi = segment_for(hi)?;

    let inside = |q: PlotPoint| {
        q.t >= ctx.t_min && q.t <= ctx.t_max && q.w >= ctx.w_min && q.w <= ctx.w_max
    };
    if ![seg_lo.0, seg_lo.1, seg_hi.0, seg_hi.1].iter().any(|&q| inside(q)) {
        return Err(skip(name, "outside chart limits"));
    }

    let temps = sample_inclusive(t_low, ctx.t_max, step);
    let lower =
        constant_rh_points(&temps, rh_min, p, None).map_err(|e| skip(name, e.to_string()))?;
    let upper =
        constant_rh_points(&temps, rh_max, p, None).map_err(|e| skip(name, e.to_string()))?;
    let targets_of = |points: &[PlotPoint]| -> Vec<f64> {
        points.iter().map(|q| family.value_at(q.t, q.w, p)).collect()
    };
    let lower_targets = targets_of(&lower);
    let upper_targets = targets_of(&upper);

    let bottom_left = cross_rh_with_segment(&lower, &lower_targets, seg_lo, lo)
        .map_err(|e| skip(name, e))?;
    let bottom_right =
        cross_rh_with_segment(&lower, &lower_targets, seg_hi, hi).map_err(|e| skip(name, e))?;
    let top_left =
        cross_rh_with_segment(&upper, &upper_targets, seg_lo, lo).map_err(|e| skip(name, e))?;
    let top_right =
        cross_rh_with_segment(&upper, &upper_targets, seg_hi, hi).map_err(|e| skip(name, e))?;

    let mut ring = vec![top_left];
    ring.extend(
        upper
            .iter()
            .copied()
            .filter(|q| q.w > top_left.w && q.w < top_right.w),
    );
    ring.push(top_right);
    ring.push(bottom_right);
    ring.extend(
        lower
            .iter()
            .copied()
            .filter(|q| q.w > bottom_left.w && q.w < bottom_right.w)
            .rev(),
    );
    ring.push(bottom_left);
    Ok(Zone::closed(name.to_string(), kind, ring))
}

/// Rectangle in (T, w), clipped against the saturation curve.
fn dbt_wmax_zone(
    ctx: &GenContext<'_>,
    name: &str,
    t_1: f64,
    t_2: f64,
    w_1: f64,
    w_2: f64,
) -> Result<Zone, Diagnostic> {
    if t_1 > ctx.t_max || t_2 < ctx.t_min || w_1 > ctx.w_max || w_2 < ctx.w_min {
        return Err(skip(name, "outside chart limits"));
    }
    let w_1 = w_1.max(ctx.w_min);
    let w_2 = w_2.min(ctx.w_max);
    let t_1 = t_1.max(ctx.t_min);
    let t_2 = t_2.min(ctx.t_max);

    let saturation =
        make_saturation_curve(t_1, t_2, ctx.config.limits.step_temp, ctx.pressure_kpa)
            .map_err(|e| skip(name, e.to_string()))?;
    let sat = &saturation.points;
    let (first, last) = match (sat.first(), sat.last()) {
        (Some(&f), Some(&l)) => (f, l),
        _ => return Err(skip(name, "empty saturation segment")),
    };

    if last.w <= w_1 {
        return Err(skip(name, "zone lies in the supersaturated region"));
    }
    if first.w >= w_2 {
        // saturation passes above: the plain rectangle is all valid air
        let ring = vec![
            PlotPoint::new(t_1, w_1),
            PlotPoint::new(t_1, w_2),
            PlotPoint::new(t_2, w_2),
            PlotPoint::new(t_2, w_1),
        ];
        return Ok(Zone::closed(name.to_string(), ZoneKind::DbtWmax, ring));
    }

    // walk clockwise from the bottom-left region
    let mut path: Vec<PlotPoint> = Vec::new();
    let idx_start = if first.w < w_1 {
        // saturation rises through the bottom edge
        let cut = horizontal_crossing(sat, w_1)
            .ok_or_else(|| skip(name, "no crossing with lower humidity bound"))?;
        path.push(cut);
        sat.iter().position(|q| q.w > w_1).unwrap_or(sat.len())
    } else {
        // saturation enters through the left edge
        path.push(PlotPoint::new(t_1, w_1));
        path.push(first);
        1
    };

    if last.w < w_2 {
        // saturation exits through the right edge
        path.extend(sat[idx_start..].iter().copied());
        path.push(PlotPoint::new(t_2, last.w));
    } else {
        // saturation exits through the top edge
        let idx_end = sat.iter().position(|q| q.w >= w_2).unwrap_or(sat.len());
        path.extend(sat[idx_start..idx_end].iter().copied());
        let cut = horizontal_crossing(sat, w_2)
            .ok_or_else(|| skip(name, "no crossing with upper humidity bound"))?;
        path.push(cut);
        path.push(PlotPoint::new(t_2, w_2));
    }
    path.push(PlotPoint::new(t_2, w_1));
    Ok(Zone::closed(name.to_string(), ZoneKind::DbtWmax, path))
}

/// Polygon of the supersaturated (fog) region between the saturation
/// curve and the chart frame, for renderers that mask it.
pub fn over_saturated_zone(
    saturation: &Curve,
    t_min: f64,
    t_max: f64,
    w_min: f64,
    w_max: f64,
) -> Option<Zone> {
    debug_assert_eq!(saturation.kind, CurveKind::Saturation);
    if saturation.outside_limits(t_min, t_max, w_min, w_max) {
        return None;
    }
    let sat = &saturation.points;
    let (first, last) = match (sat.first(), sat.last()) {
        (Some(&f), Some(&l)) => (f, l),
        _ => return None,
    };

    let mut path: Vec<PlotPoint> = Vec::new();
    let idx_start = if first.w < w_min {
        // saturation rises through the chart floor
        let cut = horizontal_crossing(sat, w_min)?;
        path.push(cut);
        path.push(PlotPoint::new(t_min, w_min));
        sat.iter().position(|q| q.w > w_min).unwrap_or(sat.len())
    } else {
        path.push(first);
        0
    };

    // top-left corner
    path.push(PlotPoint::new(t_min, w_max));

    if last.w < w_max {
        // region reaches the top-right corner
        path.push(PlotPoint::new(t_max, w_max));
        path.push(last);
        path.extend(sat[idx_start..].iter().rev().copied());
    } else {
        let cut = horizontal_crossing(sat, w_max)?;
        path.push(cut);
        let idx_end = sat.iter().position(|q| q.w >= w_max).unwrap_or(sat.len());
        path.extend(sat[idx_start..idx_end].iter().rev().copied());
    }
    Some(Zone::closed(
        "over-saturated".to_string(),
        ZoneKind::OverSaturated,
        path,
    ))
}
